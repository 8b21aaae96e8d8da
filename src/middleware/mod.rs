/*
 * Responsibility
 * - Public interface of the middleware (re-exports)
 * - auth: bearer token -> AuthCtx, http/cors/security_headers: transport concerns
 */
pub mod auth;
pub mod bearer_auth;
pub mod cors;
pub mod http;
pub mod security_headers;
