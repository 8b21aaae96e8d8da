pub mod client;
pub mod factory;
pub mod gotrue;
pub mod types;

pub use client::{AccountAdmin, IdentityVerifier, ProviderError, ProviderResult};
pub use factory::build_provider;
pub use gotrue::GoTrueClient;
pub use types::{AuthUser, UserId};
