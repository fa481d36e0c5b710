//! Hosting platform adapters
//!
//! The workflows talk to the hosting service only through [`HostingPlatform`].

pub mod github;
pub mod session;
pub mod traits;

pub use github::GitHubAdapter;
pub use session::{Credentials, Session, DEFAULT_API_URL};
pub use traits::{HostingPlatform, PlatformError};
