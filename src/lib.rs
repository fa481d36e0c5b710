//! quickrepo - create a GitHub repository and wire it to a local directory
//!
//! Two workflows are provided:
//! - `new`: create a remote repository and clone it into the current directory
//! - `here`: create a remote repository and push the current directory to it

pub mod cli;
pub mod core;
pub mod git;
pub mod platform;
pub mod telemetry;
pub mod util;

pub use core::error::CommandError;
pub use core::repository::{CloneProtocol, RemoteRepository, RepositorySpec, Visibility};
