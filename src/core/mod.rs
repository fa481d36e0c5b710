//! Core types shared by the workflows

pub mod error;
pub mod repository;

pub use error::CommandError;
pub use repository::{CloneProtocol, RemoteRepository, RepositorySpec, Visibility};
