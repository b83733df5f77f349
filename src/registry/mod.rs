//! Registry module for Docker Hub interactions
//!
//! This module provides the endpoint facades for the Docker Hub v2 API:
//! login via [`Authenticator`], repository metadata and tag listing via
//! [`Repository`]. Both are thin layers over a single shared request
//! helper.

pub mod auth;
pub mod repository;
pub(crate) mod request;

pub use auth::{Authenticator, LoginResponse};
pub use repository::{DEFAULT_TAGS_PAGE, DEFAULT_TAGS_PAGE_SIZE, Repository};
