//! Docker Hub Client Library
//!
//! A minimal client for the Docker Hub v2 registry API: authenticate a
//! user, fetch repository metadata and list image tags.
//!
//! ```no_run
//! use docker_hub_client::{RegistryContext, Repository};
//!
//! # async fn demo() -> docker_hub_client::Result<()> {
//! let ctx = RegistryContext::new()?;
//! let repo = Repository::new(&ctx, "library", "alpine");
//! let info = repo.info().await?;
//! let tags = repo.tags().await?;
//! # let _ = (info, tags);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod registry;

pub use context::{ContextBuilder, DEFAULT_REGISTRY_URL, RegistryContext};
pub use error::{HubError, Result};
pub use registry::{Authenticator, LoginResponse, Repository};
