//! Repository metadata and tag listing

use reqwest::Method;
use serde_json::Value;

use crate::context::RegistryContext;
use crate::error::Result;
use crate::registry::request;

/// First page requested when the caller does not say otherwise.
pub const DEFAULT_TAGS_PAGE: u32 = 1;
/// Tags per page when the caller does not say otherwise.
pub const DEFAULT_TAGS_PAGE_SIZE: u32 = 5;

/// Handle on a single Docker Hub repository (`user/name`).
///
/// The user is lower-cased once at construction; Docker Hub names are
/// case-insensitive and the API only answers for the lowercase form.
#[derive(Debug)]
pub struct Repository<'a> {
    context: &'a RegistryContext,
    user: String,
    repository: String,
}

impl<'a> Repository<'a> {
    pub fn new(
        context: &'a RegistryContext,
        user: impl AsRef<str>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            context,
            user: user.as_ref().to_lowercase(),
            repository: repository.into(),
        }
    }

    /// Owner as stored, after lower-casing.
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Fetch repository metadata (description, star and pull counts, ...).
    ///
    /// The reply is passed through untyped; the registry owns the schema.
    pub async fn info(&self) -> Result<Value> {
        request::perform_request(self.context, Method::GET, &self.info_path(), None).await
    }

    /// Fetch the default first page of tags.
    pub async fn tags(&self) -> Result<Value> {
        self.tags_page(DEFAULT_TAGS_PAGE, DEFAULT_TAGS_PAGE_SIZE).await
    }

    /// Fetch one page of tags.
    ///
    /// No bounds validation happens here; the registry decides what an
    /// out-of-range page looks like.
    pub async fn tags_page(&self, page: u32, page_size: u32) -> Result<Value> {
        request::perform_request(self.context, Method::GET, &self.tags_path(page, page_size), None)
            .await
    }

    fn info_path(&self) -> String {
        format!("repositories/{}/{}", self.user, self.repository)
    }

    fn tags_path(&self, page: u32, page_size: u32) -> String {
        format!(
            "repositories/{}/{}/tags?page_size={}&page={}",
            self.user, self.repository, page_size, page
        )
    }
}
