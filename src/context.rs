//! Registry context configuration
//!
//! A [`RegistryContext`] bundles everything a request needs: the
//! registry base URL, default headers, the optional auth token and the
//! underlying HTTP client. Callers build one explicitly and pass it by
//! reference to [`Authenticator`](crate::Authenticator) and
//! [`Repository`](crate::Repository) handles; there is no process-wide
//! shared context.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::{HubError, Result};

/// Base URL of the Docker Hub v2 API.
pub const DEFAULT_REGISTRY_URL: &str = "https://hub.docker.com/v2/";

/// Configuration bundle threaded through every registry request.
#[derive(Debug, Clone)]
pub struct RegistryContext {
    registry_url: Url,
    default_headers: HeaderMap,
    auth_token: Option<String>,
    http_client: reqwest::Client,
}

impl RegistryContext {
    /// Context with all defaults: Docker Hub base URL, no headers, no token.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Return a context builder with default options.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    pub fn registry_url(&self) -> &Url {
        &self.registry_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Store the token obtained from a login call.
    ///
    /// A successful login does not update the context by itself; the
    /// caller stores the returned token here before issuing
    /// authenticated requests.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.auth_token = Some(token.into());
    }

    pub fn clear_auth_token(&mut self) {
        self.auth_token = None;
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

/// Builder for [`RegistryContext`].
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    registry_url: String,
    headers: Vec<(String, String)>,
    auth_token: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl ContextBuilder {
    /// Set the registry base URL. Requests are resolved relative to it.
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = url.into();
        self
    }

    /// Add a default header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the auth token up front, for callers that already hold one.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Supply a pre-configured HTTP client (timeouts, proxies, TLS).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the context, validating the base URL and default headers.
    pub fn build(self) -> Result<RegistryContext> {
        // Url::join treats a base without a trailing slash as a file and
        // drops its last segment, so "/v2" would lose the "v2".
        let mut base = self.registry_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let registry_url = Url::parse(&base)?;

        let mut default_headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| HubError::Config(format!("invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HubError::Config(format!("invalid header value for {}: {}", name, e)))?;
            default_headers.insert(name, value);
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::new(),
        };

        Ok(RegistryContext {
            registry_url,
            default_headers,
            auth_token: self.auth_token,
            http_client,
        })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            headers: Vec::new(),
            auth_token: None,
            http_client: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_points_at_docker_hub() {
        let ctx = RegistryContext::new().unwrap();
        assert_eq!(ctx.registry_url().as_str(), DEFAULT_REGISTRY_URL);
        assert!(ctx.auth_token().is_none());
        assert!(ctx.default_headers().is_empty());
    }

    #[test]
    fn builder_appends_missing_trailing_slash() {
        let ctx = RegistryContext::builder()
            .with_registry_url("https://registry.example.com/v2")
            .build()
            .unwrap();
        assert_eq!(ctx.registry_url().as_str(), "https://registry.example.com/v2/");
    }

    #[test]
    fn builder_rejects_invalid_url() {
        let err = RegistryContext::builder()
            .with_registry_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, HubError::Config(_)));
    }

    #[test]
    fn builder_rejects_invalid_header_name() {
        let err = RegistryContext::builder()
            .with_header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(matches!(err, HubError::Config(_)));
    }

    #[test]
    fn builder_collects_default_headers() {
        let ctx = RegistryContext::builder()
            .with_header("User-Agent", "docker-hub-client-test")
            .build()
            .unwrap();
        assert_eq!(
            ctx.default_headers().get("user-agent").unwrap(),
            "docker-hub-client-test"
        );
    }

    #[test]
    fn token_can_be_stored_and_cleared() {
        let mut ctx = RegistryContext::new().unwrap();
        ctx.set_auth_token("abc123");
        assert_eq!(ctx.auth_token(), Some("abc123"));
        ctx.clear_auth_token();
        assert!(ctx.auth_token().is_none());
    }
}
