//! Shared request plumbing for all registry endpoints
//!
//! Every operation in this crate funnels through [`perform_request`]:
//! path normalization, header assembly and status handling live here so
//! the endpoint facades stay one-liners.

use log::{debug, trace};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::context::RegistryContext;
use crate::error::{HubError, Result};

/// Canonicalize a request path for concatenation with the base URL.
///
/// Strips exactly one leading `/` and appends a trailing `/` unless the
/// input already ends with one or carries a query string. Total for any
/// input, including the empty string. The leading slash must go: a
/// rooted path would make `Url::join` discard the `/v2/` prefix.
pub(crate) fn normalize_path(path: &str) -> String {
    let mut normalized = path.strip_prefix('/').unwrap_or(path).to_string();
    if !path.ends_with('/') && !path.contains('?') {
        normalized.push('/');
    }
    normalized
}

/// Assemble the effective header set for one request.
///
/// Returns a fresh copy of the context's default headers; the context
/// itself is never touched, so concurrent calls through one context
/// cannot interfere. A present, non-empty token sets `Authorization:
/// JWT <token>`, overwriting any caller-provided default.
pub(crate) fn build_headers(ctx: &RegistryContext) -> Result<HeaderMap> {
    let mut headers = ctx.default_headers().clone();
    if let Some(token) = ctx.auth_token().filter(|t| !t.is_empty()) {
        let value = HeaderValue::from_str(&format!("JWT {}", token))
            .map_err(|e| HubError::Config(format!("auth token not header-encodable: {}", e)))?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// Issue a single request against the registry and parse the JSON reply.
///
/// Non-2xx responses become [`HubError::Status`] with the status code
/// and raw body; connection-level failures become
/// [`HubError::Transport`]. The body, when given, is serialized as JSON
/// even on a GET (the Hub login endpoint takes its credentials that way).
pub(crate) async fn perform_request(
    ctx: &RegistryContext,
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<Value> {
    let url = ctx
        .registry_url()
        .join(&normalize_path(path))
        .map_err(|e| HubError::Config(format!("invalid request path {:?}: {}", path, e)))?;
    debug!("{} {}", method, url);

    let mut request = ctx
        .http_client()
        .request(method, url)
        .headers(build_headers(ctx)?);
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    trace!("response status {} ({} bytes)", status, text.len());

    if !status.is_success() {
        return Err(HubError::Status { status, body: text });
    }
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RegistryContext;

    #[test]
    fn normalize_appends_trailing_slash() {
        assert_eq!(normalize_path("users/login"), "users/login/");
        assert_eq!(normalize_path("repositories/library/alpine"), "repositories/library/alpine/");
    }

    #[test]
    fn normalize_keeps_existing_trailing_slash() {
        assert_eq!(normalize_path("users/login/"), "users/login/");
    }

    #[test]
    fn normalize_strips_exactly_one_leading_slash() {
        assert_eq!(normalize_path("/users/login/"), "users/login/");
        assert_eq!(normalize_path("//users/login/"), "/users/login/");
    }

    #[test]
    fn normalize_leaves_query_strings_alone() {
        assert_eq!(
            normalize_path("repositories/library/alpine/tags?page_size=5&page=1"),
            "repositories/library/alpine/tags?page_size=5&page=1"
        );
    }

    #[test]
    fn normalize_is_total_on_degenerate_inputs() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("?"), "?");
    }

    #[test]
    fn headers_without_token_have_no_authorization() {
        let ctx = RegistryContext::new().unwrap();
        let headers = build_headers(&ctx).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn headers_with_token_carry_jwt_authorization() {
        let ctx = RegistryContext::builder()
            .with_auth_token("secret-token")
            .build()
            .unwrap();
        let headers = build_headers(&ctx).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "JWT secret-token");
    }

    #[test]
    fn empty_token_counts_as_unauthenticated() {
        let ctx = RegistryContext::builder()
            .with_auth_token("")
            .build()
            .unwrap();
        let headers = build_headers(&ctx).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn token_overrides_caller_supplied_authorization_default() {
        let ctx = RegistryContext::builder()
            .with_header("Authorization", "Basic abc")
            .with_auth_token("t0k3n")
            .build()
            .unwrap();
        let headers = build_headers(&ctx).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "JWT t0k3n");
    }

    #[test]
    fn header_assembly_does_not_mutate_the_context() {
        let ctx = RegistryContext::builder()
            .with_auth_token("t0k3n")
            .build()
            .unwrap();
        let _ = build_headers(&ctx).unwrap();
        assert!(!ctx.default_headers().contains_key(AUTHORIZATION));
    }
}
