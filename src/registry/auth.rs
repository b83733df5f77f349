//! Authentication against the Docker Hub login endpoint

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::RegistryContext;
use crate::error::Result;
use crate::registry::request;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Parsed reply from `users/login/`.
///
/// Everything beyond the token is preserved in `extra` so callers see
/// the response exactly as the registry sent it.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Façade over the login endpoint.
///
/// Holds nothing but a shared context reference. A successful login
/// does not store the token; the caller puts it into the context via
/// [`RegistryContext::set_auth_token`] once the authenticator is done.
#[derive(Debug)]
pub struct Authenticator<'a> {
    context: &'a RegistryContext,
}

impl<'a> Authenticator<'a> {
    pub fn new(context: &'a RegistryContext) -> Self {
        Self { context }
    }

    /// Authenticate with username and password.
    ///
    /// Bad credentials surface as a status error carrying the
    /// registry's 401, the same as any other non-2xx reply.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let credentials = serde_json::to_value(LoginRequest { username, password })?;
        let response = request::perform_request(
            self.context,
            Method::GET,
            "users/login/",
            Some(&credentials),
        )
        .await?;
        Ok(serde_json::from_value(response)?)
    }
}
