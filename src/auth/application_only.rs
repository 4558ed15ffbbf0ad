use super::{percent_encode, AuthErr, Authorizer, CredentialStore, TokenClient};
use crate::request::HttpMethod;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

#[derive(Deserialize)]
struct BearerResponse {
    #[serde(default)]
    token_type: String,
    access_token: String,
}

/// Application-only (OAuth2 client credentials) authorization.
pub struct ApplicationOnlyAuthorizer {
    credentials: CredentialStore,
    bearer_token: Option<String>,
    oauth_url: String,
    client: Arc<dyn TokenClient>,
}

impl ApplicationOnlyAuthorizer {
    pub fn new(
        credentials: CredentialStore,
        oauth_url: impl Into<String>,
        client: Arc<dyn TokenClient>,
    ) -> Self {
        Self {
            credentials,
            bearer_token: None,
            oauth_url: oauth_url.into(),
            client,
        }
    }

    /// Reuses a bearer token obtained earlier.
    pub fn with_bearer_token(self, token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            ..self
        }
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// `base64(enc(key):enc(secret))`, the credential sent to the token endpoints.
    pub fn basic_token(&self) -> Result<String, AuthErr> {
        if !self.credentials.has_consumer() {
            return Err(AuthErr::MissingCredential("consumer_key"));
        }
        let joined = format!(
            "{}:{}",
            percent_encode(&self.credentials.consumer_key),
            percent_encode(&self.credentials.consumer_secret)
        );
        Ok(STANDARD.encode(joined))
    }

    pub async fn authorize(&mut self) -> Result<(), AuthErr> {
        if self.bearer_token.is_some() {
            return Ok(());
        }
        let url = format!("{}oauth2/token", self.oauth_url);
        let header = format!("Basic {}", self.basic_token()?);
        let form = [("grant_type".to_string(), "client_credentials".to_string())];
        let body = self.client.post(&url, &header, &form).await?;

        let response: BearerResponse =
            serde_json::from_str(&body).map_err(|_| AuthErr::TokenResponse(body.clone()))?;
        if !response.token_type.eq_ignore_ascii_case("bearer") {
            return Err(AuthErr::TokenResponse(body));
        }
        self.bearer_token = Some(response.access_token);
        Ok(())
    }

    /// Revokes the current bearer token.
    pub async fn invalidate(&mut self) -> Result<(), AuthErr> {
        let token = self.bearer_token.clone().ok_or(AuthErr::NotAuthorized)?;
        let url = format!("{}oauth2/invalidate_token", self.oauth_url);
        let header = format!("Basic {}", self.basic_token()?);
        let form = [("access_token".to_string(), token)];
        self.client.post(&url, &header, &form).await?;
        self.bearer_token = None;
        Ok(())
    }
}

impl Authorizer for ApplicationOnlyAuthorizer {
    fn authorization_header(
        &self,
        _method: HttpMethod,
        _url: &str,
        _params: &[(String, String)],
    ) -> Result<String, AuthErr> {
        match &self.bearer_token {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err(AuthErr::NotAuthorized),
        }
    }

    fn is_authorized(&self) -> bool {
        self.bearer_token.is_some()
    }

    fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

impl fmt::Debug for ApplicationOnlyAuthorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationOnlyAuthorizer")
            .field("credentials", &self.credentials)
            .field("has_bearer_token", &self.bearer_token.is_some())
            .field("oauth_url", &self.oauth_url)
            .finish()
    }
}
