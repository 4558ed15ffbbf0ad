use super::oauth::parse_token_response;
use super::{AuthErr, Authorizer, CredentialStore, OAuthSigner, TokenClient};
use crate::request::HttpMethod;

use std::fmt;
use std::sync::Arc;

type LinkHandler = Box<dyn Fn(&str) + Send + Sync>;
type PinHandler = Box<dyn Fn() -> String + Send + Sync>;

/// The out-of-band (PIN) OAuth 1.0a flow.
///
/// `authorize` fetches a request token, hands the authorization link to the
/// `go_to_authorization` handler, asks `get_pin` for the PIN the user was shown and trades
/// both for an access token.  Applications that cannot block on a PIN prompt can call
/// `begin_authorize` and `complete_authorize` separately.
pub struct PinAuthorizer {
    credentials: CredentialStore,
    oauth_url: String,
    force_login: bool,
    preferred_screen_name: Option<String>,
    go_to_authorization: Option<LinkHandler>,
    get_pin: Option<PinHandler>,
    /// Token and secret from `oauth/request_token`, held until the PIN is traded
    request_token: Option<(String, String)>,
    client: Arc<dyn TokenClient>,
}

impl PinAuthorizer {
    const CALLBACK: &'static str = "oob";

    pub fn new(
        credentials: CredentialStore,
        oauth_url: impl Into<String>,
        client: Arc<dyn TokenClient>,
    ) -> Self {
        Self {
            credentials,
            oauth_url: oauth_url.into(),
            force_login: false,
            preferred_screen_name: None,
            go_to_authorization: None,
            get_pin: None,
            request_token: None,
            client,
        }
    }

    pub fn go_to_authorization(self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            go_to_authorization: Some(Box::new(handler)),
            ..self
        }
    }

    pub fn get_pin(self, handler: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            get_pin: Some(Box::new(handler)),
            ..self
        }
    }

    pub fn force_login(self, force_login: bool) -> Self {
        Self { force_login, ..self }
    }

    pub fn preferred_screen_name(self, screen_name: impl Into<String>) -> Self {
        Self {
            preferred_screen_name: Some(screen_name.into()),
            ..self
        }
    }

    pub async fn authorize(&mut self) -> Result<(), AuthErr> {
        if self.is_authorized() {
            log::debug!("already authorized as `{}`", self.credentials.screen_name);
            return Ok(());
        }
        if self.go_to_authorization.is_none() {
            return Err(AuthErr::MissingHandler("go_to_authorization"));
        }
        if self.get_pin.is_none() {
            return Err(AuthErr::MissingHandler("get_pin"));
        }

        let link = match self.begin_authorize().await? {
            Some(link) => link,
            None => return Ok(()),
        };
        if let Some(go_to_authorization) = &self.go_to_authorization {
            go_to_authorization(&link);
        }
        let pin = match &self.get_pin {
            Some(get_pin) => get_pin(),
            None => return Err(AuthErr::MissingHandler("get_pin")),
        };
        self.complete_authorize(&pin).await
    }

    /// Obtains a request token and returns the link the user must visit, or `None` when
    /// already authorized.  Stored credentials are not touched until `complete_authorize`.
    pub async fn begin_authorize(&mut self) -> Result<Option<String>, AuthErr> {
        if self.is_authorized() {
            return Ok(None);
        }
        if !self.credentials.has_consumer() {
            return Err(AuthErr::MissingCredential("consumer_key"));
        }

        let url = format!("{}oauth/request_token", self.oauth_url);
        let consumer = self.consumer();
        let header = OAuthSigner::new(&consumer).header(
            HttpMethod::Post,
            &url,
            &[],
            &[("oauth_callback", Self::CALLBACK)],
        )?;
        let body = self.client.post(&url, &header, &[]).await?;

        let mut fields = parse_token_response(&body);
        let link = match (fields.remove("oauth_token"), fields.remove("oauth_token_secret")) {
            (Some(token), Some(secret)) => {
                let link = self.authorization_link(&token);
                self.request_token = Some((token, secret));
                link
            }
            _ => return Err(AuthErr::TokenResponse(body)),
        };
        Ok(Some(link))
    }

    /// Trades the PIN for an access token.  Does nothing when already authorized.
    pub async fn complete_authorize(&mut self, pin: &str) -> Result<(), AuthErr> {
        if self.is_authorized() {
            return Ok(());
        }
        let pin = pin.trim();
        if pin.is_empty() {
            return Err(AuthErr::MissingPin);
        }
        let request = match &self.request_token {
            Some((token, secret)) => self.consumer().with_token(token.as_str(), secret.as_str()),
            None => return Err(AuthErr::MissingCredential("oauth_token")),
        };

        let url = format!("{}oauth/access_token", self.oauth_url);
        let header = OAuthSigner::new(&request).header(
            HttpMethod::Post,
            &url,
            &[],
            &[("oauth_verifier", pin)],
        )?;
        let body = self.client.post(&url, &header, &[]).await?;

        let mut fields = parse_token_response(&body);
        let (token, secret) = match (
            fields.remove("oauth_token"),
            fields.remove("oauth_token_secret"),
        ) {
            (Some(token), Some(secret)) => (token, secret),
            _ => return Err(AuthErr::TokenResponse(body)),
        };
        self.request_token = None;
        self.credentials.oauth_token = token;
        self.credentials.oauth_token_secret = secret;
        self.credentials.screen_name = fields.remove("screen_name").unwrap_or_default();
        self.credentials.user_id = fields
            .get("user_id")
            .and_then(|id| id.parse().ok())
            .unwrap_or_default();
        log::info!("authorized as `{}`", self.credentials.screen_name);
        Ok(())
    }

    /// The consumer key and secret alone.
    fn consumer(&self) -> CredentialStore {
        CredentialStore::new(
            self.credentials.consumer_key.as_str(),
            self.credentials.consumer_secret.as_str(),
        )
    }

    fn authorization_link(&self, request_token: &str) -> String {
        let mut link = format!(
            "{}oauth/authorize?oauth_token={}",
            self.oauth_url,
            super::percent_encode(request_token)
        );
        if self.force_login {
            link.push_str("&force_login=true");
        }
        if let Some(screen_name) = &self.preferred_screen_name {
            link.push_str("&screen_name=");
            link.push_str(&super::percent_encode(screen_name));
        }
        link
    }
}

impl Authorizer for PinAuthorizer {
    fn authorization_header(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, AuthErr> {
        if !self.is_authorized() {
            return Err(AuthErr::NotAuthorized);
        }
        OAuthSigner::new(&self.credentials).header(method, url, params, &[])
    }

    fn is_authorized(&self) -> bool {
        self.credentials.has_all_credentials()
    }

    fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}

impl fmt::Debug for PinAuthorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinAuthorizer")
            .field("credentials", &self.credentials)
            .field("oauth_url", &self.oauth_url)
            .field("force_login", &self.force_login)
            .finish()
    }
}
