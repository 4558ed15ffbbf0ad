use super::{AuthErr, Authorizer, CredentialStore, OAuthSigner};
use crate::request::HttpMethod;

/// Signs with an access token the application already holds.
#[derive(Debug, Clone)]
pub struct SingleUserAuthorizer {
    credentials: CredentialStore,
}

impl SingleUserAuthorizer {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }
}

impl Authorizer for SingleUserAuthorizer {
    fn authorization_header(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, AuthErr> {
        if self.credentials.oauth_token.is_empty() {
            return Err(AuthErr::MissingCredential("oauth_token"));
        }
        if self.credentials.oauth_token_secret.is_empty() {
            return Err(AuthErr::MissingCredential("oauth_token_secret"));
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
