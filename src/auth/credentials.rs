use std::fmt;

/// The secrets and identity an authorizer works with.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialStore {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub oauth_token: String,
    pub oauth_token_secret: String,
    pub screen_name: String,
    pub user_id: u64,
}

impl CredentialStore {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            ..Self::default()
        }
    }

    pub fn with_token(self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        Self {
            oauth_token: token.into(),
            oauth_token_secret: token_secret.into(),
            ..self
        }
    }

    pub fn has_consumer(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }

    pub fn has_all_credentials(&self) -> bool {
        self.has_consumer() && !self.oauth_token.is_empty() && !self.oauth_token_secret.is_empty()
    }

    /// Forgets the user token, keeping the consumer.
    pub fn clear_token(&mut self) {
        self.oauth_token.clear();
        self.oauth_token_secret.clear();
        self.screen_name.clear();
        self.user_id = 0;
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |s: &str| if s.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("CredentialStore")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &mask(&self.consumer_secret))
            .field("oauth_token", &self.oauth_token)
            .field("oauth_token_secret", &mask(&self.oauth_token_secret))
            .field("screen_name", &self.screen_name)
            .field("user_id", &self.user_id)
            .finish()
    }
}
