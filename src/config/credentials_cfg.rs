use super::credentials_cfg_types::*;
use crate::auth::CredentialStore;
use crate::config::EnvVar;
use crate::err::FatalErr;

type Result<T> = std::result::Result<T, FatalErr>;

#[derive(Default, Clone)]
pub struct Credentials {
    pub consumer_key: ConsumerKey,
    pub consumer_secret: ConsumerSecret,
    pub access_token: AccessToken,
    pub access_token_secret: AccessTokenSecret,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let set = |v: &Option<String>| if v.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("consumer_key", &set(&self.consumer_key.0))
            .field("consumer_secret", &set(&self.consumer_secret.0))
            .field("access_token", &set(&self.access_token.0))
            .field("access_token_secret", &set(&self.access_token_secret.0))
            .finish()
    }
}

impl Credentials {
    const MISSING_CONSUMER_WARNING: &'static str =
        "TWITTER_CONSUMER_KEY or TWITTER_CONSUMER_SECRET is not set.  Every request will fail \
         to authorize until both are provided.";

    pub fn from_env(env: &EnvVar) -> Result<Self> {
        let cfg = Self {
            consumer_key: ConsumerKey::default().maybe_update(env.get("TWITTER_CONSUMER_KEY"))?,
            consumer_secret: ConsumerSecret::default()
                .maybe_update(env.get("TWITTER_CONSUMER_SECRET"))?,
            access_token: AccessToken::default().maybe_update(env.get("TWITTER_ACCESS_TOKEN"))?,
            access_token_secret: AccessTokenSecret::default()
                .maybe_update(env.get("TWITTER_ACCESS_TOKEN_SECRET"))?,
        };

        if cfg.consumer_key.is_none() || cfg.consumer_secret.is_none() {
            log::warn!("{}", Self::MISSING_CONSUMER_WARNING);
        }
        log::info!("Credentials configuration:\n{:#?}", &cfg);
        Ok(cfg)
    }

    pub fn to_store(&self) -> CredentialStore {
        CredentialStore {
            consumer_key: self.consumer_key.clone().0.unwrap_or_default(),
            consumer_secret: self.consumer_secret.clone().0.unwrap_or_default(),
            oauth_token: self.access_token.clone().0.unwrap_or_default(),
            oauth_token_secret: self.access_token_secret.clone().0.unwrap_or_default(),
            ..CredentialStore::default()
        }
    }
}
