use super::endpoint_cfg_types::*;
use crate::config::EnvVar;
use crate::err::FatalErr;

#[derive(Debug, Default, Clone)]
pub struct Endpoints {
    pub api: ApiUrl,
    pub upload: UploadUrl,
    pub stream: StreamUrl,
    pub oauth: OAuthUrl,
    pub timeout: Timeout,
    pub user_agent: UserAgent,
}

impl Endpoints {
    pub fn from_env(env: &EnvVar) -> Result<Self, FatalErr> {
        let cfg = Self {
            api: ApiUrl::default().maybe_update(env.get("TWITTER_API_URL"))?,
            upload: UploadUrl::default().maybe_update(env.get("TWITTER_UPLOAD_URL"))?,
            stream: StreamUrl::default().maybe_update(env.get("TWITTER_STREAM_URL"))?,
            oauth: OAuthUrl::default().maybe_update(env.get("TWITTER_OAUTH_URL"))?,
            timeout: Timeout::default().maybe_update(env.get("TWITTER_TIMEOUT"))?,
            user_agent: UserAgent::default().maybe_update(env.get("TWITTER_USER_AGENT"))?,
        };
        log::info!("Endpoint configuration:\n{:#?}", &cfg);
        Ok(cfg)
    }

    /// Points every base URL at one host; used against local mock servers.
    pub fn with_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            api: ApiUrl(format!("{}/1.1/", root)),
            upload: UploadUrl(format!("{}/1.1/", root)),
            stream: StreamUrl(format!("{}/1.1/", root)),
            oauth: OAuthUrl(format!("{}/", root)),
            ..Self::default()
        }
    }
}
