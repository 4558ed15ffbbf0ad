use crate::from_env_var;
use std::time::Duration;

fn with_trailing_slash(s: &str) -> Option<String> {
    let url = url::Url::parse(s).ok()?;
    match url.scheme() {
        "http" | "https" if s.ends_with('/') => Some(s.to_string()),
        "http" | "https" => Some(format!("{}/", s)),
        _ => None,
    }
}

from_env_var!(
    /// The versioned root of the REST API
    let name = ApiUrl;
    let default: String = "https://api.twitter.com/1.1/".to_string();
    let (env_var, allowed_values) = ("TWITTER_API_URL", "an http(s) URL".to_string());
    let from_str = |s| with_trailing_slash(s);
);
from_env_var!(
    /// The versioned root of the media upload API
    let name = UploadUrl;
    let default: String = "https://upload.twitter.com/1.1/".to_string();
    let (env_var, allowed_values) = ("TWITTER_UPLOAD_URL", "an http(s) URL".to_string());
    let from_str = |s| with_trailing_slash(s);
);
from_env_var!(
    /// The versioned root of the streaming API
    let name = StreamUrl;
    let default: String = "https://stream.twitter.com/1.1/".to_string();
    let (env_var, allowed_values) = ("TWITTER_STREAM_URL", "an http(s) URL".to_string());
    let from_str = |s| with_trailing_slash(s);
);
from_env_var!(
    /// The (unversioned) host serving `oauth/` and `oauth2/`
    let name = OAuthUrl;
    let default: String = "https://api.twitter.com/".to_string();
    let (env_var, allowed_values) = ("TWITTER_OAUTH_URL", "an http(s) URL".to_string());
    let from_str = |s| with_trailing_slash(s);
);
from_env_var!(
    /// How long to wait for a (non-streaming) response
    let name = Timeout;
    let default: Duration = Duration::from_millis(100_000);
    let (env_var, allowed_values) = ("TWITTER_TIMEOUT", "a number of milliseconds".to_string());
    let from_str = |s| s.parse().map(Duration::from_millis).ok();
);
from_env_var!(
    /// The `User-Agent` sent with every request
    let name = UserAgent;
    let default: String = concat!("kvitter/", env!("CARGO_PKG_VERSION")).to_string();
    let (env_var, allowed_values) = ("TWITTER_USER_AGENT", "any string".to_string());
    let from_str = |s| Some(s.to_string());
);
