use crate::from_env_var;

from_env_var!(
    /// The application's consumer (API) key
    let name = ConsumerKey;
    let default: Option<String> = None;
    let (env_var, allowed_values) = ("TWITTER_CONSUMER_KEY", "any string".to_string());
    let from_str = |s| Some(Some(s.to_string()));
);
from_env_var!(
    /// The application's consumer (API) secret
    let name = ConsumerSecret;
    let default: Option<String> = None;
    let (env_var, allowed_values) = ("TWITTER_CONSUMER_SECRET", "any string".to_string());
    let from_str = |s| Some(Some(s.to_string()));
);
from_env_var!(
    /// A user access token, for single-user authorization
    let name = AccessToken;
    let default: Option<String> = None;
    let (env_var, allowed_values) = ("TWITTER_ACCESS_TOKEN", "any string".to_string());
    let from_str = |s| Some(Some(s.to_string()));
);
from_env_var!(
    /// The secret matching `TWITTER_ACCESS_TOKEN`
    let name = AccessTokenSecret;
    let default: Option<String> = None;
    let (env_var, allowed_values) = ("TWITTER_ACCESS_TOKEN_SECRET", "any string".to_string());
    let from_str = |s| Some(Some(s.to_string()));
);
