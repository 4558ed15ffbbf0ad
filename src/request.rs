//! Queries: typed descriptions of a read request, turned into a URL and parameters, and the
//! mapping of their JSON answers into entities.
//!
//! Every query type implements [`RequestProcessor`]:
//!
//! * `build_request` validates the query and produces a [`Request`] (endpoint plus ordered
//!   parameters; parameters that were never set are left out);
//! * `process_results` maps the response body into entities.  An empty body maps to an
//!   empty `Vec`, and entities that echo their query (e.g. [`Account`](crate::Account)) carry
//!   the query's inputs.
use serde::de::DeserializeOwned;
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumString};

/// Generates consuming setters for a query's optional parameters.
macro_rules! with_params {
    ($($name:ident: $type:ty),* $(,)?) => {
        $(
            pub fn $name(self, $name: impl Into<$type>) -> Self {
                Self {
                    $name: Some($name.into()),
                    ..self
                }
            }
        )*
    };
}

mod account;
mod err;
mod favorites;
mod friendship;
mod related_results;
mod saved_search;
mod search;
mod status;
mod streaming;
mod user;

pub use account::{AccountQuery, AccountType};
pub use err::QueryErr;
pub use favorites::FavoritesQuery;
pub use friendship::{FriendshipQuery, FriendshipType};
pub use related_results::RelatedResultsQuery;
pub use saved_search::{SavedSearchQuery, SavedSearchType};
pub use search::{ResultType, SearchQuery};
pub use status::{StatusQuery, StatusType};
pub use streaming::{FilterLevel, StreamingQuery, StreamingType};
pub use user::{UserQuery, UserType};

#[cfg(test)]
mod test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// `tweet_mode`; `Extended` asks for `full_text` instead of 140-character `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TweetMode {
    Compat,
    Extended,
}

/// Which configured root a request's endpoint hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrl {
    Api,
    Upload,
    Stream,
}

/// An endpoint and its (ordered) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    endpoint: String,
    params: Vec<(String, String)>,
}

impl Request {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: Vec::new(),
        }
    }

    /// Adds `name=value`, unless `value` renders as an empty string.
    pub fn add(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        if !value.is_empty() {
            self.params.push((name.to_string(), value));
        }
    }

    pub fn add_opt<T: ToString>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.add(name, value);
        }
    }

    /// Adds a comma-separated list, unless it is empty.
    pub fn add_list<T: ToString>(&mut self, name: &str, values: &[T]) {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.add(name, joined);
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn full_url(&self) -> String {
        if self.params.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}?{}", self.endpoint, self.query_string())
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_url())
    }
}

/// Builds the request for a query and maps the response into entities.
pub trait RequestProcessor {
    type Entity;

    fn base(&self) -> BaseUrl {
        BaseUrl::Api
    }

    fn build_request(&self, base_url: &str) -> Result<Request, QueryErr>;

    fn process_results(&self, body: &str) -> Result<Vec<Self::Entity>, QueryErr>;
}

/// Parses a body holding either one entity or an array of them.
pub(crate) fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, QueryErr> {
    let body = body.trim();
    if body.is_empty() {
        Ok(Vec::new())
    } else if body.starts_with('[') {
        Ok(serde_json::from_str(body)?)
    } else {
        Ok(vec![serde_json::from_str(body)?])
    }
}
