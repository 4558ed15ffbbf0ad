use crate::net::TwitterErr;
use crate::request::QueryErr;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A command was called with an argument it cannot send.
    InvalidArgument {
        param: &'static str,
        reason: String,
    },
    Query(QueryErr),
    Twitter(TwitterErr),
    Parse(serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// The parameter a validation error is about.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(*param),
            Self::Query(e) => e.param(),
            Self::Twitter(_) | Self::Parse(_) => None,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use Error::*;
        match self {
            InvalidArgument { param, reason } => write!(f, "invalid `{}`: {}", param, reason),
            Query(e) => write!(f, "{}", e),
            Twitter(e) => write!(f, "{}", e),
            Parse(e) => write!(f, "could not map the response: {}", e),
        }?;
        Ok(())
    }
}

impl From<QueryErr> for Error {
    fn from(error: QueryErr) -> Self {
        Self::Query(error)
    }
}
impl From<TwitterErr> for Error {
    fn from(error: TwitterErr) -> Self {
        Self::Twitter(error)
    }
}
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}
