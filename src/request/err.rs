use std::fmt;

#[derive(Debug)]
pub enum QueryErr {
    MissingParam(&'static str),
    InvalidParam { param: &'static str, reason: String },
    Parse(serde_json::Error),
}

impl QueryErr {
    /// The name of the offending parameter, if the error is about one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::MissingParam(param) | Self::InvalidParam { param, .. } => Some(*param),
            Self::Parse(_) => None,
        }
    }
}

impl std::error::Error for QueryErr {}

impl fmt::Display for QueryErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use QueryErr::*;
        match self {
            MissingParam(param) => write!(f, "the query requires `{}`", param),
            InvalidParam { param, reason } => write!(f, "`{}` is invalid: {}", param, reason),
            Parse(e) => write!(f, "could not map the response: {}", e),
        }
    }
}

impl From<serde_json::Error> for QueryErr {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}
