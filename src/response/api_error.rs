use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of an error body such as `{"errors":[{"code":34,"message":"..."}]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Many { errors: Vec<ApiError> },
    Single { error: String },
}

/// Reads whichever error shape the body has; anything else yields no errors.
pub(crate) fn parse_api_errors(body: &str) -> Vec<ApiError> {
    match serde_json::from_str(body) {
        Ok(ErrorBody::Many { errors }) => errors,
        Ok(ErrorBody::Single { error }) => vec![ApiError {
            code: 0,
            message: error,
        }],
        Err(_) => Vec::new(),
    }
}
