use crate::auth::AuthErr;
use crate::response::ApiError;
use std::fmt;

#[derive(Debug)]
pub enum TwitterErr {
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Api {
        status: u16,
        url: String,
        errors: Vec<ApiError>,
        body: String,
    },
    Json(serde_json::Error),
    Auth(AuthErr),
    /// An upload INIT response without a `media_id`.
    MissingMediaId(String),
}

impl TwitterErr {
    /// The HTTP status the API answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn api_errors(&self) -> &[ApiError] {
        match self {
            Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl std::error::Error for TwitterErr {}

impl fmt::Display for TwitterErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use TwitterErr::*;
        match self {
            Http(e) => write!(f, "HTTP request failed: {}", e),
            Api {
                status,
                url,
                errors,
                body,
            } => {
                write!(f, "{} responded with {}", url, status)?;
                match errors.as_slice() {
                    [] if body.is_empty() => Ok(()),
                    [] => write!(f, ": {}", body),
                    errors => {
                        let msgs: Vec<String> = errors.iter().map(ToString::to_string).collect();
                        write!(f, ": {}", msgs.join("; "))
                    }
                }
            }
            Json(e) => write!(f, "could not parse the response JSON: {}", e),
            Auth(e) => write!(f, "{}", e),
            MissingMediaId(body) => write!(
                f,
                "the upload INIT response carried no `media_id`: `{}`",
                body
            ),
        }?;
        Ok(())
    }
}

impl From<reqwest::Error> for TwitterErr {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}
impl From<serde_json::Error> for TwitterErr {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
impl From<AuthErr> for TwitterErr {
    fn from(error: AuthErr) -> Self {
        Self::Auth(error)
    }
}
