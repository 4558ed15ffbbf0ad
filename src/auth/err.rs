use std::fmt;

#[derive(Debug)]
pub enum AuthErr {
    MissingCredential(&'static str),
    MissingHandler(&'static str),
    MissingPin,
    NotAuthorized,
    InvalidUrl(url::ParseError),
    TokenResponse(String),
    Status { status: u16, body: String },
    Http(reqwest::Error),
}

impl std::error::Error for AuthErr {}

impl fmt::Display for AuthErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use AuthErr::*;
        match self {
            MissingCredential(name) => write!(f, "`{}` is required to authorize", name),
            MissingHandler(name) => write!(
                f,
                "the PIN flow needs a `{}` handler, but none was provided",
                name
            ),
            MissingPin => write!(f, "a PIN is required to complete authorization"),
            NotAuthorized => write!(f, "the authorizer holds no usable token; authorize first"),
            InvalidUrl(e) => write!(f, "could not parse the URL to sign: {}", e),
            TokenResponse(body) => write!(f, "unexpected token endpoint response: `{}`", body),
            Status { status, body } => {
                write!(f, "token endpoint responded with {}: {}", status, body)
            }
            Http(e) => write!(f, "{}", e),
        }?;
        Ok(())
    }
}

impl From<url::ParseError> for AuthErr {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error)
    }
}
impl From<reqwest::Error> for AuthErr {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}
