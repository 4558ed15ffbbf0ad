use crate::{AuthErr, Error};
use std::fmt;

pub enum FatalErr {
    Api(Error),
    Auth(AuthErr),
    Logger(log::SetLoggerError),
    Dotenv(dotenv::Error),
    StdIo(std::io::Error),
    Http(reqwest::Error),
    ConfigErr(String),
}

impl FatalErr {
    pub fn log(msg: impl fmt::Display) {
        eprintln!("{}", msg);
    }

    pub fn config(var: impl fmt::Display, value: impl fmt::Display, allowed_vals: impl fmt::Display) -> Self {
        Self::ConfigErr(format!(
            "{0} is set to `{1}`, which is invalid.\n{3:7}{0} must be {2}.",
            var, value, allowed_vals, ""
        ))
    }
}

impl std::error::Error for FatalErr {}
impl fmt::Debug for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl fmt::Display for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FatalErr::*;
        write!(
            f,
            "{}",
            match self {
                Api(e) => format!("{}", e),
                Auth(e) => format!("could not authorize.\n{:7}{}", "", e),
                Logger(e) => format!("{}", e),
                StdIo(e) => format!("{}", e),
                Dotenv(e) => format!("could not read the .env file.\n{:7}{}", "", e),
                Http(e) => format!("could not build the HTTP client.\n{:7}{}", "", e),
                ConfigErr(e) => e.to_string(),
            }
        )
    }
}

impl From<Error> for FatalErr {
    fn from(e: Error) -> Self {
        Self::Api(e)
    }
}
impl From<AuthErr> for FatalErr {
    fn from(e: AuthErr) -> Self {
        Self::Auth(e)
    }
}
impl From<dotenv::Error> for FatalErr {
    fn from(e: dotenv::Error) -> Self {
        Self::Dotenv(e)
    }
}
impl From<reqwest::Error> for FatalErr {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
impl From<std::io::Error> for FatalErr {
    fn from(e: std::io::Error) -> Self {
        Self::StdIo(e)
    }
}
impl From<log::SetLoggerError> for FatalErr {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
