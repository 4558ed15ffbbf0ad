//! Configuration read from the environment, optionally merged from a `.env` file.
pub use {credentials_cfg::Credentials, deployment_cfg::Deployment, endpoint_cfg::Endpoints};
pub use {deployment_cfg_types::EnvInner, deployment_cfg_types::LogLevelInner};

pub(crate) use self::environmental_variables::EnvVar;
use super::err::FatalErr;
use hashbrown::HashMap;
use std::{env, io};

mod credentials_cfg;
mod credentials_cfg_types;
mod deployment_cfg;
mod deployment_cfg_types;
mod endpoint_cfg;
mod endpoint_cfg_types;
mod environmental_variables;


pub fn merge_dotenv() -> Result<(), FatalErr> {
    let env_file = dotenv_file(env::var("RUST_ENV").ok().as_deref(), env::var("ENV").ok().as_deref())?;
    match dotenv::from_filename(env_file) {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// The dotenv file for the environment named by `RUST_ENV`, else `ENV`.
fn dotenv_file(rust_env: Option<&str>, env: Option<&str>) -> Result<&'static str, FatalErr> {
    let (var, name) = match (rust_env.filter(|s| !s.is_empty()), env.filter(|s| !s.is_empty())) {
        (Some(name), _) => ("RUST_ENV", Some(name)),
        (None, name) => ("ENV", name),
    };
    match name {
        Some("production") => Ok(".env.production"),
        Some("development") | None => Ok(".env"),
        Some(unsupported) => Err(FatalErr::config(
            var,
            unsupported,
            "`production` or `development`",
        )),
    }
}

pub fn from_env(env_vars: HashMap<String, String>) -> Result<(Credentials, Endpoints, Deployment), FatalErr> {
    let env_vars = EnvVar::new(env_vars);
    log::info!("Environmental variables kvitter received: {}", &env_vars);
    Ok((
        Credentials::from_env(&env_vars)?,
        Endpoints::from_env(&env_vars)?,
        Deployment::from_env(&env_vars)?,
    ))
}
