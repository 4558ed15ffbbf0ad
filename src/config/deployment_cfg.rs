use super::deployment_cfg_types::*;
use crate::config::EnvVar;
use crate::err::FatalErr;

#[derive(Debug, Default, Clone)]
pub struct Deployment {
    pub env: Env,
    pub log_level: LogLevel,
}

impl Deployment {
    pub fn from_env(env: &EnvVar) -> Result<Self, FatalErr> {
        let cfg = Self {
            env: Env::default()
                .maybe_update(env.get("ENV"))?
                .maybe_update(env.get("RUST_ENV"))?,
            log_level: LogLevel::default().maybe_update(env.get("RUST_LOG"))?,
        };
        log::warn!("Using deployment configuration:\n {:#?}", &cfg);
        Ok(cfg)
    }
}
