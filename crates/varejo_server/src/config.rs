//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Resolve bind address, data directory and logging settings from
//!   `VAREJO_*` environment variables with sensible defaults.
//!
//! # Invariants
//! - The resolved log directory is always absolute.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use varejo_core::default_log_level;

const ADDR_VAR: &str = "VAREJO_ADDR";
const DATA_DIR_VAR: &str = "VAREJO_DATA_DIR";
const LOG_DIR_VAR: &str = "VAREJO_LOG_DIR";
const LOG_LEVEL_VAR: &str = "VAREJO_LOG_LEVEL";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    /// - An unparseable `VAREJO_ADDR`.
    /// - A working directory that cannot be resolved for a relative log
    ///   directory.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            addr: parse_addr(env::var(ADDR_VAR).ok())?,
            data_dir: env::var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            log_dir: resolve_log_dir(env::var(LOG_DIR_VAR).ok())?,
            log_level: env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| default_log_level().to_string()),
        })
    }
}

fn parse_addr(raw: Option<String>) -> Result<SocketAddr, String> {
    match raw {
        None => Ok(SocketAddr::from(([0, 0, 0, 0], 3000))),
        Some(text) => text
            .parse()
            .map_err(|err| format!("invalid {ADDR_VAR} `{text}`: {err}")),
    }
}

fn resolve_log_dir(raw: Option<String>) -> Result<PathBuf, String> {
    let dir = raw.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("logs"));
    if dir.is_absolute() {
        return Ok(dir);
    }
    env::current_dir()
        .map(|cwd| cwd.join(dir))
        .map_err(|err| format!("cannot resolve working directory: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{parse_addr, resolve_log_dir};

    #[test]
    fn addr_defaults_to_port_3000_on_all_interfaces() {
        let addr = parse_addr(None).unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn addr_parses_explicit_values_and_rejects_garbage() {
        let addr = parse_addr(Some("127.0.0.1:8080".to_string())).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(parse_addr(Some("not-an-addr".to_string())).is_err());
    }

    #[test]
    fn log_dir_is_always_absolute() {
        assert!(resolve_log_dir(Some("logs/dev".to_string()))
            .unwrap()
            .is_absolute());
        assert_eq!(
            resolve_log_dir(Some("/var/log/varejo".to_string())).unwrap(),
            std::path::PathBuf::from("/var/log/varejo")
        );
    }
}
