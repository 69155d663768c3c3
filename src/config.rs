use std::fmt;

use actix_web::cookie::Key;

use crate::models::transfer::{DuplicatePolicy, LadderError, TransferLadder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Postgres,
    Memory,
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { var: &'static str, reason: String },
    Missing(&'static str),
    Ladder(LadderError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, reason } => write!(f, "{var}: {reason}"),
            ConfigError::Missing(var) => write!(f, "{var} must be set"),
            ConfigError::Ladder(e) => write!(f, "ROLLCALL_TRANSFER_LADDER: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub backend: BackendKind,
    pub database_url: Option<String>,
    pub session_key: Key,
    pub shared_password: String,
    pub ladder: TransferLadder,
    pub duplicates: DuplicatePolicy,
    pub seed_demo: bool,
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid { var, reason: format!("expected a boolean, got '{other}'") }),
    }
}

/// Session encryption key. Load from SESSION_KEY for sessions that survive
/// restarts; anything shorter than 64 bytes is replaced by a random key.
fn session_key(value: Option<String>) -> Key {
    match value {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key/value source; `from_env` passes the process
    /// environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match get("ROLLCALL_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => BackendKind::Postgres,
            Some("memory") => BackendKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "ROLLCALL_BACKEND",
                    reason: format!("expected 'postgres' or 'memory', got '{other}'"),
                });
            }
        };

        let database_url = get("DATABASE_URL").filter(|v| !v.trim().is_empty());
        if backend == BackendKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let ladder = match get("ROLLCALL_TRANSFER_LADDER").filter(|v| !v.trim().is_empty()) {
            Some(spec) => TransferLadder::parse(&spec).map_err(ConfigError::Ladder)?,
            None => TransferLadder::default(),
        };

        let duplicates = match get("ROLLCALL_ALLOW_DUPLICATE_TRANSFERS") {
            Some(v) if !v.trim().is_empty() => v
                .parse::<DuplicatePolicy>()
                .map_err(|reason| ConfigError::Invalid { var: "ROLLCALL_ALLOW_DUPLICATE_TRANSFERS", reason })?,
            _ => DuplicatePolicy::default(),
        };

        let seed_demo = match get("ROLLCALL_SEED_DEMO") {
            Some(v) => parse_bool("ROLLCALL_SEED_DEMO", &v)?,
            None => false,
        };

        let shared_password = get("ROLLCALL_SHARED_PASSWORD")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "1234".to_string());

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            backend,
            database_url,
            session_key: session_key(get("SESSION_KEY")),
            shared_password,
            ladder,
            duplicates,
            seed_demo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let c = config(&[("ROLLCALL_BACKEND", "memory")]).unwrap();
        assert_eq!(c.backend, BackendKind::Memory);
        assert_eq!(c.bind_addr, "127.0.0.1:8080");
        assert_eq!(c.shared_password, "1234");
        assert_eq!(c.duplicates, DuplicatePolicy::Allow);
        assert_eq!(c.ladder, TransferLadder::default());
        assert!(!c.seed_demo);
    }

    #[test]
    fn postgres_backend_requires_url() {
        assert!(matches!(config(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
        assert!(config(&[("DATABASE_URL", "postgres://localhost/rollcall")]).is_ok());
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(config(&[("ROLLCALL_BACKEND", "sqlite")]).is_err());
        assert!(config(&[("ROLLCALL_BACKEND", "memory"), ("ROLLCALL_SEED_DEMO", "maybe")]).is_err());
        assert!(config(&[("ROLLCALL_BACKEND", "memory"), ("ROLLCALL_TRANSFER_LADDER", "1:2,2:1")]).is_err());
        assert!(config(&[("ROLLCALL_BACKEND", "memory"), ("ROLLCALL_ALLOW_DUPLICATE_TRANSFERS", "sometimes")]).is_err());
    }

    #[test]
    fn overrides_apply() {
        let c = config(&[
            ("ROLLCALL_BACKEND", "memory"),
            ("ROLLCALL_TRANSFER_LADDER", "1:2"),
            ("ROLLCALL_ALLOW_DUPLICATE_TRANSFERS", "false"),
            ("ROLLCALL_SEED_DEMO", "yes"),
        ])
        .unwrap();
        assert_eq!(c.ladder.next_department(1), Some(2));
        assert_eq!(c.ladder.next_department(2), None);
        assert_eq!(c.duplicates, DuplicatePolicy::Reject);
        assert!(c.seed_demo);
    }
}
