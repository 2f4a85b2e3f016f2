//! Process configuration, read from the environment (and `.env` if present).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::{router::parse_module_list, AppError, AppResult, MAX_CONCURRENCY};

pub const DEFAULT_RPC_ENDPOINT: &str = "http://127.0.0.1:26657";
pub const DEFAULT_FIXTURE_DIR: &str = "./fixtures";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Rpc,
    File,
}

impl FromStr for SourceType {
    type Err = AppError;

    fn from_str(raw: &str) -> AppResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "rpc" => Ok(SourceType::Rpc),
            "file" => Ok(SourceType::File),
            _ => Err(AppError::Config(format!("Invalid SOURCE_TYPE: {}", raw))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub source_type: SourceType,
    pub rpc_endpoint: String,
    pub rpc_timeout: Duration,
    pub fixture_dir: PathBuf,
    pub only_support_module: Vec<String>,
    pub start_height: i64,
    pub end_height: Option<i64>,
    pub concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_type: SourceType::Rpc,
            rpc_endpoint: DEFAULT_RPC_ENDPOINT.to_string(),
            rpc_timeout: Duration::from_secs(10),
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
            only_support_module: Vec::new(),
            start_height: 1,
            end_height: None,
            concurrency: 1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Unset or
    /// empty variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("SOURCE_TYPE") {
            config.source_type = raw.parse()?;
        }
        if let Some(raw) = get("RPC_ENDPOINT") {
            config.rpc_endpoint = raw;
        }
        if let Some(raw) = get("RPC_TIMEOUT_SECS") {
            config.rpc_timeout = Duration::from_secs(parse_number("RPC_TIMEOUT_SECS", &raw)?);
        }
        if let Some(raw) = get("FIXTURE_DIR") {
            config.fixture_dir = PathBuf::from(raw);
        }
        if let Some(raw) = get("ONLY_SUPPORT_MODULE") {
            config.only_support_module = parse_module_list(&raw);
        }
        if let Some(raw) = get("START_HEIGHT") {
            config.start_height = parse_number("START_HEIGHT", &raw)?;
        }
        if let Some(raw) = get("END_HEIGHT") {
            config.end_height = Some(parse_number("END_HEIGHT", &raw)?);
        }
        if let Some(raw) = get("CONCURRENCY") {
            config.concurrency = parse_number("CONCURRENCY", &raw)?;
            if !(1..=MAX_CONCURRENCY).contains(&config.concurrency) {
                return Err(AppError::Config(format!(
                    "CONCURRENCY must be between 1 and {}",
                    MAX_CONCURRENCY
                )));
            }
        }

        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} is not a valid number: {}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppResult<AppConfig> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config(&[
            ("SOURCE_TYPE", "FILE"),
            ("RPC_ENDPOINT", "http://node:26657"),
            ("RPC_TIMEOUT_SECS", "3"),
            ("FIXTURE_DIR", "/tmp/blocks"),
            ("ONLY_SUPPORT_MODULE", "bank,gov"),
            ("START_HEIGHT", "100"),
            ("END_HEIGHT", "200"),
            ("CONCURRENCY", "4"),
        ])
        .unwrap();

        assert_eq!(config.source_type, SourceType::File);
        assert_eq!(config.rpc_endpoint, "http://node:26657");
        assert_eq!(config.rpc_timeout, Duration::from_secs(3));
        assert_eq!(config.fixture_dir, PathBuf::from("/tmp/blocks"));
        assert_eq!(config.only_support_module, vec!["bank".to_string(), "gov".to_string()]);
        assert_eq!(config.start_height, 100);
        assert_eq!(config.end_height, Some(200));
        assert_eq!(config.concurrency, 4);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(config(&[("SOURCE_TYPE", "grpc")]), Err(AppError::Config(_))));
        assert!(matches!(config(&[("START_HEIGHT", "ten")]), Err(AppError::Config(_))));
        assert!(matches!(config(&[("CONCURRENCY", "0")]), Err(AppError::Config(_))));
        assert!(matches!(config(&[("CONCURRENCY", "1025")]), Err(AppError::Config(_))));
        assert!(matches!(
            config(&[("CONCURRENCY", "18446744073709551615")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_concurrency_cap_is_accepted() {
        assert_eq!(config(&[("CONCURRENCY", "1024")]).unwrap().concurrency, MAX_CONCURRENCY);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = config(&[("END_HEIGHT", ""), ("ONLY_SUPPORT_MODULE", "")]).unwrap();
        assert_eq!(config.end_height, None);
        assert!(config.only_support_module.is_empty());
    }
}
