//! Facade configuration.
//!
//! Selects which backend a [`LogManager`](crate::manager::LogManager) binds.
//! Loaded from TOML:
//!
//! ```toml
//! backend = "slog"
//! target_root = "svc"
//! min_level = "warn"
//! ```
//!
//! or from `RASK_LOG_FACADE_BACKEND` / `RASK_LOG_FACADE_TARGET_ROOT` /
//! `RASK_LOG_FACADE_MIN_LEVEL`.

use crate::adapters::{GlobalLog, LevelFloor};
use crate::domain::{FacadeError, LogLevel};
use crate::manager::{LogManager, log_crate_manager_with, slog_manager};
use crate::mapping::{LOG_CRATE_LEVELS, SLOG_LEVELS};
use slog::Drain;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

pub const BACKEND_ENV: &str = "RASK_LOG_FACADE_BACKEND";
pub const TARGET_ROOT_ENV: &str = "RASK_LOG_FACADE_TARGET_ROOT";
pub const MIN_LEVEL_ENV: &str = "RASK_LOG_FACADE_MIN_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The process-wide `log` logger (default)
    #[default]
    Log,
    /// A caller-supplied `slog` root logger
    Slog,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Log => "log",
            BackendKind::Slog => "slog",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(BackendKind::Log),
            "slog" => Ok(BackendKind::Slog),
            other => Err(FacadeError::Config(format!(
                "Unknown backend '{other}'. Expected 'log' or 'slog'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
    pub backend: BackendKind,
    /// Prefix for per-type `log` targets. Ignored by `slog`.
    pub target_root: Option<String>,
    /// Least severe level the bound backend may report as enabled.
    pub min_level: Option<LogLevel>,
}

impl FacadeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, FacadeError> {
        let config: FacadeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FacadeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            backend = %config.backend,
            "Loaded facade configuration"
        );
        Ok(config)
    }

    /// Defaults overridden by environment variables that are set.
    pub fn from_env() -> Result<Self, FacadeError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from environment variables that are set.
    pub fn apply_env(&mut self) -> Result<(), FacadeError> {
        if let Ok(backend) = env::var(BACKEND_ENV) {
            self.backend = backend.parse()?;
        }
        if let Ok(root) = env::var(TARGET_ROOT_ENV) {
            self.target_root = Some(root);
        }
        if let Ok(level) = env::var(MIN_LEVEL_ENV) {
            self.min_level = Some(level.parse()?);
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), FacadeError> {
        if let Some(root) = &self.target_root {
            if root.trim().is_empty() {
                return Err(FacadeError::Config(
                    "target_root cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Bind the configured backend. `slog_root` is required for `slog`.
    pub fn build_manager(
        &self,
        slog_root: Option<slog::Logger>,
    ) -> Result<Arc<dyn LogManager>, FacadeError> {
        self.validate()?;

        let manager: Arc<dyn LogManager> = match self.backend {
            BackendKind::Log => {
                let backend: Arc<dyn log::Log> = match self.min_level {
                    Some(min) => Arc::new(LevelFloor::new(
                        Arc::new(GlobalLog),
                        LOG_CRATE_LEVELS.native(min),
                    )),
                    None => Arc::new(GlobalLog),
                };
                Arc::new(log_crate_manager_with(backend, self.target_root.clone()))
            }
            BackendKind::Slog => {
                let root = slog_root.ok_or(FacadeError::MissingBackend("slog root logger"))?;
                let root = match self.min_level {
                    Some(min) => slog::Logger::root(
                        root.filter_level(SLOG_LEVELS.native(min)).ignore_res(),
                        slog::o!(),
                    ),
                    None => root,
                };
                Arc::new(slog_manager(root))
            }
        };

        tracing::debug!(
            backend = %self.backend,
            min_level = ?self.min_level,
            "Facade log manager ready"
        );
        Ok(manager)
    }
}
