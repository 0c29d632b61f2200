//! Adapter over the `log` crate.
//!
//! Records are emitted under the adapter's target, so a `log::Log`
//! implementation can filter hierarchically by target prefix. An originating
//! type is folded into the message text as `"<TypeName>: <message>"`.

use crate::domain::{FacadeError, LogLevel};
use crate::facade::{Logger, TypeTag};
use crate::mapping::{FATAL_SEVERITY, LOG_CRATE_LEVELS, SEVERITY_KEY, log_crate_facade};
use log::kv::{Key, Value};
use log::{Log, Metadata, Record};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Key carrying an attached error.
pub const ERROR_KEY: &str = "error";

/// Target used when the builder is given none.
pub const DEFAULT_TARGET: &str = "rask_log_facade";

/// Forwards to the logger installed with `log::set_logger`, honouring
/// `log::max_level()` the same way the `log` macros do.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLog;

impl Log for GlobalLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level() && log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::logger().log(record);
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// `log::Log` that reports anything more verbose than `floor` as disabled.
pub struct LevelFloor<L: ?Sized> {
    floor: log::Level,
    inner: Arc<L>,
}

impl<L: Log + ?Sized> LevelFloor<L> {
    pub fn new(inner: Arc<L>, floor: log::Level) -> Self {
        Self { floor, inner }
    }
}

impl<L: Log + ?Sized> Log for LevelFloor<L> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.floor && self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() <= self.floor {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Facade [`Logger`] writing to a `log::Log` backend.
pub struct LogCrateLogger<L: ?Sized = GlobalLog> {
    target: String,
    inner: Arc<L>,
}

impl LogCrateLogger<GlobalLog> {
    /// Adapter over the process-wide `log` logger.
    pub fn global(target: impl Into<String>) -> Self {
        Self::new(Arc::new(GlobalLog), target)
    }
}

impl<L: Log + ?Sized> LogCrateLogger<L> {
    pub fn new(inner: Arc<L>, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            inner,
        }
    }

    pub fn builder() -> LogCrateLoggerBuilder<L> {
        LogCrateLoggerBuilder {
            backend: None,
            target: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn native_enabled(&self, native: log::Level) -> bool {
        self.inner.enabled(
            &Metadata::builder()
                .level(native)
                .target(&self.target)
                .build(),
        )
    }

    fn forward(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let error_kv = error
            .as_ref()
            .map(|error| (ERROR_KEY, Value::from_display(error)));
        let severity_kv =
            (level == LogLevel::Fatal).then(|| (SEVERITY_KEY, Value::from(FATAL_SEVERITY)));
        let kvs = [error_kv, severity_kv];
        let source: &[_] = &kvs;

        self.inner.log(
            &Record::builder()
                .args(args)
                .level(LOG_CRATE_LEVELS.native(level))
                .target(&self.target)
                .key_values(&source)
                .build(),
        );
    }
}

/// Facade level of a record written by a [`LogCrateLogger`].
pub fn record_level(record: &Record<'_>) -> Option<LogLevel> {
    let severity = record
        .key_values()
        .get(Key::from(SEVERITY_KEY))
        .map(|value| value.to_string());
    log_crate_facade(record.level(), severity.as_deref())
}

impl<L: Log + ?Sized> Logger for LogCrateLogger<L> {
    fn level(&self) -> LogLevel {
        LOG_CRATE_LEVELS.effective_level(|native| self.native_enabled(native))
    }

    fn write(&self, message: &str, level: LogLevel) {
        if level < self.level() {
            return;
        }

        self.forward(level, format_args!("{message}"), None);
    }

    fn write_error(&self, error: &(dyn Error + 'static), message: &str, level: LogLevel) {
        if level < self.level() {
            return;
        }

        self.forward(level, format_args!("{message}"), Some(error));
    }

    fn write_for(&self, message: &str, source: TypeTag, level: LogLevel) {
        if level < self.level() {
            return;
        }

        self.forward(level, format_args!("{}: {message}", source.name()), None);
    }

    fn write_error_for(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        source: TypeTag,
        level: LogLevel,
    ) {
        if level < self.level() {
            return;
        }

        self.forward(
            level,
            format_args!("{}: {message}", source.name()),
            Some(error),
        );
    }
}

impl<L: ?Sized> fmt::Debug for LogCrateLogger<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogCrateLogger")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl<L: ?Sized> Clone for LogCrateLogger<L> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Builder that refuses to produce an adapter without a backend.
pub struct LogCrateLoggerBuilder<L: ?Sized> {
    backend: Option<Arc<L>>,
    target: Option<String>,
}

impl<L: Log + ?Sized> LogCrateLoggerBuilder<L> {
    pub fn backend(mut self, backend: Arc<L>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn build(self) -> Result<LogCrateLogger<L>, FacadeError> {
        let inner = self
            .backend
            .ok_or(FacadeError::MissingBackend("log backend"))?;
        let target = self.target.unwrap_or_else(|| DEFAULT_TARGET.to_string());

        Ok(LogCrateLogger { target, inner })
    }
}
