//! Adapter over `slog`.
//!
//! An originating type never touches the message text: the write goes through
//! a child logger carrying `source_context = <full type path>`, mirroring how
//! structured backends scope a logger to a component.

use crate::domain::{FacadeError, LogLevel};
use crate::facade::{FullLogger, Logger, TypeTag};
use crate::mapping::SLOG_LEVELS;
use slog::Drain;
use std::error::Error;

/// Key carrying the originating type on context-scoped child loggers.
pub const SOURCE_CONTEXT_KEY: &str = "source_context";

/// Facade [`FullLogger`] writing to a `slog::Logger`.
#[derive(Debug, Clone)]
pub struct SlogFullLogger {
    inner: slog::Logger,
}

impl SlogFullLogger {
    pub fn new(inner: slog::Logger) -> Self {
        Self { inner }
    }

    pub fn builder() -> SlogFullLoggerBuilder {
        SlogFullLoggerBuilder { logger: None }
    }

    /// Child logger scoped to `source`.
    pub fn for_context(&self, source: TypeTag) -> slog::Logger {
        self.inner.new(slog::o!(SOURCE_CONTEXT_KEY => source.full_name()))
    }

    /// Adapter whose every write is scoped to `source`.
    pub fn scoped(&self, source: TypeTag) -> Self {
        Self::new(self.for_context(source))
    }

    pub fn inner(&self) -> &slog::Logger {
        &self.inner
    }

    fn emit(
        logger: &slog::Logger,
        level: LogLevel,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        // `slog::log!` keeps the level in a static, so each arm names a constant.
        macro_rules! emit_at {
            ($native:expr) => {
                match error {
                    Some(error) => {
                        slog::log!(logger, $native, "", "{}", message; "error" => %error)
                    }
                    None => slog::log!(logger, $native, "", "{}", message),
                }
            };
        }

        match SLOG_LEVELS.native(level) {
            slog::Level::Critical => emit_at!(slog::Level::Critical),
            slog::Level::Error => emit_at!(slog::Level::Error),
            slog::Level::Warning => emit_at!(slog::Level::Warning),
            slog::Level::Info => emit_at!(slog::Level::Info),
            slog::Level::Debug => emit_at!(slog::Level::Debug),
            slog::Level::Trace => emit_at!(slog::Level::Trace),
        }
    }
}

impl Logger for SlogFullLogger {
    fn level(&self) -> LogLevel {
        SLOG_LEVELS.effective_level(|native| self.inner.is_enabled(native))
    }

    fn write(&self, message: &str, level: LogLevel) {
        if level < self.level() {
            return;
        }

        Self::emit(&self.inner, level, message, None);
    }

    fn write_error(&self, error: &(dyn Error + 'static), message: &str, level: LogLevel) {
        if level < self.level() {
            return;
        }

        Self::emit(&self.inner, level, message, Some(error));
    }

    fn write_for(&self, message: &str, source: TypeTag, level: LogLevel) {
        if level < self.level() {
            return;
        }

        Self::emit(&self.for_context(source), level, message, None);
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

        Self::emit(&self.for_context(source), level, message, Some(error));
    }
}

impl FullLogger for SlogFullLogger {}

/// Builder that refuses to produce an adapter without a logger.
#[derive(Debug, Default)]
pub struct SlogFullLoggerBuilder {
    logger: Option<slog::Logger>,
}

impl SlogFullLoggerBuilder {
    pub fn logger(mut self, logger: slog::Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<SlogFullLogger, FacadeError> {
        let inner = self
            .logger
            .ok_or(FacadeError::MissingBackend("slog logger"))?;
        Ok(SlogFullLogger::new(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::InvariantFormat;
    use crate::test_support::RecordingDrain;

    struct Foo;

    fn adapter(enabled: &[slog::Level]) -> (SlogFullLogger, RecordingDrain) {
        let drain = RecordingDrain::with_enabled(enabled);
        let logger = SlogFullLogger::builder()
            .logger(drain.logger())
            .build()
            .unwrap();
        (logger, drain)
    }

    #[test]
    fn test_build_without_logger_fails() {
        let result = SlogFullLogger::builder().build();
        assert!(matches!(result, Err(FacadeError::MissingBackend("slog logger"))));
    }

    #[test]
    fn test_error_and_fatal_enabled_scenario() {
        let (logger, drain) = adapter(&[slog::Level::Error, slog::Level::Critical]);
        assert_eq!(logger.level(), LogLevel::Error);

        logger.write("slow disk", LogLevel::Warn);
        assert!(drain.events().is_empty());

        logger.write("disk failed", LogLevel::Error);
        let events = drain.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, slog::Level::Error);
        assert_eq!(events[0].message, "disk failed");
        assert_eq!(events[0].value(SOURCE_CONTEXT_KEY), None);
    }

    #[test]
    fn test_nothing_enabled_scenario() {
        let (logger, drain) = adapter(&[]);
        assert_eq!(logger.level(), LogLevel::Fatal);

        logger.write("noise", LogLevel::Debug);
        logger.write("abort", LogLevel::Fatal);

        let events = drain.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, slog::Level::Critical);
    }

    #[test]
    fn test_every_level_forwards_at_its_native_level() {
        let (logger, drain) = adapter(&[slog::Level::Trace, slog::Level::Debug]);
        let err = std::io::Error::other("boom");

        for level in LogLevel::ALL {
            logger.write(level.as_str(), level);
            logger.write_error(&err, level.as_str(), level);
        }

        let events = drain.events();
        assert_eq!(events.len(), 10);
        for (pair, level) in events.chunks(2).zip(LogLevel::ALL) {
            let native = SLOG_LEVELS.native(level);
            assert_eq!(pair[0].level, native);
            assert_eq!(pair[0].message, level.as_str());
            assert_eq!(pair[0].value("error"), None);
            assert_eq!(pair[1].level, native);
            assert_eq!(pair[1].value("error"), Some("boom"));
        }
    }

    #[test]
    fn test_source_type_is_a_context_tag() {
        let (logger, drain) = adapter(&[slog::Level::Info]);

        logger.write_for("bar", TypeTag::of::<Foo>(), LogLevel::Info);

        let events = drain.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "bar");
        assert_eq!(
            events[0].value(SOURCE_CONTEXT_KEY),
            Some(TypeTag::of::<Foo>().full_name())
        );
    }

    #[test]
    fn test_error_is_attached_as_key_value() {
        let (logger, drain) = adapter(&[slog::Level::Warning]);
        let err = std::io::Error::other("connection reset");

        logger.write_error_for(
            &err,
            "upload failed",
            TypeTag::named("Uploader"),
            LogLevel::Warn,
        );

        let events = drain.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "upload failed");
        assert_eq!(events[0].value("error"), Some("connection reset"));
        assert_eq!(events[0].value(SOURCE_CONTEXT_KEY), Some("Uploader"));
    }

    #[test]
    fn test_full_logger_family_uses_context_for_typed_writes() {
        let (logger, drain) = adapter(&[slog::Level::Debug]);

        logger.debug_for_type::<Foo>("tick");
        logger.info_with(&InvariantFormat, "{0}/{1}", &[&1, &2]);
        logger.warn_value(&"plain value");

        let events = drain.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].message, "tick");
        assert!(events[0].value(SOURCE_CONTEXT_KEY).is_some());
        assert_eq!(events[1].message, "1/2");
        assert_eq!(events[1].value(SOURCE_CONTEXT_KEY), None);
        assert_eq!(events[2].message, "plain value");
    }

    #[test]
    fn test_scoped_adapter_tags_every_write() {
        let (logger, drain) = adapter(&[slog::Level::Info]);

        let scoped = logger.scoped(TypeTag::named("Scheduler"));
        scoped.info("tick");

        let events = drain.events();
        assert_eq!(events[0].value(SOURCE_CONTEXT_KEY), Some("Scheduler"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_set_level_is_ignored() {
        let (logger, drain) = adapter(&[slog::Level::Warning]);
        logger.set_level(LogLevel::Debug);
        assert_eq!(logger.level(), LogLevel::Warn);

        drain.set_enabled(&[slog::Level::Info]);
        assert_eq!(logger.level(), LogLevel::Info);
    }
}
