//! Backend adapters implementing the facade.
//!
//! The two adapters deliberately differ in how an originating type reaches
//! the backend:
//! - `LogCrateLogger`: prefixed into the message (`"Foo: message"`)
//! - `SlogFullLogger`: `source_context` key on a child logger

pub mod log_crate;
pub mod slog_logger;

pub use log_crate::{
    DEFAULT_TARGET, ERROR_KEY, GlobalLog, LevelFloor, LogCrateLogger, LogCrateLoggerBuilder,
    record_level,
};
pub use slog_logger::{SOURCE_CONTEXT_KEY, SlogFullLogger, SlogFullLoggerBuilder};
