//! Domain layer for rask-log-facade.
//!
//! Contains the canonical types shared across all modules:
//! - `LogLevel`: Facade log severity (Debug/Info/Warn/Error/Fatal)
//! - `FacadeError`: Top-level error type

pub mod error;
pub mod log_level;

pub use error::FacadeError;
pub use log_level::LogLevel;
