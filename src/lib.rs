#![warn(rust_2018_idioms)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Errors are documented on FacadeError
    clippy::module_name_repetitions, // e.g. LogCrateLogger in adapters::log_crate
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Backend names read better unticked
)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod facade;
pub mod manager;
pub mod mapping;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;

// Re-export main types for easy access
pub use adapters::{LogCrateLogger, SlogFullLogger};
pub use config::{BackendKind, FacadeConfig};
pub use domain::{FacadeError, LogLevel};
pub use facade::{
    FormatProvider, FullLogger, InvariantFormat, Logger, TypeTag, WrappingFullLogger,
};
pub use manager::{FuncLogManager, LogManager};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
