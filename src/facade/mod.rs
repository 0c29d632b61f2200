//! Facade traits callers log through.
//!
//! - `Logger`: level getter plus the four write operations
//! - `FullLogger`: per-level convenience families on top of `Logger`
//! - `WrappingFullLogger`: turns any `Logger` into a `FullLogger`

pub mod format;
pub mod full_logger;
pub mod logger;
pub mod type_tag;
pub mod wrapping;

pub use format::{FormatError, FormatProvider, InvariantFormat, format_composite};
pub use full_logger::FullLogger;
pub use logger::Logger;
pub use type_tag::TypeTag;
pub use wrapping::WrappingFullLogger;
