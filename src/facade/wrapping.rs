use super::full_logger::FullLogger;
use super::logger::Logger;
use super::type_tag::TypeTag;
use crate::domain::LogLevel;
use std::error::Error;

/// Lifts any [`Logger`] into a [`FullLogger`].
///
/// Level and writes are delegated unchanged, so the inner logger's handling of
/// originating types is preserved.
#[derive(Debug, Clone)]
pub struct WrappingFullLogger<L> {
    inner: L,
}

impl<L: Logger> WrappingFullLogger<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Logger> Logger for WrappingFullLogger<L> {
    fn level(&self) -> LogLevel {
        self.inner.level()
    }

    fn write(&self, message: &str, level: LogLevel) {
        self.inner.write(message, level);
    }

    fn write_error(&self, error: &(dyn Error + 'static), message: &str, level: LogLevel) {
        self.inner.write_error(error, message, level);
    }

    fn write_for(&self, message: &str, source: TypeTag, level: LogLevel) {
        self.inner.write_for(message, source, level);
    }

    fn write_error_for(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        source: TypeTag,
        level: LogLevel,
    ) {
        self.inner.write_error_for(error, message, source, level);
    }
}

impl<L: Logger> FullLogger for WrappingFullLogger<L> {}
