use super::type_tag::TypeTag;
use crate::domain::LogLevel;
use std::error::Error;

/// Leveled logger the facade writes through.
///
/// Implementations derive [`level`](Logger::level) from their backend on every
/// call and drop any write whose level is below it.
pub trait Logger: Send + Sync {
    /// Least severe level currently let through.
    fn level(&self) -> LogLevel;

    /// Level is owned by the backend's own configuration; this does nothing.
    #[deprecated(note = "the effective level is derived from the backend; configure the backend instead")]
    fn set_level(&self, level: LogLevel) {
        let _ = level;
    }

    fn write(&self, message: &str, level: LogLevel);

    fn write_error(&self, error: &(dyn Error + 'static), message: &str, level: LogLevel);

    /// Write on behalf of `source`. How the tag reaches the backend is up to the adapter.
    fn write_for(&self, message: &str, source: TypeTag, level: LogLevel);

    fn write_error_for(
        &self,
        error: &(dyn Error + 'static),
        message: &str,
        source: TypeTag,
        level: LogLevel,
    );

    /// `write_for` tagged with `T`.
    fn write_for_type<T: ?Sized>(&self, message: &str, level: LogLevel)
    where
        Self: Sized,
    {
        self.write_for(message, TypeTag::of::<T>(), level);
    }
}
