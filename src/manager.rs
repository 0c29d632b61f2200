//! Per-type logger resolution.
//!
//! A `LogManager` hands out a `FullLogger` for an originating type. The
//! bindings below resolve loggers the way each backend scopes components:
//! a per-type target for `log`, a `source_context` child logger for `slog`.

use crate::adapters::{GlobalLog, LogCrateLogger, SlogFullLogger};
use crate::facade::{FullLogger, TypeTag, WrappingFullLogger};
use std::fmt;
use std::sync::Arc;

pub trait LogManager: Send + Sync {
    fn get_logger(&self, source: TypeTag) -> Arc<dyn FullLogger>;

    fn logger_for<T: ?Sized>(&self) -> Arc<dyn FullLogger>
    where
        Self: Sized,
    {
        self.get_logger(TypeTag::of::<T>())
    }
}

/// [`LogManager`] backed by a factory closure.
pub struct FuncLogManager<F> {
    factory: F,
}

impl<F> FuncLogManager<F>
where
    F: Fn(TypeTag) -> Arc<dyn FullLogger> + Send + Sync,
{
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> LogManager for FuncLogManager<F>
where
    F: Fn(TypeTag) -> Arc<dyn FullLogger> + Send + Sync,
{
    fn get_logger(&self, source: TypeTag) -> Arc<dyn FullLogger> {
        tracing::debug!(source = source.full_name(), "Resolving facade logger");
        (self.factory)(source)
    }
}

impl<F> fmt::Debug for FuncLogManager<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncLogManager").finish_non_exhaustive()
    }
}

/// `log` target for `source`, optionally nested under `root`.
pub fn target_for(root: Option<&str>, source: TypeTag) -> String {
    match root {
        Some(root) => format!("{root}::{}", source.full_name()),
        None => source.full_name().to_string(),
    }
}

/// Resolve loggers over the process-wide `log` logger.
pub fn log_crate_manager(
    target_root: Option<String>,
) -> FuncLogManager<impl Fn(TypeTag) -> Arc<dyn FullLogger> + Send + Sync> {
    log_crate_manager_with(Arc::new(GlobalLog), target_root)
}

/// Resolve loggers over an explicit `log::Log` backend.
pub fn log_crate_manager_with<L>(
    backend: Arc<L>,
    target_root: Option<String>,
) -> FuncLogManager<impl Fn(TypeTag) -> Arc<dyn FullLogger> + Send + Sync>
where
    L: log::Log + ?Sized + 'static,
{
    FuncLogManager::new(move |source: TypeTag| -> Arc<dyn FullLogger> {
        let target = target_for(target_root.as_deref(), source);
        Arc::new(WrappingFullLogger::new(LogCrateLogger::new(
            Arc::clone(&backend),
            target,
        )))
    })
}

/// Resolve loggers as `source_context` children of `root`.
pub fn slog_manager(
    root: slog::Logger,
) -> FuncLogManager<impl Fn(TypeTag) -> Arc<dyn FullLogger> + Send + Sync> {
    let root = SlogFullLogger::new(root);
    FuncLogManager::new(move |source: TypeTag| -> Arc<dyn FullLogger> {
        Arc::new(root.scoped(source))
    })
}
