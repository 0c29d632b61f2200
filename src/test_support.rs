//! Shared test support utilities
//!
//! Recording backends for both adapters: `RecordingLog` implements `log::Log`
//! and `RecordingDrain` implements `slog::Drain`. Each reports a configurable
//! set of levels as enabled and captures everything forwarded to it.

use crate::adapters::log_crate::{ERROR_KEY, record_level};
use crate::domain::LogLevel;
use parking_lot::{Mutex, RwLock};
use slog::KV;
use std::fmt;
use std::sync::{Arc, PoisonError};

/// A record captured by [`RecordingLog`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: log::Level,
    /// Level as written through the facade, read back with the severity marker.
    pub facade_level: Option<LogLevel>,
    pub target: String,
    pub message: String,
    /// Rendered `error` key/value, when one was attached.
    pub error: Option<String>,
}

/// `log::Log` backend that captures records in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    enabled: RwLock<Vec<log::Level>>,
    probed_targets: Mutex<Vec<String>>,
    records: Mutex<Vec<CapturedRecord>>,
}

impl RecordingLog {
    pub fn with_enabled(levels: &[log::Level]) -> Self {
        Self {
            enabled: RwLock::new(levels.to_vec()),
            ..Self::default()
        }
    }

    pub fn all_enabled() -> Self {
        Self::with_enabled(&[
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ])
    }

    /// Replace the enabled set, as a reconfigured backend would.
    pub fn set_enabled(&self, levels: &[log::Level]) {
        *self.enabled.write() = levels.to_vec();
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Targets seen by `enabled`, in call order.
    pub fn probed_targets(&self) -> Vec<String> {
        self.probed_targets.lock().clone()
    }
}

impl log::Log for RecordingLog {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.probed_targets.lock().push(metadata.target().to_string());
        self.enabled.read().contains(&metadata.level())
    }

    fn log(&self, record: &log::Record<'_>) {
        let error = record
            .key_values()
            .get(log::kv::Key::from(ERROR_KEY))
            .map(|value| value.to_string());

        self.records.lock().push(CapturedRecord {
            level: record.level(),
            facade_level: record_level(record),
            target: record.target().to_string(),
            message: record.args().to_string(),
            error,
        });
    }

    fn flush(&self) {}
}

/// An event captured by [`RecordingDrain`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
    pub level: slog::Level,
    pub message: String,
    /// Record and logger key/values, record values first.
    pub values: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// `slog::Drain` that captures events in memory.
///
/// Uses std locks so the drain stays unwind safe, which `slog::Logger::root` requires.
#[derive(Debug, Clone, Default)]
pub struct RecordingDrain {
    enabled: Arc<std::sync::RwLock<Vec<slog::Level>>>,
    events: Arc<std::sync::Mutex<Vec<CapturedEvent>>>,
}

impl RecordingDrain {
    pub fn with_enabled(levels: &[slog::Level]) -> Self {
        Self {
            enabled: Arc::new(std::sync::RwLock::new(levels.to_vec())),
            ..Self::default()
        }
    }

    pub fn all_enabled() -> Self {
        Self::with_enabled(&[
            slog::Level::Critical,
            slog::Level::Error,
            slog::Level::Warning,
            slog::Level::Info,
            slog::Level::Debug,
            slog::Level::Trace,
        ])
    }

    /// Root logger draining into this recorder.
    pub fn logger(&self) -> slog::Logger {
        slog::Logger::root(self.clone(), slog::o!())
    }

    pub fn set_enabled(&self, levels: &[slog::Level]) {
        *self
            .enabled
            .write()
            .unwrap_or_else(PoisonError::into_inner) = levels.to_vec();
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl slog::Drain for RecordingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        let mut collector = KvCollector::default();
        // Collector never fails.
        let _ = record.kv().serialize(record, &mut collector);
        let _ = values.serialize(record, &mut collector);

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedEvent {
                level: record.level(),
                message: record.msg().to_string(),
                values: collector.0,
            });
        Ok(())
    }

    fn is_enabled(&self, level: slog::Level) -> bool {
        self.enabled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&level)
    }
}

#[derive(Default)]
struct KvCollector(Vec<(String, String)>);

impl slog::Serializer for KvCollector {
    fn emit_arguments(&mut self, key: slog::Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.0.push((key.to_string(), val.to_string()));
        Ok(())
    }
}
