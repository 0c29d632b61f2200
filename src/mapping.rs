//! Level mapping tables between the facade and each backend.
//!
//! Tables are process-wide `static`s, ordered ascending by facade severity and
//! never mutated after initialization.

use crate::domain::LogLevel;

/// Ordered association between facade levels and a backend's native levels.
#[derive(Debug)]
pub struct LevelMap<N: 'static> {
    entries: [(LogLevel, N); 5],
}

impl<N: Copy + PartialEq + 'static> LevelMap<N> {
    /// Entries must be listed once per level, least severe first.
    pub const fn new(entries: [(LogLevel, N); 5]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(LogLevel, N)] {
        &self.entries
    }

    /// Translate a facade level into the backend's native level.
    pub fn native(&self, level: LogLevel) -> N {
        // Entries are laid out in LogLevel declaration order.
        self.entries[level as usize].1
    }

    /// Reverse lookup. When several facade levels share a native level the
    /// least severe one wins.
    pub fn facade(&self, native: N) -> Option<LogLevel> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == native)
            .map(|(level, _)| *level)
    }

    /// First facade level whose native level `is_enabled` accepts, probing
    /// from least to most severe. Falls back to `Fatal` when nothing is enabled.
    pub fn effective_level(&self, mut is_enabled: impl FnMut(N) -> bool) -> LogLevel {
        for (level, native) in &self.entries {
            if is_enabled(*native) {
                return *level;
            }
        }

        LogLevel::Fatal
    }
}

/// Key/value marking a `log` record written at `Fatal`.
pub const SEVERITY_KEY: &str = "severity";
pub const FATAL_SEVERITY: &str = "fatal";

/// `log` has no tier above `Error`; `Fatal` shares it and is told apart by a
/// [`SEVERITY_KEY`] = [`FATAL_SEVERITY`] key/value on the record.
pub static LOG_CRATE_LEVELS: LevelMap<log::Level> = LevelMap::new([
    (LogLevel::Debug, log::Level::Debug),
    (LogLevel::Info, log::Level::Info),
    (LogLevel::Warn, log::Level::Warn),
    (LogLevel::Error, log::Level::Error),
    (LogLevel::Fatal, log::Level::Error),
]);

/// Reverse lookup for a `log` record, honouring the fatal severity marker.
pub fn log_crate_facade(native: log::Level, severity: Option<&str>) -> Option<LogLevel> {
    match (native, severity) {
        (log::Level::Error, Some(FATAL_SEVERITY)) => Some(LogLevel::Fatal),
        _ => LOG_CRATE_LEVELS.facade(native),
    }
}

pub static SLOG_LEVELS: LevelMap<slog::Level> = LevelMap::new([
    (LogLevel::Debug, slog::Level::Debug),
    (LogLevel::Info, slog::Level::Info),
    (LogLevel::Warn, slog::Level::Warning),
    (LogLevel::Error, slog::Level::Error),
    (LogLevel::Fatal, slog::Level::Critical),
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed<N: Copy + PartialEq>(map: &LevelMap<N>) {
        let levels: Vec<LogLevel> = map.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_tables_cover_every_level_in_order() {
        assert_well_formed(&LOG_CRATE_LEVELS);
        assert_well_formed(&SLOG_LEVELS);
    }

    #[test]
    fn test_slog_table_round_trips() {
        for level in LogLevel::ALL {
            let native = SLOG_LEVELS.native(level);
            assert_eq!(SLOG_LEVELS.facade(native), Some(level));
        }
    }

    #[test]
    fn test_log_crate_table_round_trips_with_severity_marker() {
        for level in LogLevel::ALL {
            let native = LOG_CRATE_LEVELS.native(level);
            let severity = (level == LogLevel::Fatal).then_some(FATAL_SEVERITY);
            assert_eq!(log_crate_facade(native, severity), Some(level));
        }
        assert_eq!(LOG_CRATE_LEVELS.native(LogLevel::Fatal), log::Level::Error);
        assert_eq!(log_crate_facade(log::Level::Error, None), Some(LogLevel::Error));
        assert_eq!(log_crate_facade(log::Level::Warn, Some(FATAL_SEVERITY)), Some(LogLevel::Warn));
        assert_eq!(log_crate_facade(log::Level::Trace, None), None);
    }

    #[test]
    fn test_effective_level_is_first_enabled() {
        let level = SLOG_LEVELS.effective_level(|n| {
            matches!(n, slog::Level::Error | slog::Level::Critical)
        });
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn test_effective_level_defaults_to_fatal() {
        assert_eq!(SLOG_LEVELS.effective_level(|_| false), LogLevel::Fatal);
        assert_eq!(LOG_CRATE_LEVELS.effective_level(|_| false), LogLevel::Fatal);
    }

    #[test]
    fn test_effective_level_probes_in_ascending_order() {
        let mut probed = Vec::new();
        let _ = LOG_CRATE_LEVELS.effective_level(|n| {
            probed.push(n);
            n == log::Level::Warn
        });
        assert_eq!(
            probed,
            vec![log::Level::Debug, log::Level::Info, log::Level::Warn]
        );
    }
}
