use rask_log_facade::config::{BACKEND_ENV, MIN_LEVEL_ENV, TARGET_ROOT_ENV};
use rask_log_facade::{BackendKind, FacadeConfig, FacadeError, LogLevel};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

// Helper function to clean all environment variables before and after tests
fn clean_all_env_vars() {
    unsafe {
        for var in [BACKEND_ENV, TARGET_ROOT_ENV, MIN_LEVEL_ENV] {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clean_all_env_vars();

    let config = FacadeConfig::from_env().unwrap();
    assert_eq!(config, FacadeConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clean_all_env_vars();
    unsafe {
        env::set_var(BACKEND_ENV, "slog");
        env::set_var(TARGET_ROOT_ENV, "billing");
    }

    let config = FacadeConfig::from_env().unwrap();
    assert_eq!(config.backend, BackendKind::Slog);
    assert_eq!(config.target_root.as_deref(), Some("billing"));

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_backend() {
    clean_all_env_vars();
    unsafe {
        env::set_var(BACKEND_ENV, "syslog");
    }

    let result = FacadeConfig::from_env();
    assert!(matches!(result, Err(FacadeError::Config(_))));

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_from_env_min_level_accepts_aliases() {
    clean_all_env_vars();
    unsafe {
        env::set_var(MIN_LEVEL_ENV, "Warning");
    }

    let config = FacadeConfig::from_env().unwrap();
    assert_eq!(config.min_level, Some(LogLevel::Warn));

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_min_level() {
    clean_all_env_vars();
    unsafe {
        env::set_var(MIN_LEVEL_ENV, "verbose");
    }

    let result = FacadeConfig::from_env();
    assert!(matches!(
        result,
        Err(FacadeError::InvalidLogLevel { ref input, .. }) if input == "verbose"
    ));

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    clean_all_env_vars();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "backend = \"slog\"\ntarget_root = \"from_file\"").unwrap();

    let mut config = FacadeConfig::from_file(file.path()).unwrap();
    unsafe {
        env::set_var(TARGET_ROOT_ENV, "from_env");
    }
    config.apply_env().unwrap();

    assert_eq!(config.backend, BackendKind::Slog);
    assert_eq!(config.target_root.as_deref(), Some("from_env"));

    clean_all_env_vars();
}

#[test]
fn test_from_file_missing_path() {
    let result = FacadeConfig::from_file("/nonexistent/rask-log-facade.toml");
    assert!(matches!(result, Err(FacadeError::File(_))));
}

#[test]
fn test_from_file_invalid_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "backend = ").unwrap();

    let result = FacadeConfig::from_file(file.path());
    assert!(matches!(result, Err(FacadeError::Parse(_))));
}

#[test]
fn test_log_backend_builds_without_slog_root() {
    let config = FacadeConfig::from_toml_str("backend = \"log\"").unwrap();
    assert!(config.build_manager(None).is_ok());
}
