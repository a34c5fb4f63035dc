//! Configuration resolution tests
//!
//! Note: uses the serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate TONEARM_ENGINE_URL are marked with #[serial] so
//! they run sequentially, not in parallel.

use serial_test::serial;
use std::env;
use std::io::Write;
use tonearm_common::config::{ProxyConfig, ENGINE_URL_ENV};

#[test]
#[serial]
fn test_no_file_no_env_uses_defaults() {
    env::remove_var(ENGINE_URL_ENV);

    let config = ProxyConfig::resolve(None).unwrap();
    assert_eq!(config, ProxyConfig::default());
    assert_eq!(config.engine_url, "http://127.0.0.1:5720");
    assert_eq!(config.request_timeout_ms, 10_000);
    assert_eq!(config.update_capacity, 64);
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    env::remove_var(ENGINE_URL_ENV);

    let config =
        ProxyConfig::resolve(Some(std::path::Path::new("/nonexistent/tonearm.toml"))).unwrap();
    assert_eq!(config, ProxyConfig::default());
}

#[test]
#[serial]
fn test_toml_file_overrides_defaults() {
    env::remove_var(ENGINE_URL_ENV);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "engine_url = \"http://192.168.1.20:5720\"\nrequest_timeout_ms = 2500"
    )
    .unwrap();

    let config = ProxyConfig::resolve(Some(file.path())).unwrap();
    assert_eq!(config.engine_url, "http://192.168.1.20:5720");
    assert_eq!(config.request_timeout_ms, 2500);
    // Not in the file, stays at default
    assert_eq!(config.update_capacity, 64);
}

#[test]
#[serial]
fn test_env_overrides_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "engine_url = \"http://from-file:5720\"").unwrap();

    env::set_var(ENGINE_URL_ENV, "http://from-env:5720");
    let config = ProxyConfig::resolve(Some(file.path()));
    env::remove_var(ENGINE_URL_ENV);

    assert_eq!(config.unwrap().engine_url, "http://from-env:5720");
}

#[test]
#[serial]
fn test_malformed_toml_is_an_error() {
    env::remove_var(ENGINE_URL_ENV);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "engine_url = [not valid toml").unwrap();

    assert!(ProxyConfig::resolve(Some(file.path())).is_err());
}

#[test]
#[serial]
fn test_zero_update_capacity_is_rejected() {
    env::remove_var(ENGINE_URL_ENV);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "update_capacity = 0").unwrap();

    assert!(ProxyConfig::resolve(Some(file.path())).is_err());
}
