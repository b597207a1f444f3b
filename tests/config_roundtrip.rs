// File: ./tests/config_roundtrip.rs
//! Config load/save against an isolated directory.

use arbeitsweg::config::Config;
use serial_test::serial;
use std::env;
use std::fs;

fn setup_env(suffix: &str) -> std::path::PathBuf {
    let temp_dir = env::temp_dir().join(format!(
        "arbeitsweg_test_{}_{}",
        suffix,
        std::process::id()
    ));
    let _ = fs::create_dir_all(&temp_dir);

    // UNSAFE: modifying process environment
    unsafe {
        env::set_var("ARBEITSWEG_TEST_DIR", &temp_dir);
    }
    temp_dir
}

fn teardown(path: std::path::PathBuf) {
    unsafe {
        env::remove_var("ARBEITSWEG_TEST_DIR");
    }
    let _ = fs::remove_dir_all(path);
}

#[test]
#[serial]
fn missing_config_is_detected() {
    let dir = setup_env("missing");
    let err = Config::load().unwrap_err();
    assert!(Config::is_missing_config_error(&err));
    teardown(dir);
}

#[test]
#[serial]
fn save_then_load_roundtrip() {
    let dir = setup_env("roundtrip");

    let mut config = Config::default();
    config.api_key = "secret".to_string();
    config.work_start = "07:15".to_string();
    config.reference_date = Some("2025-06-02".to_string());
    config.save().unwrap();

    let loaded = Config::load().unwrap();
    assert_eq!(loaded.api_key, "secret");
    assert_eq!(
        loaded.work_start_time(),
        chrono::NaiveTime::from_hms_opt(7, 15, 0).unwrap()
    );
    assert_eq!(
        loaded.reference_date(),
        chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    );
    teardown(dir);
}

#[test]
#[serial]
fn partial_file_fills_serde_defaults() {
    let dir = setup_env("partial");
    fs::write(dir.join("config.toml"), "api_key = \"k\"\n").unwrap();

    let loaded = Config::load().unwrap();
    assert_eq!(loaded.api_key, "k");
    assert_eq!(loaded.endpoint, Config::default().endpoint);
    assert_eq!(loaded.work_end, "17:00");
    teardown(dir);
}

#[test]
#[serial]
fn syntax_error_is_not_missing() {
    let dir = setup_env("syntax");
    fs::write(dir.join("config.toml"), "api_key = [broken").unwrap();

    let err = Config::load().unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    teardown(dir);
}

#[test]
fn bad_clock_string_falls_back() {
    let mut config = Config::default();
    config.work_start = "25:99".to_string();
    assert_eq!(
        config.work_start_time(),
        chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap()
    );
}
