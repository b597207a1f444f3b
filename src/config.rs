// File: src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::paths::AppPaths;
use anyhow::{Error, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_endpoint() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

fn default_home_address() -> String {
    "Bahnhofstrasse 1, Zürich".to_string()
}

fn default_work_address() -> String {
    "Rehaklinik Bellikon AG".to_string()
}

fn default_work_start() -> String {
    "08:00".to_string()
}

fn default_work_end() -> String {
    "17:00".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Routing-provider API key. The only field without a usable default.
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_home_address")]
    pub default_home_address: String,
    #[serde(default = "default_work_address")]
    pub default_work_address: String,

    // Format "HH:MM"
    #[serde(default = "default_work_start")]
    pub work_start: String,
    #[serde(default = "default_work_end")]
    pub work_end: String,

    /// Reference date override ("YYYY-MM-DD"); today when absent. Mostly
    /// useful for reproducing a past calculation.
    #[serde(default)]
    pub reference_date: Option<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            default_home_address: default_home_address(),
            default_work_address: default_work_address(),
            // Match the serde defaults
            work_start: default_work_start(),
            work_end: default_work_end(),
            reference_date: None,
            log_level: default_log_level(),
        }
    }
}

fn parse_clock(raw: &str, fallback: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").unwrap_or_else(|_| {
        log::warn!("Unparseable time '{}', using {}", raw, fallback);
        NaiveTime::parse_from_str(fallback, "%H:%M").unwrap_or_default()
    })
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;

        // Explicitly detect missing file so callers (onboarding) can behave accordingly.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Helper to detect whether an anyhow::Error indicates a missing config
    /// file, so first-run onboarding can write the default file instead of
    /// reporting a failure.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }
        false
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)?;
        Ok(())
    }

    pub fn get_path_string() -> Result<String> {
        let path = AppPaths::get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    pub fn work_start_time(&self) -> NaiveTime {
        parse_clock(&self.work_start, &default_work_start())
    }

    pub fn work_end_time(&self) -> NaiveTime {
        parse_clock(&self.work_end, &default_work_end())
    }

    /// Configured reference date, or today. An unparseable override logs
    /// and falls back to today rather than failing startup.
    pub fn reference_date(&self) -> NaiveDate {
        match &self.reference_date {
            Some(raw) => {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or_else(|_| {
                    log::warn!("Unparseable reference_date '{}', using today", raw);
                    Local::now().date_naive()
                })
            }
            None => Local::now().date_naive(),
        }
    }
}
