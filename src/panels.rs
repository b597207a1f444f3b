// File: src/panels.rs
//! Input panels and their session-scoped registry.
//!
//! A panel is one repetition of the input form: home address, employer
//! address, work times and an optional date range. Panels are calculated
//! independently; the registry is created once at session start and owned
//! by the caller (no ambient globals).

use crate::config::Config;
use crate::error::CommuteError;
use crate::workdays::DateRange;
use chrono::NaiveTime;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPanel {
    pub home_address: String,
    pub work_address: String,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    /// Raw date inputs, validated lazily so a bad value degrades the
    /// workday fields instead of rejecting the panel.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl InputPanel {
    /// `Ok(None)` when no range was entered; `InvalidRange` when entered
    /// but inverted or unparseable.
    pub fn date_range(&self) -> Result<Option<DateRange>, CommuteError> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => DateRange::parse(start, end).map(Some),
            _ => Ok(None),
        }
    }
}

/// Zero or more input panels for the current session.
pub struct PanelRegistry {
    panels: Vec<InputPanel>,
}

/// Decodes a percent-encoded query component ('+' doubles as space).
fn decode_component(raw: &str) -> String {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut iter = raw.bytes();
    while let Some(b) = iter.next() {
        match b {
            b'+' => bytes.push(b' '),
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                let decoded = match (hi, lo) {
                    (Some(h), Some(l)) => {
                        let hex = [h, l];
                        std::str::from_utf8(&hex)
                            .ok()
                            .and_then(|s| u8::from_str_radix(s, 16).ok())
                    }
                    _ => None,
                };
                match decoded {
                    Some(v) => bytes.push(v),
                    None => {
                        // Malformed escape: keep the literal bytes.
                        bytes.push(b'%');
                        bytes.extend(hi);
                        bytes.extend(lo);
                    }
                }
            }
            other => bytes.push(other),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

impl PanelRegistry {
    fn panel_from_defaults(config: &Config) -> InputPanel {
        InputPanel {
            home_address: config.default_home_address.clone(),
            work_address: config.default_work_address.clone(),
            work_start: config.work_start_time(),
            work_end: config.work_end_time(),
            start_date: None,
            end_date: None,
        }
    }

    /// One panel prefilled with the configured defaults.
    pub fn new(config: &Config) -> Self {
        Self {
            panels: vec![Self::panel_from_defaults(config)],
        }
    }

    /// Builds panels from `home{N}`/`work{N}` query-string pairs, N-th pair
    /// to N-th panel. A pair missing one side falls back to the configured
    /// default for that side. An empty query string yields the default
    /// single panel.
    pub fn from_query_string(query: &str, config: &Config) -> Self {
        let query = query.trim_start_matches('?');
        let mut homes: BTreeMap<u32, String> = BTreeMap::new();
        let mut works: BTreeMap<u32, String> = BTreeMap::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = decode_component(value);
            if let Some(n) = key.strip_prefix("home").and_then(|n| n.parse().ok()) {
                homes.insert(n, value);
            } else if let Some(n) = key.strip_prefix("work").and_then(|n| n.parse().ok()) {
                works.insert(n, value);
            } else {
                log::debug!("Ignoring unknown query parameter '{}'", key);
            }
        }

        let mut indices: Vec<u32> = homes.keys().chain(works.keys()).copied().collect();
        indices.sort_unstable();
        indices.dedup();

        let mut registry = Self { panels: Vec::new() };
        for n in indices {
            let mut panel = Self::panel_from_defaults(config);
            if let Some(home) = homes.get(&n) {
                panel.home_address = home.clone();
            }
            if let Some(work) = works.get(&n) {
                panel.work_address = work.clone();
            }
            registry.add(panel);
        }

        if registry.is_empty() {
            return Self::new(config);
        }
        registry
    }

    pub fn add(&mut self, panel: InputPanel) {
        self.panels.push(panel);
    }

    pub fn panels(&self) -> &[InputPanel] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [InputPanel] {
        &mut self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
