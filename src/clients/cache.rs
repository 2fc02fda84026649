use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

pub const DASHBOARD_KEY: &str = "admin-dashboard";
pub const METRICS_KEY: &str = "admin-metricas";
pub const ORGANIZATIONS_KEY: &str = "admin-organizacoes";
pub const PLANS_KEY: &str = "admin-planos";
pub const TEMPLATES_KEY: &str = "admin-templates";

/// Key of one entry under a resource prefix, e.g. `admin-planos:7`.
pub fn entry_key(prefix: &str, part: impl std::fmt::Display) -> String {
    format!("{}:{}", prefix, part)
}

struct CachedEntry {
    stored_at: Instant,
    value: serde_json::Value,
}

/// Server responses kept for a staleness window. Entries past the window are
/// treated as missing; mutations invalidate their resource prefix so the next
/// read goes back to the server.
pub struct QueryCache {
    stale_time: Duration,
    entries: HashMap<String, CachedEntry>,
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: HashMap::new(),
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;

        if entry.stored_at.elapsed() >= self.stale_time {
            debug!(key, "Cached entry is stale");
            return None;
        }

        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => {
                debug!(key, "Cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Cached entry has unexpected shape");
                None
            }
        }
    }

    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(
                    key.to_string(),
                    CachedEntry {
                        stored_at: Instant::now(),
                        value,
                    },
                );
            }
            Err(e) => warn!(key, error = %e, "Failed to cache value"),
        }
    }

    /// Drops `prefix` itself and every `prefix:*` entry.
    pub fn invalidate(&mut self, prefix: &str) -> usize {
        let nested = format!("{}:", prefix);
        let before = self.entries.len();
        self.entries
            .retain(|key, _| key != prefix && !key.starts_with(&nested));
        let removed = before - self.entries.len();

        debug!(prefix, removed, "Cache invalidated");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
