//! Per-day record of completed work days.
//!
//! Each "end work" writes one [`HistoryEntry`] keyed by the calendar date at
//! the moment the day was closed. Writing the same date again replaces the
//! previous entry; entries are never merged.
//!
//! The whole map is stored as a single JSON object under
//! [`HISTORY_KEY`](super::storage::HISTORY_KEY):
//!
//! ```json
//! { "2024-06-01": { "date": "2024-06-01", "totalMs": 10800000, "formatted": "3h 0m 0s" } }
//! ```

use super::formatter::{date_key, format_time};
use super::storage::{KeyValueStore, HISTORY_KEY};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: String,
    pub total_ms: u64,
    pub formatted: String,
}

impl HistoryEntry {
    pub fn new(date: NaiveDate, total_ms: u64) -> Self {
        Self {
            date: date_key(date),
            total_ms,
            formatted: format_time(total_ms),
        }
    }

    /// Parsed form of the `date` key, if it is a valid `YYYY-MM-DD` date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: BTreeMap<String, HistoryEntry>,
}

impl History {
    /// Reads the history map. A missing or malformed map reads as empty.
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        let Some(json) = store.get(HISTORY_KEY)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str::<BTreeMap<String, HistoryEntry>>(&json) {
            Ok(entries) => Ok(Self { entries }),
            Err(e) => {
                tracing::warn!(error = %e, "history is malformed, starting empty");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(HISTORY_KEY, &serde_json::to_string(&self.entries)?)
    }

    /// Records `total_ms` for `date`, replacing any earlier entry for that date.
    pub fn record(&mut self, date: NaiveDate, total_ms: u64) -> &HistoryEntry {
        let entry = HistoryEntry::new(date, total_ms);
        let key = entry.date.clone();
        self.entries.insert(key.clone(), entry);
        &self.entries[&key]
    }

    pub fn get(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.get(&date_key(date))
    }

    /// Entries ordered from the most recent date to the oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.values().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and deletes the stored map.
    pub fn clear(&mut self, store: &mut impl KeyValueStore) -> Result<()> {
        self.entries.clear();
        store.remove(HISTORY_KEY)
    }
}
