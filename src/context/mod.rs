// src/context/mod.rs
// Shared context store: the latest upload per slot plus a derived summary

pub mod analysis;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{GeminiError, Result};

/// One of the three named context categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    NetworkLog,
    NetworkData,
    AlarmData,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::NetworkLog, Slot::NetworkData, Slot::AlarmData];

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkLog => "network_log",
            Self::NetworkData => "network_data",
            Self::AlarmData => "alarm_data",
        }
    }

    /// Human-readable label used in summaries and prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::NetworkLog => "network log",
            Self::NetworkData => "network data",
            Self::AlarmData => "alarm data",
        }
    }
}

impl FromStr for Slot {
    type Err = GeminiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "network_log" | "networkLog" => Ok(Self::NetworkLog),
            "network_data" | "networkData" => Ok(Self::NetworkData),
            // alarm_log is what the bundled UI posts
            "alarm_data" | "alarmData" | "alarm_log" => Ok(Self::AlarmData),
            other => Err(GeminiError::InvalidSlot(other.to_string())),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable copy of all slots and the derived summary at one instant
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextSnapshot {
    pub network_log: Option<String>,
    pub network_data: Option<String>,
    pub alarm_data: Option<String>,
    pub summary: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContextSnapshot {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::NetworkLog => self.network_log.as_deref(),
            Slot::NetworkData => self.network_data.as_deref(),
            Slot::AlarmData => self.alarm_data.as_deref(),
        }
    }

    /// Slots that currently hold text, in canonical order
    pub fn filled(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|text| (slot, text)))
    }

    pub fn is_empty(&self) -> bool {
        self.filled().next().is_none()
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::NetworkLog => &mut self.network_log,
            Slot::NetworkData => &mut self.network_data,
            Slot::AlarmData => &mut self.alarm_data,
        }
    }

    fn refresh_summary(&mut self) {
        self.summary = analysis::summarize(self.filled());
    }
}

/// Process-lifetime store shared by every request.
///
/// Cloning is cheap and yields a handle to the same state. All slots and
/// the summary sit behind one lock, so a reader never sees a slot whose
/// summary has not been recomputed yet.
#[derive(Clone, Default)]
pub struct ContextStore {
    inner: Arc<RwLock<ContextSnapshot>>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one slot and recompute the summary
    pub async fn put(&self, slot: Slot, text: impl Into<String>) {
        self.put_many([(slot, text.into())]).await;
    }

    /// Replace several slots under a single write lock.
    ///
    /// Later entries for the same slot win. Returns the post-write snapshot.
    pub async fn put_many(
        &self,
        entries: impl IntoIterator<Item = (Slot, String)>,
    ) -> ContextSnapshot {
        let mut guard = self.inner.write().await;
        for (slot, text) in entries {
            debug!(slot = %slot, bytes = text.len(), "Storing context slot");
            *guard.slot_mut(slot) = Some(text);
        }
        guard.refresh_summary();
        guard.updated_at = Some(Utc::now());
        guard.clone()
    }

    pub async fn get(&self, slot: Slot) -> Option<String> {
        self.inner.read().await.get(slot).map(str::to_owned)
    }

    /// String-keyed `put`; unknown names are `InvalidSlot`
    pub async fn put_named(&self, name: &str, text: impl Into<String>) -> Result<()> {
        let slot: Slot = name.parse()?;
        self.put(slot, text).await;
        Ok(())
    }

    /// String-keyed `get`; unknown names are `InvalidSlot`
    pub async fn get_named(&self, name: &str) -> Result<Option<String>> {
        let slot: Slot = name.parse()?;
        Ok(self.get(slot).await)
    }

    pub async fn summary(&self) -> Option<String> {
        self.inner.read().await.summary.clone()
    }

    pub async fn snapshot(&self) -> ContextSnapshot {
        self.inner.read().await.clone()
    }

    /// Drop every slot and the summary
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        *guard = ContextSnapshot::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_parse_aliases() {
        assert_eq!("network_log".parse::<Slot>().unwrap(), Slot::NetworkLog);
        assert_eq!("networkData".parse::<Slot>().unwrap(), Slot::NetworkData);
        assert_eq!("alarm_log".parse::<Slot>().unwrap(), Slot::AlarmData);
        assert!(matches!(
            "syslog".parse::<Slot>(),
            Err(GeminiError::InvalidSlot(name)) if name == "syslog"
        ));
    }

    #[test]
    fn test_slot_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Slot::AlarmData).unwrap();
        assert_eq!(json, "\"alarm_data\"");
        assert_eq!(Slot::NetworkLog.to_string(), "network_log");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = ContextStore::new();
        let snapshot = store.snapshot().await;
        assert!(snapshot.is_empty());
        assert!(snapshot.summary.is_none());
        assert!(snapshot.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_put_recomputes_summary() {
        let store = ContextStore::new();
        store
            .put(Slot::AlarmData, "ALARM: cell X down\nALARM: cell Y down\nok")
            .await;

        let summary = store.summary().await.unwrap();
        assert!(summary.contains("3 lines scanned"));
        assert!(summary.contains("2 alarm indicators"));
        assert!(!summary.contains("network log"));
    }

    #[tokio::test]
    async fn test_put_many_last_entry_wins() {
        let store = ContextStore::new();
        let snapshot = store
            .put_many([
                (Slot::NetworkLog, "first".to_string()),
                (Slot::NetworkLog, "second".to_string()),
            ])
            .await;
        assert_eq!(snapshot.network_log.as_deref(), Some("second"));
        assert!(snapshot.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_named_access() {
        let store = ContextStore::new();
        store.put_named("networkLog", "up").await.unwrap();
        assert_eq!(store.get_named("network_log").await.unwrap().as_deref(), Some("up"));
        assert!(store.put_named("bogus", "x").await.is_err());
        assert!(store.get_named("bogus").await.is_err());
    }

    #[tokio::test]
    async fn test_clear() {
        let store = ContextStore::new();
        store.put(Slot::NetworkData, "iface eth0").await;
        store.clear().await;
        assert_eq!(store.snapshot().await, ContextSnapshot::default());
    }
}
