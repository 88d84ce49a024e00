use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use quill_core::{HistoryEntry, ToolKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_LIMIT: usize = 20;
pub const DEFAULT_MAX_ENTRIES: usize = 500;

/// Where tool results go after composition. Implementations must be safe to share
/// across tasks; the engine never reads history back.
pub trait HistoryRepository: Send + Sync {
    async fn save(&self, entry: HistoryEntry) -> Result<()>;
    /// Newest first.
    async fn list_recent(&self, tool: ToolKind) -> Result<Vec<HistoryEntry>>;
    async fn list_all_recent(&self) -> Result<Vec<HistoryEntry>>;
    async fn usage_counts(&self) -> Result<Vec<UsageCount>>;
    async fn clear(&self, tool: ToolKind) -> Result<u64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCount {
    pub tool: ToolKind,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    pub recent_limit: usize,
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Default)]
struct HistoryState {
    // Oldest at the front.
    entries: VecDeque<HistoryEntry>,
    usage: BTreeMap<ToolKind, u64>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    config: HistoryConfig,
    state: Arc<RwLock<HistoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            state: Arc::default(),
        }
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn recent_where(&self, keep: impl Fn(&HistoryEntry) -> bool) -> Vec<HistoryEntry> {
        self.state
            .read()
            .entries
            .iter()
            .rev()
            .filter(|entry| keep(*entry))
            .take(self.config.recent_limit)
            .cloned()
            .collect()
    }
}

impl HistoryRepository for MemoryStore {
    async fn save(&self, entry: HistoryEntry) -> Result<()> {
        let mut state = self.state.write();
        *state.usage.entry(entry.tool).or_default() += 1;
        state.entries.push_back(entry);
        while state.entries.len() > self.config.max_entries {
            state.entries.pop_front();
        }
        Ok(())
    }

    async fn list_recent(&self, tool: ToolKind) -> Result<Vec<HistoryEntry>> {
        Ok(self.recent_where(|entry| entry.tool == tool))
    }

    async fn list_all_recent(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.recent_where(|_| true))
    }

    async fn usage_counts(&self) -> Result<Vec<UsageCount>> {
        let state = self.state.read();
        let counts = ToolKind::ALL
            .into_iter()
            .filter_map(|tool| {
                let count = state.usage.get(&tool).copied().unwrap_or_default();
                (count > 0).then_some(UsageCount { tool, count })
            })
            .collect();

        Ok(counts)
    }

    async fn clear(&self, tool: ToolKind) -> Result<u64> {
        let mut state = self.state.write();
        let before = state.entries.len();
        state.entries.retain(|entry| entry.tool != tool);
        Ok((before - state.entries.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tool: ToolKind, input: &str) -> HistoryEntry {
        HistoryEntry::new(tool, input, format!("out:{input}"))
    }

    #[tokio::test]
    async fn lists_newest_first_per_tool() {
        let store = MemoryStore::new();
        store.save(entry(ToolKind::Chat, "one")).await.unwrap();
        store.save(entry(ToolKind::Logo, "acme")).await.unwrap();
        store.save(entry(ToolKind::Chat, "two")).await.unwrap();

        let chats = store.list_recent(ToolKind::Chat).await.unwrap();
        let inputs = chats.iter().map(|e| e.input.as_str()).collect::<Vec<_>>();
        assert_eq!(inputs, vec!["two", "one"]);

        let all = store.list_all_recent().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].input, "two");
    }

    #[tokio::test]
    async fn recent_limit_and_retention_cap() {
        let store = MemoryStore::with_config(HistoryConfig {
            recent_limit: 2,
            max_entries: 3,
        });
        for index in 0..5 {
            store
                .save(entry(ToolKind::Script, &index.to_string()))
                .await
                .unwrap();
        }

        assert_eq!(store.len(), 3);
        let recent = store.list_recent(ToolKind::Script).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].input, "4");
        assert_eq!(recent[1].input, "3");
    }

    #[tokio::test]
    async fn usage_counts_survive_clear() {
        let store = MemoryStore::new();
        store.save(entry(ToolKind::Hashtag, "chess")).await.unwrap();
        store.save(entry(ToolKind::Chat, "hi")).await.unwrap();
        store.save(entry(ToolKind::Hashtag, "yoga")).await.unwrap();

        assert_eq!(store.clear(ToolKind::Hashtag).await.unwrap(), 2);
        assert!(store.list_recent(ToolKind::Hashtag).await.unwrap().is_empty());

        let usage = store.usage_counts().await.unwrap();
        assert_eq!(
            usage,
            vec![
                UsageCount { tool: ToolKind::Chat, count: 1 },
                UsageCount { tool: ToolKind::Hashtag, count: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.save(entry(ToolKind::Image, "sunset")).await.unwrap();
        assert!(!store.is_empty());
    }
}
