//! In-memory recommendation history

use advisor_domain::{AdviceRecord, Goal};
use chrono::{DateTime, Local, SubsecRound};

/// One successful recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// 1-based, assigned on append
    pub sequence: usize,
    /// Local wall-clock time, second precision
    pub timestamp: DateTime<Local>,
    pub goal: Goal,
    pub advice: AdviceRecord,
}

impl HistoryEntry {
    /// `#3. 2024-05-01 14:02:11`
    pub fn label(&self) -> String {
        format!(
            "#{}. {}",
            self.sequence,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Append-only list of recommendations for the lifetime of the process.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Number of entries shown by history listings
    pub const DISPLAY_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append with the current time and return the new entry.
    pub fn record(&mut self, goal: Goal, advice: AdviceRecord) -> &HistoryEntry {
        self.record_at(goal, advice, Local::now())
    }

    /// Append with an explicit timestamp (truncated to whole seconds).
    pub fn record_at(
        &mut self,
        goal: Goal,
        advice: AdviceRecord,
        timestamp: DateTime<Local>,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            sequence: self.entries.len() + 1,
            timestamp: timestamp.trunc_subsecs(0),
            goal,
            advice,
        };
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// The last `n` entries, most recent first
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
