//! Sidebar history: user questions grouped by calendar day.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use chrono::{Days, NaiveDate};

use super::transcript::{ChatMessage, Sender};

/// Characters kept before a history preview is cut off.
pub const PREVIEW_CHARS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HistoryBucket {
    Today,
    Yesterday,
    Earlier,
}

impl HistoryBucket {
    pub fn label(self) -> &'static str {
        match self {
            HistoryBucket::Today => "Today",
            HistoryBucket::Yesterday => "Yesterday",
            HistoryBucket::Earlier => "Earlier",
        }
    }

    /// Bucket for a message sent on `day`, compared by calendar date only.
    pub fn for_day(day: NaiveDate, today: NaiveDate) -> Self {
        if day >= today {
            HistoryBucket::Today
        } else if today.checked_sub_days(Days::new(1)) == Some(day) {
            HistoryBucket::Yesterday
        } else {
            HistoryBucket::Earlier
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    /// Transcript entry to scroll to.
    pub entry_id: String,
    /// `HH:MM` send time.
    pub time: String,
    pub preview: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryGroup {
    pub bucket: HistoryBucket,
    pub items: Vec<HistoryItem>,
}

/// Truncate `content` to [`PREVIEW_CHARS`] characters, marking the cut.
pub fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_owned()
    }
}

/// Group user messages into Today / Yesterday / Earlier, newest first within
/// each group. Empty groups are omitted.
pub fn group_history<'a>(messages: impl IntoIterator<Item = &'a ChatMessage>, today: NaiveDate) -> Vec<HistoryGroup> {
    let mut groups: Vec<HistoryGroup> = Vec::new();
    let user_messages: Vec<&ChatMessage> = messages.into_iter().filter(|m| m.sender == Sender::User).collect();

    for message in user_messages.into_iter().rev() {
        let bucket = HistoryBucket::for_day(message.timestamp.date(), today);
        let item = HistoryItem {
            entry_id: message.id.clone(),
            time: message.timestamp.format("%H:%M").to_string(),
            preview: preview(&message.content),
        };
        match groups.iter_mut().find(|g| g.bucket == bucket) {
            Some(group) => group.items.push(item),
            None => groups.push(HistoryGroup { bucket, items: vec![item] }),
        }
    }

    groups.sort_by_key(|g| g.bucket);
    groups
}
