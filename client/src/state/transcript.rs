//! Ordered transcript of chat messages, indicators and status notices.
//!
//! DESIGN
//! ======
//! Messages are immutable once appended. The only entries that ever change are
//! processing indicators, which are either resolved in place into a notice or
//! removed when the reply they stood in for arrives.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use chrono::NaiveDateTime;

use crate::net::types::DebugInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier for bubbles from this sender.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EntryBody {
    Message(ChatMessage),
    Processing { label: String },
    Notice { text: String, tone: NoticeTone },
    Debug(DebugInfo),
}

impl EntryBody {
    pub fn kind(&self) -> &'static str {
        match self {
            EntryBody::Message(_) => "message",
            EntryBody::Processing { .. } => "processing",
            EntryBody::Notice { .. } => "notice",
            EntryBody::Debug(_) => "debug",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub id: String,
    pub body: EntryBody,
}

impl TranscriptEntry {
    /// Render key: stable while the entry is unchanged, new once an indicator
    /// resolves in place. Rows with an unchanged key keep their view state.
    pub fn row_key(&self) -> (String, &'static str) {
        (self.id.clone(), self.body.kind())
    }
}

/// DOM id used to scroll a transcript entry into view.
pub fn entry_dom_id(entry_id: &str) -> String {
    format!("entry-{entry_id}")
}

fn new_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chat messages in append order.
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter().filter_map(|entry| match &entry.body {
            EntryBody::Message(message) => Some(message),
            _ => None,
        })
    }

    fn push(&mut self, body: EntryBody) -> String {
        let id = new_entry_id();
        self.entries.push(TranscriptEntry { id: id.clone(), body });
        id
    }

    /// Append a message and return its entry id.
    pub fn push_message(&mut self, sender: Sender, content: impl Into<String>, timestamp: NaiveDateTime) -> String {
        let id = new_entry_id();
        let message = ChatMessage { id: id.clone(), content: content.into(), sender, timestamp };
        self.entries.push(TranscriptEntry { id: id.clone(), body: EntryBody::Message(message) });
        id
    }

    pub fn push_notice(&mut self, text: impl Into<String>, tone: NoticeTone) -> String {
        self.push(EntryBody::Notice { text: text.into(), tone })
    }

    pub fn push_debug(&mut self, info: DebugInfo) -> String {
        self.push(EntryBody::Debug(info))
    }

    /// Append a processing indicator and return its id.
    pub fn push_indicator(&mut self, label: impl Into<String>) -> String {
        self.push(EntryBody::Processing { label: label.into() })
    }

    /// Replace the indicator `id` in place with a notice.
    /// Returns `false` if no pending indicator has that id.
    pub fn resolve_indicator(&mut self, id: &str, text: impl Into<String>, tone: NoticeTone) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.id == id && matches!(e.body, EntryBody::Processing { .. }))
        else {
            return false;
        };
        entry.body = EntryBody::Notice { text: text.into(), tone };
        true
    }

    /// Drop the indicator `id`. Non-indicator entries are never removed.
    pub fn remove_indicator(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.id == id && matches!(e.body, EntryBody::Processing { .. })));
        self.entries.len() != before
    }

    #[cfg(test)]
    pub fn has_pending_indicator(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e.body, EntryBody::Processing { .. }))
    }
}
