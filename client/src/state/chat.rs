//! Widget state: path selection, submission and the chat session.
//!
//! DESIGN
//! ======
//! One owned `ChatState` lives in a context signal. Every user action is a
//! pair of transitions: `begin_*` runs synchronously in the click handler and
//! hands back a ticket describing the request to make; `finish_*` consumes the
//! ticket together with the network result. Rendering never mutates state.
//!
//! Requests are never cancelled. A ticket remembers the selection `epoch` it
//! was issued under, and a reply whose epoch is no longer current is not
//! applied to the new selection.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::NaiveDateTime;

use super::selection::{SelectionError, SelectionState, Stage};
use super::transcript::{NoticeTone, Sender, Transcript};
use crate::net::api::ApiError;
use crate::net::types::{AskResponse, SubmitPathResponse};

pub const INCOMPLETE_SELECTION_ALERT: &str = "Please complete your selection.";
pub const NO_ANSWER_FALLBACK: &str = "Sorry, I couldn't find an answer.";
pub const ASK_FAILED_FALLBACK: &str = "Failed to get answer";
pub const TRANSPORT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const STALE_ANSWER_NOTICE: &str = "The selection changed while this question was pending, so its answer was discarded.";
pub const STALE_SUBMIT_NOTICE: &str =
    "The selection changed while this chapter was processing. Submit the new selection to ask questions about it.";
pub const ASK_INDICATOR_LABEL: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in progress")]
    Busy,
    #[error("selection is incomplete")]
    Incomplete,
}

/// An accepted path submission waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub indicator_id: String,
    pub path: String,
    pub epoch: u64,
}

/// An accepted question waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskTicket {
    pub indicator_id: String,
    pub path: String,
    pub question: String,
    pub epoch: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub selection: SelectionState,
    pub transcript: Transcript,
    /// A question is in flight.
    pub asking: bool,
    /// A path submission is in flight; the submit trigger is disabled.
    pub submitting: bool,
    /// Path of the last successful submission for the current selection.
    pub active_path: Option<String>,
    /// Bumped on every selection change.
    pub epoch: u64,
}

/// Processing label shown while a path is being ingested.
pub fn submit_indicator_label(path: &str) -> String {
    format!("Accessing content from the file in {path}\n⏳ Processing PDF...")
}

/// Indicator text after a successful submission.
pub fn submit_success_text(reply: &SubmitPathResponse) -> String {
    let text = match reply.message.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(message) => format!("✅ {message}"),
        None => "✅ PDF processed successfully!".to_owned(),
    };
    match reply.chunk_count {
        Some(count) => format!("{text} ({count} chunks indexed)"),
        None => text,
    }
}

/// Indicator text after a failed submission.
pub fn submit_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Backend { .. } => {
            let detail = err.detail().unwrap_or("Error processing PDF");
            match err.hint() {
                Some(hint) => format!("❌ {detail}\n{hint}"),
                None => format!("❌ {detail}"),
            }
        }
        _ => "❌ Failed to process PDF".to_owned(),
    }
}

/// Bot reply text for a failed question.
pub fn ask_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Backend { .. } => {
            let detail = err.detail().unwrap_or(ASK_FAILED_FALLBACK);
            match err.hint() {
                Some(hint) => format!("{detail}\n{hint}"),
                None => detail.to_owned(),
            }
        }
        _ => TRANSPORT_FAILED_MESSAGE.to_owned(),
    }
}

impl ChatState {
    // ---------------------------------------------------------------------
    // Path selector
    // ---------------------------------------------------------------------

    /// Choose `value` at `stage`. A changed selection invalidates the
    /// ingested document, so questions are disabled until it is resubmitted.
    ///
    /// # Errors
    ///
    /// Propagates [`SelectionError`]; state is untouched on error.
    pub fn select(&mut self, stage: Stage, value: impl Into<String>) -> Result<(), SelectionError> {
        self.selection.select(stage, value)?;
        self.epoch += 1;
        self.active_path = None;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_complete() && !self.submitting
    }

    // ---------------------------------------------------------------------
    // Submission controller
    // ---------------------------------------------------------------------

    /// Start submitting the current selection.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::Busy`] while another submission is in flight and
    /// [`SubmitRejected::Incomplete`] when a stage is unset. Neither touches
    /// the transcript.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::Busy);
        }
        let path = self.selection.resource_path().map_err(|_| SubmitRejected::Incomplete)?;

        self.submitting = true;
        let indicator_id = self.transcript.push_indicator(submit_indicator_label(&path));
        Ok(SubmitTicket { indicator_id, path, epoch: self.epoch })
    }

    /// Apply the submission reply. The trigger is re-enabled in every case.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<SubmitPathResponse, ApiError>) {
        self.submitting = false;
        match result {
            Ok(reply) => {
                self.transcript
                    .resolve_indicator(&ticket.indicator_id, submit_success_text(&reply), NoticeTone::Success);
                if ticket.epoch == self.epoch {
                    self.active_path = Some(ticket.path);
                } else {
                    self.transcript.push_notice(STALE_SUBMIT_NOTICE, NoticeTone::Info);
                }
            }
            Err(err) => {
                self.transcript
                    .resolve_indicator(&ticket.indicator_id, submit_failure_text(&err), NoticeTone::Error);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Chat session
    // ---------------------------------------------------------------------

    pub fn can_ask(&self) -> bool {
        self.active_path.is_some() && !self.asking
    }

    /// Accept `input` as a question. Returns `None` for blank input, while a
    /// question is in flight, or before any path is active; nothing is
    /// recorded in those cases.
    pub fn begin_ask(&mut self, input: &str, now: NaiveDateTime) -> Option<AskTicket> {
        let question = input.trim();
        if question.is_empty() || self.asking {
            return None;
        }
        let path = self.active_path.clone()?;

        self.asking = true;
        self.transcript.push_message(Sender::User, question, now);
        let indicator_id = self.transcript.push_indicator(ASK_INDICATOR_LABEL);
        Some(AskTicket { indicator_id, path, question: question.to_owned(), epoch: self.epoch })
    }

    /// Apply the answer (or failure) for `ticket`.
    pub fn finish_ask(&mut self, ticket: AskTicket, result: Result<AskResponse, ApiError>, now: NaiveDateTime) {
        self.asking = false;
        self.transcript.remove_indicator(&ticket.indicator_id);

        if ticket.epoch != self.epoch {
            self.transcript.push_notice(STALE_ANSWER_NOTICE, NoticeTone::Info);
            return;
        }

        match result {
            Ok(reply) => {
                let answer = reply
                    .answer
                    .filter(|a| !a.trim().is_empty())
                    .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_owned());
                self.transcript.push_message(Sender::Bot, answer, now);
                if let Some(debug) = reply.debug {
                    self.transcript.push_debug(debug);
                }
            }
            Err(err) => {
                self.transcript.push_message(Sender::Bot, ask_failure_text(&err), now);
                if let Some(debug) = err.debug() {
                    self.transcript.push_debug(debug.clone());
                }
            }
        }
    }
}
