use super::*;
use crate::net::types::{DebugInfo, ErrorBody, ScoredChunk};
use crate::state::transcript::EntryBody;
use chrono::NaiveDate;

// =============================================================
// Helpers
// =============================================================

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap().and_hms_opt(16, 20, 0).unwrap()
}

fn selected() -> ChatState {
    let mut state = ChatState::default();
    state.select(Stage::Board, "NCERT").unwrap();
    state.select(Stage::Class, "Class 10").unwrap();
    state.select(Stage::Subject, "Science").unwrap();
    state.select(Stage::Chapter, "Chapter 3").unwrap();
    state
}

fn ready() -> ChatState {
    let mut state = selected();
    let ticket = state.begin_submit().unwrap();
    state.finish_submit(ticket, Ok(SubmitPathResponse::default()));
    state
}

fn backend(status: u16, body: ErrorBody) -> ApiError {
    ApiError::Backend { status, body }
}

fn bodies(state: &ChatState) -> Vec<EntryBody> {
    state.transcript.entries().iter().map(|e| e.body.clone()).collect()
}

// =============================================================
// Selection
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = ChatState::default();
    assert!(!state.asking);
    assert!(!state.submitting);
    assert!(state.active_path.is_none());
    assert!(state.transcript.is_empty());
    assert!(!state.can_submit());
    assert!(!state.can_ask());
}

#[test]
fn submit_readiness_follows_completeness() {
    let mut state = ChatState::default();
    state.select(Stage::Board, "NCERT").unwrap();
    assert!(!state.can_submit());
    state.select(Stage::Class, "Class 10").unwrap();
    state.select(Stage::Subject, "Science").unwrap();
    assert!(!state.can_submit());
    state.select(Stage::Chapter, "Chapter 3").unwrap();
    assert!(state.can_submit());
    state.select(Stage::Class, "Class 9").unwrap();
    assert!(!state.can_submit());
}

#[test]
fn changing_selection_disables_questions() {
    let mut state = ready();
    assert!(state.can_ask());
    state.select(Stage::Chapter, "Chapter 4").unwrap();
    assert!(state.active_path.is_none());
    assert!(!state.can_ask());
}

#[test]
fn rejected_selection_keeps_active_path() {
    let mut state = ready();
    let epoch = state.epoch;
    assert!(state.select(Stage::Chapter, "Chapter 42").is_err());
    assert!(state.can_ask());
    assert_eq!(state.epoch, epoch);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn incomplete_submit_fails_fast_without_indicator() {
    let mut state = ChatState::default();
    state.select(Stage::Board, "CBSE").unwrap();
    assert_eq!(state.begin_submit(), Err(SubmitRejected::Incomplete));
    assert!(state.transcript.is_empty());
    assert!(!state.submitting);
}

#[test]
fn begin_submit_disables_trigger_and_shows_indicator() {
    let mut state = selected();
    let ticket = state.begin_submit().unwrap();
    assert_eq!(ticket.path, "gs://rag-project-storagebucket/NCERT/Class 10/Science/Chapter_3");
    assert!(state.submitting);
    assert!(!state.can_submit());
    assert!(state.transcript.has_pending_indicator());
    assert_eq!(state.begin_submit(), Err(SubmitRejected::Busy));
}

#[test]
fn submit_success_replaces_indicator_and_enables_questions() {
    let mut state = selected();
    let ticket = state.begin_submit().unwrap();
    let reply = SubmitPathResponse { status: Some("success".to_owned()), ..SubmitPathResponse::default() };
    state.finish_submit(ticket.clone(), Ok(reply));

    assert!(!state.submitting);
    assert_eq!(state.active_path.as_deref(), Some(ticket.path.as_str()));
    assert_eq!(
        bodies(&state),
        vec![EntryBody::Notice { text: "✅ PDF processed successfully!".to_owned(), tone: NoticeTone::Success }]
    );
    assert_eq!(state.transcript.entries()[0].id, ticket.indicator_id);
}

#[test]
fn submit_success_uses_server_message() {
    let reply = SubmitPathResponse { message: Some("Using cached chunks".to_owned()), ..SubmitPathResponse::default() };
    assert_eq!(submit_success_text(&reply), "✅ Using cached chunks");
}

#[test]
fn submit_success_reports_chunk_count() {
    let counted = SubmitPathResponse { chunk_count: Some(12), ..SubmitPathResponse::default() };
    assert_eq!(submit_success_text(&counted), "✅ PDF processed successfully! (12 chunks indexed)");

    let both = SubmitPathResponse {
        message: Some("PDF processed".to_owned()),
        chunk_count: Some(3),
        ..SubmitPathResponse::default()
    };
    assert_eq!(submit_success_text(&both), "✅ PDF processed (3 chunks indexed)");
}

#[test]
fn submit_failure_reenables_trigger_and_keeps_questions_disabled() {
    let mut state = selected();
    let ticket = state.begin_submit().unwrap();
    let err = backend(
        404,
        ErrorBody {
            message: Some("PDF not found".to_owned()),
            suggestion: Some("Please verify the PDF exists in GCS".to_owned()),
            ..ErrorBody::default()
        },
    );
    state.finish_submit(ticket, Err(err));

    assert!(!state.submitting);
    assert!(state.can_submit());
    assert!(!state.can_ask());
    assert_eq!(
        bodies(&state),
        vec![EntryBody::Notice {
            text: "❌ PDF not found\nPlease verify the PDF exists in GCS".to_owned(),
            tone: NoticeTone::Error,
        }]
    );
}

#[test]
fn submit_failure_texts_fall_back() {
    assert_eq!(submit_failure_text(&backend(500, ErrorBody::default())), "❌ Error processing PDF");
    assert_eq!(submit_failure_text(&ApiError::Transport("x".to_owned())), "❌ Failed to process PDF");
    assert_eq!(submit_failure_text(&ApiError::Decode("x".to_owned())), "❌ Failed to process PDF");
}

#[test]
fn submit_reply_for_stale_selection_does_not_activate() {
    let mut state = selected();
    let ticket = state.begin_submit().unwrap();
    state.select(Stage::Chapter, "Chapter 5").unwrap();
    state.finish_submit(ticket.clone(), Ok(SubmitPathResponse::default()));
    assert!(!state.submitting);
    assert!(state.active_path.is_none());
    assert_eq!(
        bodies(&state),
        vec![
            EntryBody::Notice { text: "✅ PDF processed successfully!".to_owned(), tone: NoticeTone::Success },
            EntryBody::Notice { text: STALE_SUBMIT_NOTICE.to_owned(), tone: NoticeTone::Info },
        ]
    );
    assert_eq!(state.transcript.entries()[0].id, ticket.indicator_id);
}

// =============================================================
// Asking
// =============================================================

#[test]
fn blank_input_records_nothing() {
    let mut state = ready();
    let before = state.transcript.len();
    assert!(state.begin_ask("", now()).is_none());
    assert!(state.begin_ask("   \n\t", now()).is_none());
    assert_eq!(state.transcript.len(), before);
    assert!(!state.asking);
}

#[test]
fn asking_requires_active_path() {
    let mut state = selected();
    assert!(state.begin_ask("What is photosynthesis?", now()).is_none());
    assert!(state.transcript.is_empty());
}

#[test]
fn second_question_is_refused_while_first_in_flight() {
    let mut state = ready();
    let first = state.begin_ask("one", now()).unwrap();
    let len = state.transcript.len();
    assert!(state.begin_ask("two", now()).is_none());
    assert_eq!(state.transcript.len(), len);

    state.finish_ask(first, Ok(AskResponse::default()), now());
    assert!(state.begin_ask("two", now()).is_some());
}

#[test]
fn begin_ask_echoes_trimmed_question_then_indicator() {
    let mut state = ready();
    let ticket = state.begin_ask("  What is photosynthesis?  ", now()).unwrap();
    assert_eq!(ticket.question, "What is photosynthesis?");
    assert_eq!(ticket.path, "gs://rag-project-storagebucket/NCERT/Class 10/Science/Chapter_3");

    let entries = state.transcript.entries();
    let last_two = &entries[entries.len() - 2..];
    match &last_two[0].body {
        EntryBody::Message(m) => {
            assert_eq!(m.sender, Sender::User);
            assert_eq!(m.content, "What is photosynthesis?");
            assert_eq!(m.timestamp, now());
        }
        other => panic!("expected user message, got {other:?}"),
    }
    assert_eq!(last_two[1].id, ticket.indicator_id);
}

#[test]
fn answer_removes_indicator_and_appends_bot_reply_with_debug() {
    let mut state = ready();
    let ticket = state.begin_ask("What is photosynthesis?", now()).unwrap();
    let debug = DebugInfo {
        question: "What is photosynthesis?".to_owned(),
        top_chunks: vec![ScoredChunk { score: 0.87, text: "Plants use light".to_owned() }],
        context_used: Some("Plants use light".to_owned()),
    };
    let reply = AskResponse { answer: Some("Plants convert light to energy.".to_owned()), debug: Some(debug.clone()) };
    state.finish_ask(ticket, Ok(reply), now());

    assert!(!state.asking);
    assert!(!state.transcript.has_pending_indicator());
    let tail: Vec<EntryBody> = bodies(&state).into_iter().rev().take(2).collect();
    assert_eq!(tail[0], EntryBody::Debug(debug));
    match &tail[1] {
        EntryBody::Message(m) => {
            assert_eq!(m.sender, Sender::Bot);
            assert_eq!(m.content, "Plants convert light to energy.");
        }
        other => panic!("expected bot message, got {other:?}"),
    }
}

#[test]
fn missing_answer_uses_fallback() {
    let mut state = ready();
    let ticket = state.begin_ask("?", now()).unwrap();
    state.finish_ask(ticket, Ok(AskResponse { answer: Some(String::new()), debug: None }), now());
    let last = state.transcript.messages().last().unwrap();
    assert_eq!(last.content, NO_ANSWER_FALLBACK);
}

#[test]
fn backend_error_is_shown_as_bot_reply() {
    let mut state = ready();
    let ticket = state.begin_ask("q", now()).unwrap();
    let err = backend(
        404,
        ErrorBody {
            error: Some("Chunks not found".to_owned()),
            solution: Some("Submit the PDF path first".to_owned()),
            ..ErrorBody::default()
        },
    );
    state.finish_ask(ticket, Err(err), now());

    assert!(!state.asking);
    assert!(!state.transcript.has_pending_indicator());
    let last = state.transcript.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.content, "Chunks not found\nSubmit the PDF path first");
}

#[test]
fn backend_error_debug_is_rendered() {
    let mut state = ready();
    let ticket = state.begin_ask("q", now()).unwrap();
    let debug = DebugInfo { question: "q".to_owned(), ..DebugInfo::default() };
    let err = backend(
        404,
        ErrorBody { error: Some("No relevant context found".to_owned()), debug: Some(debug.clone()), ..ErrorBody::default() },
    );
    state.finish_ask(ticket, Err(err), now());
    assert_eq!(bodies(&state).last(), Some(&EntryBody::Debug(debug)));
}

#[test]
fn transport_error_uses_generic_reply() {
    let mut state = ready();
    let ticket = state.begin_ask("q", now()).unwrap();
    state.finish_ask(ticket, Err(ApiError::Transport("Failed to fetch".to_owned())), now());
    assert_eq!(state.transcript.messages().last().unwrap().content, TRANSPORT_FAILED_MESSAGE);
    assert_eq!(ask_failure_text(&backend(500, ErrorBody::default())), ASK_FAILED_FALLBACK);
}

#[test]
fn late_answer_after_selection_change_is_discarded() {
    let mut state = ready();
    let ticket = state.begin_ask("q", now()).unwrap();
    state.select(Stage::Subject, "Mathematics").unwrap();
    state.finish_ask(ticket, Ok(AskResponse { answer: Some("stale".to_owned()), debug: None }), now());

    assert!(!state.asking);
    assert!(!state.transcript.has_pending_indicator());
    assert!(state.transcript.messages().all(|m| m.content != "stale"));
    assert_eq!(
        bodies(&state).last(),
        Some(&EntryBody::Notice { text: STALE_ANSWER_NOTICE.to_owned(), tone: NoticeTone::Info })
    );
}

// =============================================================
// End to end
// =============================================================

#[test]
fn select_submit_ask_produces_ordered_transcript() {
    let mut state = ChatState::default();
    state.select(Stage::Board, "NCERT").unwrap();
    state.select(Stage::Class, "Class 10").unwrap();
    state.select(Stage::Subject, "Science").unwrap();
    state.select(Stage::Chapter, "Chapter 3").unwrap();

    let submit = state.begin_submit().unwrap();
    let reply = crate::net::api::classify_submit(&crate::net::api::Reply::new(200, r#"{"status":"success"}"#));
    state.finish_submit(submit, reply);
    assert!(state.can_ask());

    let ask = state.begin_ask("What is photosynthesis?", now()).unwrap();
    let answer = crate::net::api::classify_ask(&crate::net::api::Reply::new(200, r#"{"answer":"It is how plants make food."}"#));
    state.finish_ask(ask, answer, now());

    let messages: Vec<(Sender, &str)> = state.transcript.messages().map(|m| (m.sender, m.content.as_str())).collect();
    assert_eq!(
        messages,
        vec![(Sender::User, "What is photosynthesis?"), (Sender::Bot, "It is how plants make food.")]
    );
    assert!(matches!(
        state.transcript.entries()[0].body,
        EntryBody::Notice { tone: NoticeTone::Success, .. }
    ));
}
