//! Chat transcript: bubbles, processing indicators, notices and debug panels.

use leptos::prelude::*;

use crate::components::debug_panel::DebugPanel;
use crate::state::chat::ChatState;
use crate::state::transcript::{EntryBody, NoticeTone, Sender, TranscriptEntry, entry_dom_id};
use crate::util::markdown::render_markdown_html;

/// Scrollable transcript that follows new entries.
#[component]
pub fn Transcript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let entries = Memo::new(move |_| chat.with(|c| c.transcript.entries().to_vec()));

    Effect::new(move || {
        let _ = entries.with(Vec::len);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Keyed rows: a row is rebuilt only when its entry appears or changes kind,
    // so an opened debug panel stays open.
    view! {
        <div id="chat" class="transcript" node_ref=container_ref>
            <Show when=move || chat.with(|c| c.transcript.is_empty())>
                <div class="transcript__empty">
                    "Choose a board, class, subject and chapter, then submit to start chatting."
                </div>
            </Show>
            <For
                each=move || entries.get()
                key=TranscriptEntry::row_key
                children=|entry| view! { <TranscriptRow entry=entry/> }
            />
        </div>
    }
}

#[component]
fn TranscriptRow(entry: TranscriptEntry) -> impl IntoView {
    let dom_id = entry_dom_id(&entry.id);

    match entry.body {
        EntryBody::Message(message) => {
            let sender = message.sender.css_class();
            let bubble = match message.sender {
                Sender::User => view! { <div class=format!("bubble {sender}")>{message.content}</div> }.into_any(),
                Sender::Bot => {
                    let rendered = render_markdown_html(&message.content);
                    view! { <div class=format!("bubble {sender} bubble--markdown") inner_html=rendered></div> }
                        .into_any()
                }
            };
            view! {
                <div id=dom_id class=format!("message {sender}")>
                    {bubble}
                </div>
            }
            .into_any()
        }
        EntryBody::Processing { label } => view! {
            <div id=dom_id class="message bot processing">
                <div class="bubble bot">
                    <span class="processing-text">{label}</span>
                    <span class="processing-dots">
                        <span class="dot">"."</span>
                        <span class="dot">"."</span>
                        <span class="dot">"."</span>
                    </span>
                </div>
            </div>
        }
        .into_any(),
        EntryBody::Notice { text, tone } => {
            let tone_class = match tone {
                NoticeTone::Success => "notice--success",
                NoticeTone::Error => "notice--error",
                NoticeTone::Info => "notice--info",
            };
            view! {
                <div id=dom_id class=format!("message bot notice {tone_class}")>
                    <div class="bubble bot">{text}</div>
                </div>
            }
            .into_any()
        }
        EntryBody::Debug(info) => view! {
            <div id=dom_id>
                <DebugPanel info=info/>
            </div>
        }
        .into_any(),
    }
}
