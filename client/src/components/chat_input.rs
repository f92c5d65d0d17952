//! Question input row.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Text input and send button. Disabled until a path has been submitted
/// successfully; focuses itself as soon as it becomes usable.
#[component]
pub fn ChatInput(input: RwSignal<String>, on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let enabled = move || chat.with(|c| c.active_path.is_some());
    let can_send = move || chat.with(ChatState::can_ask) && !input.with(|text| text.trim().is_empty());

    Effect::new(move || {
        if enabled() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div id="chat-input" class="chat-input">
            <input
                id="userQuestion"
                class="chat-input__field"
                type="text"
                placeholder=move || {
                    if enabled() { "Ask a question about this chapter..." } else { "Submit a chapter first" }
                }
                node_ref=input_ref
                disabled=move || !enabled()
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                id="sendButton"
                class="btn btn--primary chat-input__send"
                on:click=move |_| on_send.run(())
                disabled=move || !can_send()
            >
                "Send"
            </button>
        </div>
    }
}
