//! Main widget page: path selector, transcript, question input and history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place that turns user intent into network calls. Each
//! handler runs a `ChatState::begin_*` transition synchronously, spawns the
//! request, and applies the reply with the matching `finish_*`. Nothing is
//! allowed to escape a handler: every failure ends up in the transcript or the
//! console.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::history_sidebar::HistorySidebar;
use crate::components::path_selector::PathSelector;
use crate::components::transcript::Transcript;
use crate::state::auth::AuthState;
use crate::state::chat::{ChatState, INCOMPLETE_SELECTION_ALERT, SubmitRejected};
use crate::util::{auth as auth_util, browser, clock};

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    // Load the signed-in user once; any failure leaves for the login page.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => auth.update(|a| {
                    a.user = Some(user);
                    a.loading = false;
                }),
                Err(e) => {
                    leptos::logging::error!("loading user failed: {e}");
                    auth_util::redirect_to_login();
                }
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    let on_submit = Callback::new(move |()| {
        let Some(started) = chat.try_update(ChatState::begin_submit) else {
            return;
        };
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(SubmitRejected::Incomplete) => {
                browser::alert(INCOMPLETE_SELECTION_ALERT);
                return;
            }
            Err(SubmitRejected::Busy) => return,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_path(&ticket.path).await;
            if let Err(e) = &result {
                leptos::logging::error!("submit-path failed for {}: {e}", ticket.path);
            }
            chat.update(|c| c.finish_submit(ticket, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    });

    let on_send = Callback::new(move |()| {
        let text = input.get_untracked();
        if text.trim().is_empty() || !chat.with_untracked(ChatState::can_ask) {
            return;
        }
        let now = clock::now();
        let Some(Some(ticket)) = chat.try_update(|c| c.begin_ask(&text, now)) else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::ask(&ticket.path, &ticket.question).await;
            if let Err(e) = &result {
                leptos::logging::error!("ask failed: {e}");
            }
            chat.update(|c| c.finish_ask(ticket, result, clock::now()));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    });

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async {
            match crate::net::api::logout().await {
                Ok(()) => auth_util::redirect_to_login(),
                Err(e) => leptos::logging::error!("logout failed: {e}"),
            }
        });
    });

    view! {
        <div class="chat-page">
            <HistorySidebar on_logout=on_logout/>
            <main class="chat-page__main">
                <PathSelector on_submit=on_submit/>
                <Transcript/>
                <ChatInput input=input on_send=on_send/>
            </main>
        </div>
    }
}
