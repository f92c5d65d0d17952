//! Sidebar with the signed-in user, day-grouped question history and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::history::group_history;
use crate::util::{browser, clock};

#[component]
pub fn HistorySidebar(on_logout: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    // "Today" is evaluated at render time, so a long-lived tab regroups on the
    // next message after midnight.
    let groups = move || {
        let today = clock::now().date();
        chat.with(|c| group_history(c.transcript.messages(), today))
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__user">
                <span id="user-name">
                    {move || auth.with(|a| if a.loading { "Loading...".to_owned() } else { a.display_name() })}
                </span>
            </div>

            <div id="history-container" class="sidebar__history">
                {move || {
                    let groups = groups();
                    if groups.is_empty() {
                        return view! { <div class="empty-history">"No chat history yet"</div> }.into_any();
                    }

                    groups
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="history-group">
                                    <h4>{group.bucket.label()}</h4>
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| {
                                            let entry_id = item.entry_id;
                                            view! {
                                                <div
                                                    class="history-item"
                                                    on:click=move |_| browser::scroll_entry_into_view(&entry_id)
                                                >
                                                    <span class="history-time">{item.time}</span>
                                                    <span class="history-content">{item.preview}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <button id="sidebar-logout" class="btn sidebar__logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </aside>
    }
}
