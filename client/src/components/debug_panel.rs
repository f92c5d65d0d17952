//! Collapsible retrieval diagnostics attached to an answer.

use leptos::prelude::*;

use crate::net::types::DebugInfo;
use crate::util::markdown::format_score;

#[component]
pub fn DebugPanel(info: DebugInfo) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let toggle_label = move || if expanded.get() { "Hide Debug Info ▲" } else { "Show Debug Info ▼" };

    let DebugInfo { question, top_chunks, context_used } = info;

    view! {
        <div class="message debug-info">
            <button class="debug-toggle" on:click=move |_| expanded.update(|open| *open = !*open)>
                {toggle_label}
            </button>
            <div class="debug-content" class:hidden=move || !expanded.get()>
                <h4>"Debug Information"</h4>
                <p>
                    <strong>"Question: "</strong>
                    {question}
                </p>

                <h5>"Top Matching Chunks:"</h5>
                <ol class="debug-chunks">
                    {top_chunks
                        .into_iter()
                        .map(|chunk| {
                            view! {
                                <li>
                                    <p>
                                        <strong>"Score: "</strong>
                                        {format_score(chunk.score)}
                                    </p>
                                    <p>{chunk.text}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>

                {context_used
                    .map(|context| {
                        view! {
                            <h5>"Context Used:"</h5>
                            <div class="context-preview">{context}</div>
                        }
                    })}
            </div>
        </div>
    }
}
