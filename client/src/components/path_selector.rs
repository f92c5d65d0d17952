//! Cascading board → class → subject → chapter picker with submit trigger.

use leptos::prelude::*;

use crate::state::catalog;
use crate::state::chat::ChatState;
use crate::state::selection::Stage;

/// All four selector stages plus the submit button.
///
/// Later stages stay hidden until the stage before them has a value; the
/// submit container appears only once the selection is complete.
#[component]
pub fn PathSelector(on_submit: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let complete = move || chat.with(|c| c.selection.is_complete());
    let can_submit = move || chat.with(ChatState::can_submit);

    view! {
        <section class="path-selector">
            {Stage::ALL
                .into_iter()
                .map(|stage| view! { <StageOptions stage=stage/> })
                .collect::<Vec<_>>()}

            <div id="submit-container" class="path-selector__submit" class:hidden=move || !complete()>
                <button
                    id="submitButton"
                    class="btn btn--primary"
                    disabled=move || !can_submit()
                    on:click=move |_| on_submit.run(())
                >
                    "Submit"
                </button>
            </div>
        </section>
    }
}

/// One stage: its prompt and a row of option buttons.
#[component]
fn StageOptions(stage: Stage) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let unlocked = move || chat.with(|c| c.selection.is_unlocked(stage));
    let options = Memo::new(move |_| chat.with(|c| catalog::options_for(stage, &c.selection)));

    view! {
        <div class="path-selector__stage" class:hidden=move || !unlocked()>
            <p class="path-selector__prompt">{stage.prompt()}</p>
            <div class="path-selector__options">
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let value = option.clone();
                            let current = option.clone();
                            let is_selected = move || chat.with(|c| c.selection.value(stage) == current);
                            view! {
                                <button
                                    class="option-button"
                                    class:selected=is_selected
                                    on:click=move |_| {
                                        let value = value.clone();
                                        chat.update(|c| {
                                            if let Err(e) = c.select(stage, value) {
                                                leptos::logging::warn!("selection rejected: {e}");
                                            }
                                        });
                                    }
                                >
                                    {option}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
