//! Composer: the new-note input and its Add button

use dioxus::prelude::*;

use jot_core::models::MAX_NOTE_CHARS;
use jot_core::view::ComposerView;

use super::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn Composer() -> Element {
    let mut state = use_context::<AppState>();
    let colors = palette((state.theme)());
    let draft_text = state.draft.read().as_str().to_string();
    let view = ComposerView::from_draft(&state.draft.read());

    rsx! {
        section {
            class: "composer",

            form {
                class: "composer-form",
                style: "display: flex; gap: 8px;",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    state.submit_draft();
                },

                input {
                    class: "ui-input",
                    r#type: "text",
                    "aria-label": "Add a new note",
                    placeholder: "Write a new note...",
                    maxlength: "{MAX_NOTE_CHARS}",
                    autofocus: true,
                    value: "{draft_text}",
                    oninput: move |evt: FormEvent| state.set_draft(evt.value()),
                }

                Button {
                    r#type: "submit",
                    variant: ButtonVariant::Primary,
                    disabled: view.submit_disabled,
                    aria_disabled: "{view.submit_disabled}",
                    title: "{view.submit_hint}",
                    "Add"
                }
            }

            p {
                class: "helper",
                style: "margin: 8px 0 0 0; font-size: 12px; color: {colors.text_secondary};",
                "Your notes are saved locally on this device."
            }
        }
    }
}
