//! Note card component

use dioxus::prelude::*;

use jot_core::view::NoteCardView;

use super::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::palette;

/// A single note rendered in the list.
#[component]
pub fn NoteCard(card: NoteCardView, ondelete: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = palette((state.theme)());

    rsx! {
        li {
            class: "note-card",
            style: "
                list-style: none;
                padding: 14px 16px;
                border: 1px solid {colors.border};
                border-radius: 12px;
                background: {colors.bg_secondary};
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",

            div {
                class: "note-text",
                style: "white-space: pre-wrap; word-break: break-word; line-height: 1.5;",
                "{card.text}"
            }

            div {
                class: "note-footer",
                style: "display: flex; align-items: center; justify-content: space-between;",

                time {
                    class: "note-time",
                    datetime: "{card.timestamp_iso}",
                    title: "{card.age}",
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "{card.timestamp}"
                }

                Button {
                    r#type: "button",
                    variant: ButtonVariant::Danger,
                    small: true,
                    aria_label: "Delete note",
                    title: "Delete note",
                    onclick: move |evt| ondelete.call(evt),
                    "Delete"
                }
            }
        }
    }
}
