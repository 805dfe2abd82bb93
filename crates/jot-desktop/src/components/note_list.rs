//! Note list component

use dioxus::prelude::*;

use jot_core::util::unix_millis_now;
use jot_core::view::NoteListView;

use super::{EmptyState, NoteCard};
use crate::state::AppState;

/// Notes newest first, or the empty-state placeholder
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let view = NoteListView::from_notes(state.notes.read().notes(), unix_millis_now());

    rsx! {
        section {
            class: "notes-section",

            {
                match view {
                    NoteListView::Empty(empty) => rsx! {
                        EmptyState { view: empty }
                    },
                    NoteListView::Cards(cards) => rsx! {
                        ul {
                            class: "notes-grid",
                            style: "margin: 0; padding: 0; display: flex; flex-direction: column; gap: 12px;",

                            for card in cards {
                                {
                                    let key = card.id.to_string();
                                    let note_id = card.id.clone();
                                    rsx! {
                                        NoteCard {
                                            key: "{key}",
                                            card,
                                            ondelete: move |_| state.delete_note(&note_id),
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
