//! Main application component

use dioxus::prelude::*;

use jot_core::{Draft, NotesStore};

use crate::config::app_config;
use crate::services::open_note_repository;
use crate::state::AppState;
use crate::theme::{palette, UI_STYLES};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = app_config();

    // State signals
    let notes = use_signal(|| NotesStore::load(open_note_repository(&config.data_dir)));
    let draft = use_signal(Draft::new);
    let theme = use_signal(|| config.theme);

    use_context_provider(|| AppState {
        notes,
        draft,
        theme,
    });

    let current_theme = theme();
    let colors = palette(current_theme);
    let theme_attr = current_theme.as_attr();

    rsx! {
        style { "{UI_STYLES}" }

        div {
            class: "app-root",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                transition: background 0.2s, color 0.2s;
            ",
            Home {}
        }
    }
}
