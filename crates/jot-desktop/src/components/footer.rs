//! Page footer

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn Footer() -> Element {
    let state = use_context::<AppState>();
    let colors = palette((state.theme)());

    rsx! {
        footer {
            class: "footer",
            style: "
                padding: 16px;
                text-align: center;
                font-size: 12px;
                color: {colors.text_muted};
            ",
            span { "Light, modern, and minimal." }
        }
    }
}
