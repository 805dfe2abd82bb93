//! Placeholder for an empty note list

use dioxus::prelude::*;

use jot_core::view::EmptyStateView;

use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn EmptyState(view: EmptyStateView) -> Element {
    let state = use_context::<AppState>();
    let colors = palette((state.theme)());

    rsx! {
        div {
            class: "empty",
            style: "
                padding: 48px 20px;
                text-align: center;
                border: 1px dashed {colors.border};
                border-radius: 12px;
                color: {colors.text_secondary};
            ",
            div {
                class: "empty-graphic",
                "aria-hidden": "true",
                style: "font-size: 40px; margin-bottom: 8px;",
                "{view.icon}"
            }
            p {
                class: "empty-title",
                style: "margin: 0 0 4px 0; font-size: 16px; font-weight: 600; color: {colors.text_primary};",
                "{view.title}"
            }
            p {
                class: "empty-subtitle",
                style: "margin: 0; font-size: 13px;",
                "{view.subtitle}"
            }
        }
    }
}
