//! Header with brand and theme toggle

use dioxus::prelude::*;

use jot_core::view::ThemeToggleView;

use super::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::palette;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let colors = palette(theme);
    let toggle = ThemeToggleView::for_theme(theme);

    rsx! {
        header {
            class: "topbar",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 14px 24px;
                border-bottom: 1px solid {colors.border};
                background: {colors.bg_secondary};
            ",

            div {
                class: "brand",
                style: "display: flex; align-items: center; gap: 10px;",
                span {
                    class: "brand-dot",
                    "aria-hidden": "true",
                    style: "
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: {colors.accent};
                    ",
                }
                h1 {
                    class: "brand-title",
                    style: "margin: 0; font-size: 20px; font-weight: 700;",
                    "Notes"
                }
            }

            Button {
                r#type: "button",
                variant: ButtonVariant::Ghost,
                aria_label: "{toggle.aria_label}",
                onclick: move |_| state.toggle_theme(),
                "{toggle.label}"
            }
        }
    }
}
