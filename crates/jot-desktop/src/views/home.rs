//! Home view - the single application screen

use dioxus::prelude::*;

use crate::components::{Composer, Footer, Header, NoteList};

/// Header, composer, note list and footer stacked in one column
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; min-height: 100vh;",

            Header {}

            main {
                class: "container",
                style: "
                    flex: 1;
                    width: 100%;
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 24px 16px;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    gap: 24px;
                ",

                Composer {}
                NoteList {}
            }

            Footer {}
        }
    }
}
