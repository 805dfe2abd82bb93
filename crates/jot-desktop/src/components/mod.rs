//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod composer;
mod empty_state;
mod footer;
mod header;
mod note_card;
mod note_list;

pub use button::{Button, ButtonVariant};
pub use composer::Composer;
pub use empty_state::EmptyState;
pub use footer::Footer;
pub use header::Header;
pub use note_card::NoteCard;
pub use note_list::NoteList;
