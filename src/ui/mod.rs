mod chrome;
mod counter;
mod flipper;
mod input_line;
mod layout;
mod notes;
mod text;
mod typeahead;

pub use chrome::draw_chrome;
pub use counter::{CounterLayout, draw_counter};
pub use flipper::{FlipperLayout, draw_flipper};
pub use layout::{UiLayout, split_layout};
pub use notes::{NoteCardRects, NotesLayout, NotesTarget, draw_notes, note_text_style};
pub use typeahead::{TypeaheadLayout, TypeaheadTarget, draw_typeahead};
