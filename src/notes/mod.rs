mod board;
mod types;

pub use board::{NotesBoard, NotesView};
pub use types::{EMPTY_NOTE_ALERT, Note, NoteDraft, NoteError, NoteId, NoteStyle};
