use super::types::{EMPTY_NOTE_ALERT, Note, NoteDraft, NoteError, NoteId, NoteStyle};

pub trait NotesView {
    fn draft(&self) -> NoteDraft;
    fn append_note(&mut self, note: Note);
    /// Returns false when no note with `id` is shown.
    fn remove_note(&mut self, id: NoteId) -> bool;
    fn set_draft_text(&mut self, text: &str);
    fn set_draft_style(&mut self, style: NoteStyle);
    /// Shows a blocking message the user has to dismiss.
    fn alert(&mut self, message: &str);
}

/// Hands out note ids and applies the board's add/close/restyle rules.
#[derive(Debug)]
pub struct NotesBoard {
    next_id: u64,
}

impl Default for NotesBoard {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl NotesBoard {
    /// Appends the draft as a note, or alerts and discards it when the text
    /// is empty. Whitespace-only text counts as a note.
    pub fn add(&mut self, view: &mut impl NotesView) -> Result<NoteId, NoteError> {
        let draft = view.draft();
        if draft.text.is_empty() {
            log::debug!("notes: rejected empty draft");
            view.alert(EMPTY_NOTE_ALERT);
            return Err(NoteError::EmptyText);
        }

        let id = self.take_id();
        let note = Note {
            id,
            style: NoteStyle::from_draft(&draft),
            text: draft.text,
        };
        log::debug!("notes: added {:?} style={:?}", note.id, note.style);
        view.append_note(note);
        view.set_draft_text("");
        Ok(id)
    }

    pub fn close(&self, view: &mut impl NotesView, id: NoteId) -> bool {
        let removed = view.remove_note(id);
        log::debug!("notes: close {id:?} removed={removed}");
        removed
    }

    /// Applies the draft's current color and size to the draft text field.
    pub fn restyle_draft(&self, view: &mut impl NotesView) -> NoteStyle {
        let style = NoteStyle::from_draft(&view.draft());
        view.set_draft_style(style);
        style
    }

    fn take_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        NoteId(id)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use crate::notes::{EMPTY_NOTE_ALERT, Note, NoteDraft, NoteError, NoteId, NoteStyle};

    use super::{NotesBoard, NotesView};

    #[derive(Default)]
    struct Page {
        draft: NoteDraft,
        notes: Vec<Note>,
        draft_style: NoteStyle,
        alerts: Vec<String>,
    }

    impl NotesView for Page {
        fn draft(&self) -> NoteDraft {
            self.draft.clone()
        }

        fn append_note(&mut self, note: Note) {
            self.notes.push(note);
        }

        fn remove_note(&mut self, id: NoteId) -> bool {
            let before = self.notes.len();
            self.notes.retain(|note| note.id != id);
            self.notes.len() != before
        }

        fn set_draft_text(&mut self, text: &str) {
            self.draft.text = text.to_string();
        }

        fn set_draft_style(&mut self, style: NoteStyle) {
            self.draft_style = style;
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    fn page_with(text: &str) -> Page {
        Page {
            draft: NoteDraft {
                text: text.to_string(),
                color: "#f15025".to_string(),
                size: "20".to_string(),
            },
            ..Page::default()
        }
    }

    #[test]
    fn empty_draft_alerts_and_adds_nothing() {
        let mut board = NotesBoard::default();
        let mut page = page_with("");

        assert_eq!(board.add(&mut page), Err(NoteError::EmptyText));
        assert_eq!(page.alerts, vec![EMPTY_NOTE_ALERT.to_string()]);
        assert!(page.notes.is_empty());
    }

    #[test]
    fn add_appends_styled_note_and_clears_draft_text() {
        let mut board = NotesBoard::default();
        let mut page = page_with("buy milk");

        let id = board.add(&mut page).expect("note should be added");

        assert_eq!(page.notes.len(), 1);
        assert_eq!(page.notes[0].id, id);
        assert_eq!(page.notes[0].text, "buy milk");
        assert_eq!(page.notes[0].style.color, Some(Color::Rgb(0xf1, 0x50, 0x25)));
        assert_eq!(page.notes[0].style.size_px, Some(20));
        assert_eq!(page.draft.text, "");
        assert_eq!(page.draft.color, "#f15025");
        assert!(page.alerts.is_empty());
    }

    #[test]
    fn markup_is_kept_as_literal_text() {
        let mut board = NotesBoard::default();
        let mut page = page_with("<b>hi</b>");
        board.add(&mut page).expect("note should be added");
        assert_eq!(page.notes[0].text, "<b>hi</b>");
    }

    #[test]
    fn close_removes_only_that_note() {
        let mut board = NotesBoard::default();
        let mut page = page_with("one");
        let first = board.add(&mut page).expect("first");
        page.draft.text = "two".to_string();
        let second = board.add(&mut page).expect("second");
        assert_ne!(first, second);

        assert!(board.close(&mut page, first));
        assert!(!board.close(&mut page, first));
        let left: Vec<&str> = page.notes.iter().map(|note| note.text.as_str()).collect();
        assert_eq!(left, vec!["two"]);
    }

    #[test]
    fn restyle_applies_current_inputs_to_draft() {
        let board = NotesBoard::default();
        let mut page = page_with("draft");
        page.draft.color = "rgb(1, 2, 3)".to_string();
        page.draft.size = "bogus".to_string();

        let style = board.restyle_draft(&mut page);

        assert_eq!(style.color, Some(Color::Rgb(1, 2, 3)));
        assert_eq!(style.size_px, None);
        assert_eq!(page.draft_style, style);
    }
}
