use ratatui::style::Color;

use crate::color::parse_color;

pub const EMPTY_NOTE_ALERT: &str = "Please Enter a note.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub u64);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    #[error("Please Enter a note.")]
    EmptyText,
}

/// Raw contents of the draft form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub text: String,
    pub color: String,
    pub size: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteStyle {
    pub color: Option<Color>,
    pub size_px: Option<u16>,
}

impl NoteStyle {
    /// Parses the draft's color and size inputs. A value that does not parse
    /// leaves that part of the style unset.
    pub fn from_inputs(color: &str, size: &str) -> Self {
        Self {
            color: parse_color(color),
            size_px: parse_size(size),
        }
    }

    pub fn from_draft(draft: &NoteDraft) -> Self {
        Self::from_inputs(&draft.color, &draft.size)
    }
}

fn parse_size(raw: &str) -> Option<u16> {
    let raw = raw.trim();
    let digits = raw.strip_suffix("px").unwrap_or(raw);
    digits.trim().parse::<u16>().ok().filter(|size| *size > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub style: NoteStyle,
}
