//! Terminal-side surfaces for the widgets.
//!
//! Each screen owns one widget plus the surface that implements the widget's
//! view trait, turns crossterm events into widget operations, and draws the
//! surface.

mod counter;
mod flipper;
mod kind;
mod notes;
mod typeahead;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;

pub use counter::{CounterScreen, CounterSurface, ToneColors};
pub use flipper::{FlipperScreen, FlipperSurface};
pub use kind::WidgetKind;
pub use notes::{NotesField, NotesScreen, NotesSurface};
pub use typeahead::{TypeaheadScreen, TypeaheadSurface};

pub trait Screen {
    fn kind(&self) -> WidgetKind;

    /// Handles one terminal event against the screen drawn in `area`.
    /// Returns whether anything visible changed.
    fn handle_event(&mut self, event: &Event, area: Rect) -> bool;

    fn draw(&self, frame: &mut Frame<'_>, area: Rect);
}

/// Cell position of a left-button press, the terminal's "click".
pub(crate) fn left_click(event: &Event) -> Option<(u16, u16)> {
    match event {
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some((mouse.column, mouse.row))
        }
        _ => None,
    }
}
