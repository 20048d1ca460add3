use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use tui_input::backend::crossterm::EventHandler;
use tui_input::{Input, InputRequest};

use crate::config::NotesConfig;
use crate::notes::{Note, NoteDraft, NoteId, NoteStyle, NotesBoard, NotesView};
use crate::ui::{NotesLayout, NotesTarget, draw_notes};

use super::{Screen, WidgetKind, left_click};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotesField {
    #[default]
    Text,
    Color,
    Size,
}

impl NotesField {
    pub const ALL: [Self; 3] = [Self::Text, Self::Color, Self::Size];

    pub fn title(self) -> &'static str {
        match self {
            Self::Text => "note",
            Self::Color => "color",
            Self::Size => "size",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Text => Self::Color,
            Self::Color => Self::Size,
            Self::Size => Self::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Text => Self::Size,
            Self::Color => Self::Text,
            Self::Size => Self::Color,
        }
    }

    fn styles_draft(self) -> bool {
        matches!(self, Self::Color | Self::Size)
    }
}

#[derive(Debug, Default)]
pub struct NotesSurface {
    text: Input,
    color: Input,
    size: Input,
    focus: NotesField,
    notes: Vec<Note>,
    draft_style: NoteStyle,
    alert: Option<String>,
}

impl NotesSurface {
    pub fn input(&self, field: NotesField) -> &Input {
        match field {
            NotesField::Text => &self.text,
            NotesField::Color => &self.color,
            NotesField::Size => &self.size,
        }
    }

    fn input_mut(&mut self, field: NotesField) -> &mut Input {
        match field {
            NotesField::Text => &mut self.text,
            NotesField::Color => &mut self.color,
            NotesField::Size => &mut self.size,
        }
    }

    pub fn focus(&self) -> NotesField {
        self.focus
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft_style(&self) -> NoteStyle {
        self.draft_style
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }
}

impl NotesView for NotesSurface {
    fn draft(&self) -> NoteDraft {
        NoteDraft {
            text: self.text.value().to_string(),
            color: self.color.value().to_string(),
            size: self.size.value().to_string(),
        }
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
        self.text = Input::new(text.to_string());
    }

    fn set_draft_style(&mut self, style: NoteStyle) {
        self.draft_style = style;
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

pub struct NotesScreen {
    board: NotesBoard,
    surface: NotesSurface,
}

impl NotesScreen {
    pub fn from_config(config: &NotesConfig) -> Self {
        let surface = NotesSurface {
            color: Input::new(config.default_color.clone()),
            size: Input::new(config.default_size.to_string()),
            ..NotesSurface::default()
        };
        Self {
            board: NotesBoard::default(),
            surface,
        }
    }

    pub fn surface(&self) -> &NotesSurface {
        &self.surface
    }

    fn add(&mut self) {
        // An empty draft raises the alert on the surface; nothing else to do.
        let _ = self.board.add(&mut self.surface);
    }

    /// Moves focus, restyling the draft when leaving the color or size field.
    fn focus(&mut self, field: NotesField) {
        let previous = self.surface.focus;
        if previous == field {
            return;
        }
        if previous.styles_draft() {
            self.board.restyle_draft(&mut self.surface);
        }
        self.surface.focus = field;
    }

    fn handle_click(&mut self, column: u16, row: u16, area: Rect) -> bool {
        let layout = NotesLayout::compute(area, self.surface.notes.len(), false);
        match layout.hit(column, row) {
            Some(NotesTarget::Field(field)) => {
                self.focus(field);
                true
            }
            Some(NotesTarget::Add) => {
                self.add();
                true
            }
            Some(NotesTarget::Close(idx)) => {
                let Some(id) = self.surface.notes.get(idx).map(|note| note.id) else {
                    return false;
                };
                self.board.close(&mut self.surface, id)
            }
            None => false,
        }
    }

    fn handle_key(&mut self, event: &Event, code: KeyCode) -> bool {
        match code {
            KeyCode::Tab => {
                self.focus(self.surface.focus.next());
                true
            }
            KeyCode::BackTab => {
                self.focus(self.surface.focus.prev());
                true
            }
            KeyCode::Enter if self.surface.focus == NotesField::Text => {
                self.add();
                true
            }
            KeyCode::Enter => {
                self.board.restyle_draft(&mut self.surface);
                true
            }
            _ => {
                let focus = self.surface.focus;
                self.surface.input_mut(focus).handle_event(event).is_some()
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let focus = self.surface.focus;
        let input = self.surface.input_mut(focus);
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            input.handle(InputRequest::InsertChar(ch));
        }
    }
}

impl Screen for NotesScreen {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Notes
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        let click = left_click(event);
        if self.surface.alert.is_some() {
            let dismiss = click.is_some()
                || matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press);
            if dismiss {
                self.surface.alert = None;
            }
            return dismiss;
        }

        if let Some((column, row)) = click {
            return self.handle_click(column, row, area);
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(event, key.code),
            Event::Paste(text) => {
                self.handle_paste(text);
                true
            }
            _ => false,
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        draw_notes(frame, area, &self.surface);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode};
    use ratatui::layout::Rect;
    use ratatui::style::{Color, Modifier};

    use crate::config::NotesConfig;
    use crate::notes::EMPTY_NOTE_ALERT;
    use crate::screen::Screen;
    use crate::screen::test_events::{click, key, typed};
    use crate::ui::NotesLayout;

    use super::{NotesField, NotesScreen};

    const AREA: Rect = Rect::new(0, 0, 80, 24);

    fn screen() -> NotesScreen {
        NotesScreen::from_config(&NotesConfig::default())
    }

    fn send_all(screen: &mut NotesScreen, events: &[Event]) {
        for event in events {
            screen.handle_event(event, AREA);
        }
    }

    fn texts(screen: &NotesScreen) -> Vec<&str> {
        screen
            .surface()
            .notes()
            .iter()
            .map(|note| note.text.as_str())
            .collect()
    }

    #[test]
    fn draft_inputs_start_from_config() {
        let screen = screen();
        let surface = screen.surface();
        assert_eq!(surface.input(NotesField::Color).value(), "#f15025");
        assert_eq!(surface.input(NotesField::Size).value(), "16");
        assert_eq!(surface.focus(), NotesField::Text);
        assert!(surface.notes().is_empty());
    }

    #[test]
    fn enter_adds_a_note_with_the_draft_style() {
        let mut screen = screen();
        send_all(&mut screen, &typed("water plants"));
        screen.handle_event(&key(KeyCode::Enter), AREA);

        assert_eq!(texts(&screen), vec!["water plants"]);
        let note = &screen.surface().notes()[0];
        assert_eq!(note.style.color, Some(Color::Rgb(0xf1, 0x50, 0x25)));
        assert_eq!(note.style.size_px, Some(16));
        assert_eq!(screen.surface().input(NotesField::Text).value(), "");
    }

    #[test]
    fn empty_draft_shows_alert_until_dismissed() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Enter), AREA);
        assert_eq!(screen.surface().alert(), Some(EMPTY_NOTE_ALERT));
        assert!(screen.surface().notes().is_empty());

        // The dismissing key is swallowed.
        assert!(screen.handle_event(&key(KeyCode::Char('x')), AREA));
        assert_eq!(screen.surface().alert(), None);
        assert_eq!(screen.surface().input(NotesField::Text).value(), "");
    }

    #[test]
    fn leaving_the_size_field_restyles_the_draft() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::BackTab), AREA);
        assert_eq!(screen.surface().focus(), NotesField::Size);
        send_all(&mut screen, &typed("8"));
        assert_eq!(screen.surface().input(NotesField::Size).value(), "168");

        screen.handle_event(&key(KeyCode::Tab), AREA);
        assert_eq!(screen.surface().focus(), NotesField::Text);
        assert_eq!(screen.surface().draft_style().size_px, Some(168));
    }

    #[test]
    fn enter_in_the_color_field_restyles_without_adding() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::Tab), AREA);
        for _ in 0..7 {
            screen.handle_event(&key(KeyCode::Backspace), AREA);
        }
        send_all(&mut screen, &typed("red"));
        screen.handle_event(&key(KeyCode::Enter), AREA);

        let style = screen.surface().draft_style();
        assert_eq!(style.color, Some(Color::Rgb(0xff, 0, 0)));
        assert!(screen.surface().notes().is_empty());
        assert_eq!(screen.surface().alert(), None);
    }

    #[test]
    fn add_button_and_close_controls_respond_to_clicks() {
        let mut screen = screen();
        let layout = NotesLayout::compute(AREA, 0, false);
        send_all(&mut screen, &typed("one"));
        screen.handle_event(&click(layout.add.x + 1, layout.add.y + 1), AREA);
        send_all(&mut screen, &typed("two"));
        screen.handle_event(&click(layout.add.x + 1, layout.add.y + 1), AREA);
        assert_eq!(texts(&screen), vec!["one", "two"]);

        let close = NotesLayout::compute(AREA, 2, false).cards[0].close;
        assert!(screen.handle_event(&click(close.x, close.y), AREA));
        assert_eq!(texts(&screen), vec!["two"]);
    }

    #[test]
    fn clicking_a_field_moves_focus() {
        let mut screen = screen();
        let layout = NotesLayout::compute(AREA, 0, false);
        assert!(screen.handle_event(&click(layout.size.x + 1, layout.size.y + 1), AREA));
        assert_eq!(screen.surface().focus(), NotesField::Size);
    }

    #[test]
    fn paste_goes_to_the_focused_field() {
        let mut screen = screen();
        screen.handle_event(&Event::Paste("a\tb".to_string()), AREA);
        assert_eq!(screen.surface().input(NotesField::Text).value(), "ab");
    }

    #[test]
    fn large_size_renders_bold_text() {
        let mut screen = screen();
        screen.handle_event(&key(KeyCode::BackTab), AREA);
        screen.handle_event(&key(KeyCode::Backspace), AREA);
        screen.handle_event(&key(KeyCode::Backspace), AREA);
        send_all(&mut screen, &typed("24"));
        screen.handle_event(&key(KeyCode::Enter), AREA);

        let style = crate::ui::note_text_style(screen.surface().draft_style());
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
