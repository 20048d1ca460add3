use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tui_input::Input;

use crate::notes::NoteStyle;
use crate::screen::{NotesField, NotesSurface};

use super::input_line::build_input_line;
use super::layout::{centered_rect, hits};

const FORM_HEIGHT: u16 = 3;
const COLOR_WIDTH: u16 = 16;
const SIZE_WIDTH: u16 = 10;
const ADD_WIDTH: u16 = 9;
const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 5;
const CARD_GAP: u16 = 1;
const CLOSE_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesTarget {
    Field(NotesField),
    Add,
    /// Close control of the note at this index.
    Close(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteCardRects {
    pub card: Rect,
    pub close: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesLayout {
    pub text: Rect,
    pub color: Rect,
    pub size: Rect,
    pub add: Rect,
    /// Cards for the notes that fit, in note order.
    pub cards: Vec<NoteCardRects>,
    pub alert: Option<Rect>,
}

impl NotesLayout {
    pub fn compute(area: Rect, note_count: usize, alert: bool) -> Self {
        let form_height = FORM_HEIGHT.min(area.height);
        let fixed = COLOR_WIDTH + SIZE_WIDTH + ADD_WIDTH;
        let text_width = area.width.saturating_sub(fixed);
        let mut x = area.x;
        let mut next = |width: u16| {
            let width = width.min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, width, form_height);
            x = x.saturating_add(width);
            rect
        };
        let text = next(text_width);
        let color = next(COLOR_WIDTH);
        let size = next(SIZE_WIDTH);
        let add = next(ADD_WIDTH);

        let top = area.y.saturating_add(form_height + 1);
        let stride_x = CARD_WIDTH + CARD_GAP;
        let stride_y = CARD_HEIGHT + CARD_GAP;
        let columns = usize::from(((area.width + CARD_GAP) / stride_x).max(1));
        let mut cards = Vec::new();
        for idx in 0..note_count {
            let col = (idx % columns) as u16;
            let row = u16::try_from(idx / columns).unwrap_or(u16::MAX);
            let card_x = area.x.saturating_add(col.saturating_mul(stride_x));
            let card_y = top.saturating_add(row.saturating_mul(stride_y));
            if card_y.saturating_add(CARD_HEIGHT) > area.bottom() {
                break;
            }
            let width = CARD_WIDTH.min(area.right().saturating_sub(card_x));
            let card = Rect::new(card_x, card_y, width, CARD_HEIGHT);
            let close = Rect::new(
                card.right().saturating_sub(CLOSE_WIDTH + 1),
                card.y,
                CLOSE_WIDTH.min(width),
                1,
            );
            cards.push(NoteCardRects { card, close });
        }

        let alert = alert.then(|| centered_rect(area, 40, 5));

        Self {
            text,
            color,
            size,
            add,
            cards,
            alert,
        }
    }

    pub fn field(&self, field: NotesField) -> Rect {
        match field {
            NotesField::Text => self.text,
            NotesField::Color => self.color,
            NotesField::Size => self.size,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<NotesTarget> {
        if let Some(idx) = self
            .cards
            .iter()
            .position(|card| hits(card.close, column, row))
        {
            return Some(NotesTarget::Close(idx));
        }
        if hits(self.add, column, row) {
            return Some(NotesTarget::Add);
        }
        NotesField::ALL
            .into_iter()
            .find(|field| hits(self.field(*field), column, row))
            .map(NotesTarget::Field)
    }
}

/// Terminals have a single font size, so the note's pixel size maps to
/// emphasis instead.
pub fn note_text_style(style: NoteStyle) -> Style {
    let mut out = Style::default();
    if let Some(color) = style.color {
        out = out.fg(color);
    }
    match style.size_px {
        Some(size) if size >= 20 => out.add_modifier(Modifier::BOLD),
        Some(size) if size < 12 => out.add_modifier(Modifier::DIM),
        _ => out,
    }
}

pub fn draw_notes(frame: &mut Frame<'_>, area: Rect, surface: &NotesSurface) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = NotesLayout::compute(area, surface.notes().len(), surface.alert().is_some());
    let draft_style = note_text_style(surface.draft_style());
    for field in NotesField::ALL {
        let style = match field {
            NotesField::Text => draft_style,
            NotesField::Color | NotesField::Size => Style::default(),
        };
        draw_field(
            frame,
            layout.field(field),
            field.title(),
            surface.input(field),
            surface.focus() == field,
            style,
        );
    }
    frame.render_widget(
        Paragraph::new("Add")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.add,
    );

    for (note, rects) in surface.notes().iter().zip(&layout.cards) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        if let Some(size) = note.style.size_px {
            block = block.title_bottom(format!(" {size}px "));
        }
        frame.render_widget(
            Paragraph::new(note.text.as_str())
                .style(note_text_style(note.style))
                .wrap(Wrap { trim: false })
                .block(block),
            rects.card,
        );
        frame.render_widget(
            Paragraph::new(" X ").style(Style::default().fg(Color::White).bg(Color::Red)),
            rects.close,
        );
    }

    if let (Some(rect), Some(message)) = (layout.alert, surface.alert()) {
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(" alert ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(
            Paragraph::new(vec![message.into(), "".into(), "press any key".into()])
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White)),
            inner,
        );
    }
}

fn draw_field(
    frame: &mut Frame<'_>,
    rect: Rect,
    title: &str,
    input: &Input,
    focused: bool,
    style: Style,
) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(block, rect);

    let inner = rect.inner(Margin::new(1, 1));
    let line = build_input_line(
        input.value(),
        input.visual_cursor(),
        inner.width as usize,
        focused,
        style,
    );
    frame.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::style::{Color, Modifier};

    use crate::notes::NoteStyle;
    use crate::screen::NotesField;

    use super::{NotesLayout, NotesTarget, note_text_style};

    #[test]
    fn form_fields_share_the_top_row() {
        let layout = NotesLayout::compute(Rect::new(0, 0, 80, 24), 0, false);
        assert_eq!(layout.text, Rect::new(0, 0, 45, 3));
        assert_eq!(layout.color, Rect::new(45, 0, 16, 3));
        assert_eq!(layout.size, Rect::new(61, 0, 10, 3));
        assert_eq!(layout.add, Rect::new(71, 0, 9, 3));
        assert_eq!(layout.alert, None);
    }

    #[test]
    fn cards_flow_left_to_right_then_down() {
        let layout = NotesLayout::compute(Rect::new(0, 0, 80, 24), 4, false);
        let cards: Vec<Rect> = layout.cards.iter().map(|rects| rects.card).collect();
        assert_eq!(
            cards,
            vec![
                Rect::new(0, 4, 26, 5),
                Rect::new(27, 4, 26, 5),
                Rect::new(54, 4, 26, 5),
                Rect::new(0, 10, 26, 5),
            ]
        );
        assert_eq!(layout.cards[0].close, Rect::new(22, 4, 3, 1));
    }

    #[test]
    fn cards_past_the_bottom_are_dropped() {
        let layout = NotesLayout::compute(Rect::new(0, 0, 30, 12), 5, false);
        assert_eq!(layout.cards.len(), 1);
    }

    #[test]
    fn hit_finds_fields_add_and_close_controls() {
        let layout = NotesLayout::compute(Rect::new(0, 0, 80, 24), 2, false);
        assert_eq!(layout.hit(5, 1), Some(NotesTarget::Field(NotesField::Text)));
        assert_eq!(layout.hit(50, 1), Some(NotesTarget::Field(NotesField::Color)));
        assert_eq!(layout.hit(65, 2), Some(NotesTarget::Field(NotesField::Size)));
        assert_eq!(layout.hit(75, 1), Some(NotesTarget::Add));
        assert_eq!(layout.hit(23, 4), Some(NotesTarget::Close(0)));
        assert_eq!(layout.hit(50, 4), Some(NotesTarget::Close(1)));
        assert_eq!(layout.hit(10, 6), None);
    }

    #[test]
    fn note_size_maps_to_emphasis() {
        let big = note_text_style(NoteStyle {
            color: Some(Color::Red),
            size_px: Some(24),
        });
        assert_eq!(big.fg, Some(Color::Red));
        assert!(big.add_modifier.contains(Modifier::BOLD));

        let small = note_text_style(NoteStyle {
            color: None,
            size_px: Some(10),
        });
        assert_eq!(small.fg, None);
        assert!(small.add_modifier.contains(Modifier::DIM));

        let plain = note_text_style(NoteStyle::default());
        assert!(plain.add_modifier.is_empty());
    }
}
