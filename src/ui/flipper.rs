use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::color::contrast_fg;
use crate::screen::FlipperSurface;

use super::layout::{centered_rect, hits};

const BUTTON_WIDTH: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipperLayout {
    pub label: Rect,
    pub button: Rect,
}

impl FlipperLayout {
    pub fn compute(area: Rect) -> Self {
        let group = centered_rect(area, area.width, 5);
        let label = Rect::new(group.x, group.y, group.width, group.height.min(1));
        let button_row = Rect::new(
            group.x,
            group.y.saturating_add(2).min(group.bottom()),
            group.width,
            group.bottom().saturating_sub(group.y.saturating_add(2)),
        );
        let button = centered_rect(button_row, BUTTON_WIDTH, 3);
        Self { label, button }
    }

    pub fn hits_button(&self, column: u16, row: u16) -> bool {
        hits(self.button, column, row)
    }
}

pub fn draw_flipper(frame: &mut Frame<'_>, area: Rect, surface: &FlipperSurface) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let background = surface.background().unwrap_or(Color::Reset);
    let fg = match surface.background() {
        Some(color) => contrast_fg(color),
        None => Color::Reset,
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(background).fg(fg)),
        area,
    );

    let layout = FlipperLayout::compute(area);
    let label = Line::from(vec![
        Span::raw("Background Color : "),
        Span::styled(
            surface.label().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(label).alignment(Alignment::Center),
        layout.label,
    );
    if layout.button.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new("click me")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.button,
    );
}
