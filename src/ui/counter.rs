use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::counter::CounterAction;
use crate::screen::CounterSurface;

use super::layout::{centered_rect, hits};

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 10;
const BUTTON_WIDTH: u16 = 12;
const BUTTON_GAP: u16 = 2;
const CARD_BG: Color = Color::Rgb(0xf1, 0xf5, 0xf8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLayout {
    pub card: Rect,
    pub value: Rect,
    pub buttons: Vec<(CounterAction, Rect)>,
}

impl CounterLayout {
    pub fn compute(area: Rect) -> Self {
        let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
        let inner = card.inner(Margin::new(1, 1));
        let value = Rect::new(
            inner.x,
            inner.y + inner.height.min(2),
            inner.width,
            inner.height.min(1),
        );

        let row_y = inner.y.saturating_add(4);
        let row_height = inner.bottom().saturating_sub(row_y).min(3);
        let total = BUTTON_WIDTH * 3 + BUTTON_GAP * 2;
        let mut x = inner.x + inner.width.saturating_sub(total) / 2;
        let buttons = CounterAction::ALL
            .into_iter()
            .map(|action| {
                let width = BUTTON_WIDTH.min(inner.right().saturating_sub(x));
                let rect = Rect::new(x, row_y, width, row_height);
                x = x.saturating_add(BUTTON_WIDTH + BUTTON_GAP);
                (action, rect)
            })
            .collect();

        Self {
            card,
            value,
            buttons,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<CounterAction> {
        self.buttons
            .iter()
            .find(|(_, rect)| hits(*rect, column, row))
            .map(|(action, _)| *action)
    }
}

pub fn draw_counter(frame: &mut Frame<'_>, area: Rect, surface: &CounterSurface) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = CounterLayout::compute(area);
    let card = Block::default()
        .title(" counter ")
        .borders(Borders::ALL)
        .style(Style::default().bg(CARD_BG).fg(Color::Rgb(0x10, 0x2a, 0x42)));
    frame.render_widget(card, layout.card);

    let reading = surface.reading();
    let value = Paragraph::new(reading.count.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(surface.colors().color(reading.tone))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(value, layout.value);

    for (action, rect) in &layout.buttons {
        let button = Paragraph::new(action.id())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Rgb(0x10, 0x2a, 0x42)));
        frame.render_widget(button, *rect);
    }
}
