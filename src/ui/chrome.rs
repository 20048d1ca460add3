use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::screen::WidgetKind;

const QUIT_HINT: &str = "ctrl+q quit ";

/// One-line status bar: the widget tabs with the active one highlighted, and
/// the quit hint on the right.
pub fn draw_chrome(frame: &mut Frame<'_>, area: Rect, active: WidgetKind) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut spans = Vec::with_capacity(WidgetKind::ALL.len() * 2);
    for kind in WidgetKind::ALL {
        let label = format!(" F{} {} ", kind.function_key(), kind.id());
        let style = if kind == active {
            Style::default().reversed()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let hint_width = (QUIT_HINT.len() as u16).min(area.width);
    let hint = Rect::new(area.right() - hint_width, area.y, hint_width, 1);
    frame.render_widget(
        Paragraph::new(QUIT_HINT)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        hint,
    );
}
