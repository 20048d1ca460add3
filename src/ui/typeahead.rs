use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::screen::TypeaheadSurface;

use super::input_line::build_input_line;
use super::layout::{hits, top_strip};
use super::text::fit_width;

const FIELD_WIDTH: u16 = 60;
const CLEAR_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeaheadTarget {
    Input,
    Clear,
    Row(usize),
}

/// Geometry of the search field and its result panel. Drawing and mouse
/// hit-testing both derive from this, so a click lands on what was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadLayout {
    pub field: Rect,
    pub input: Rect,
    pub clear: Rect,
    pub panel: Option<Rect>,
    /// One rect per row that fits on screen.
    pub rows: Vec<Rect>,
}

impl TypeaheadLayout {
    pub fn compute(area: Rect, panel_visible: bool, row_count: usize) -> Self {
        let field = top_strip(area, FIELD_WIDTH, 1, 3);
        let inner = field.inner(Margin::new(1, 1));
        let clear_width = CLEAR_WIDTH.min(inner.width);
        let clear = Rect::new(
            inner.right().saturating_sub(clear_width),
            inner.y,
            clear_width,
            inner.height,
        );
        let input = Rect::new(
            inner.x,
            inner.y,
            inner.width.saturating_sub(clear_width + 1),
            inner.height,
        );

        let mut panel = None;
        let mut rows = Vec::new();
        if panel_visible {
            let top = field.bottom();
            let available = area.bottom().saturating_sub(top);
            let wanted = u16::try_from(row_count)
                .unwrap_or(u16::MAX)
                .saturating_add(2);
            let height = wanted.min(available);
            if height >= 2 {
                let rect = Rect::new(field.x, top, field.width, height);
                let body = rect.inner(Margin::new(1, 1));
                rows = (0..body.height)
                    .take(row_count)
                    .map(|offset| Rect::new(body.x, body.y + offset, body.width, 1))
                    .collect();
                panel = Some(rect);
            }
        }

        Self {
            field,
            input,
            clear,
            panel,
            rows,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<TypeaheadTarget> {
        if hits(self.clear, column, row) {
            return Some(TypeaheadTarget::Clear);
        }
        if hits(self.input, column, row) {
            return Some(TypeaheadTarget::Input);
        }
        self.rows
            .iter()
            .position(|rect| hits(*rect, column, row))
            .map(TypeaheadTarget::Row)
    }
}

pub fn draw_typeahead(frame: &mut Frame<'_>, area: Rect, surface: &TypeaheadSurface) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = TypeaheadLayout::compute(area, surface.panel_visible(), surface.rows().len());
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, layout.field);

    let input = surface.input();
    let line = build_input_line(
        input.value(),
        input.visual_cursor(),
        layout.input.width as usize,
        true,
        Style::default().fg(Color::White),
    );
    frame.render_widget(Paragraph::new(line), layout.input);
    frame.render_widget(
        Paragraph::new(" x ").style(Style::default().fg(Color::Black).bg(Color::Gray)),
        layout.clear,
    );

    let Some(panel) = layout.panel else {
        return;
    };
    frame.render_widget(Clear, panel);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        panel,
    );
    for (row, rect) in surface.rows().iter().zip(&layout.rows) {
        let text = fit_width(&row.text, rect.width.saturating_sub(1) as usize);
        frame.render_widget(Paragraph::new(format!(" {text}")), *rect);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{TypeaheadLayout, TypeaheadTarget};

    #[test]
    fn collapsed_layout_has_no_panel_or_rows() {
        let layout = TypeaheadLayout::compute(Rect::new(0, 0, 80, 20), false, 5);
        assert_eq!(layout.panel, None);
        assert!(layout.rows.is_empty());
        assert_eq!(layout.field, Rect::new(10, 1, 60, 3));
        assert_eq!(layout.input, Rect::new(11, 2, 54, 1));
        assert_eq!(layout.clear, Rect::new(66, 2, 3, 1));
    }

    #[test]
    fn expanded_layout_places_rows_under_the_field() {
        let layout = TypeaheadLayout::compute(Rect::new(0, 0, 80, 20), true, 2);
        assert_eq!(layout.panel, Some(Rect::new(10, 4, 60, 4)));
        assert_eq!(
            layout.rows,
            vec![Rect::new(11, 5, 58, 1), Rect::new(11, 6, 58, 1)]
        );
    }

    #[test]
    fn expanded_layout_with_zero_rows_still_shows_panel() {
        let layout = TypeaheadLayout::compute(Rect::new(0, 0, 80, 20), true, 0);
        assert_eq!(layout.panel, Some(Rect::new(10, 4, 60, 2)));
        assert!(layout.rows.is_empty());
    }

    #[test]
    fn rows_are_clipped_to_the_available_height() {
        let layout = TypeaheadLayout::compute(Rect::new(0, 0, 80, 8), true, 9);
        assert_eq!(layout.panel, Some(Rect::new(10, 4, 60, 4)));
        assert_eq!(layout.rows.len(), 2);
    }

    #[test]
    fn hit_resolves_input_clear_and_rows() {
        let layout = TypeaheadLayout::compute(Rect::new(0, 0, 80, 20), true, 2);
        assert_eq!(layout.hit(12, 2), Some(TypeaheadTarget::Input));
        assert_eq!(layout.hit(67, 2), Some(TypeaheadTarget::Clear));
        assert_eq!(layout.hit(30, 5), Some(TypeaheadTarget::Row(0)));
        assert_eq!(layout.hit(30, 6), Some(TypeaheadTarget::Row(1)));
        assert_eq!(layout.hit(30, 7), None);
        assert_eq!(layout.hit(0, 0), None);
    }
}
