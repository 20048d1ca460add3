use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub body: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    UiLayout {
        body: chunks[0],
        status: chunks[1],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Horizontally centered strip of `width` starting `offset` rows below the top
/// of `area`, clipped to the area.
pub(crate) fn top_strip(area: Rect, width: u16, offset: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y.saturating_add(offset.min(area.height));
    let height = height.min(area.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}

pub(crate) fn hits(rect: Rect, column: u16, row: u16) -> bool {
    !rect.is_empty() && rect.contains(Position::new(column, row))
}
