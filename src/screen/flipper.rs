use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::config::FlipperConfig;
use crate::error::AppResult;
use crate::flipper::{ColorFlipper, FlipperView, RandomPicker, parse_palette};
use crate::ui::{FlipperLayout, draw_flipper};

use super::{Screen, WidgetKind, left_click};

#[derive(Debug, Default)]
pub struct FlipperSurface {
    background: Option<Color>,
    label: String,
}

impl FlipperSurface {
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl FlipperView for FlipperSurface {
    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }
}

pub struct FlipperScreen {
    widget: ColorFlipper<RandomPicker>,
    surface: FlipperSurface,
}

impl FlipperScreen {
    pub fn from_config(config: &FlipperConfig) -> AppResult<Self> {
        let palette = parse_palette(&config.colors)?;
        Ok(Self {
            widget: ColorFlipper::new(palette, RandomPicker::new(config.seed)),
            surface: FlipperSurface::default(),
        })
    }

    pub fn surface(&self) -> &FlipperSurface {
        &self.surface
    }

    fn flip(&mut self) -> bool {
        self.widget.flip(&mut self.surface).is_some()
    }
}

impl Screen for FlipperScreen {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ColorFlipper
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        if let Some((column, row)) = left_click(event) {
            return FlipperLayout::compute(area).hits_button(column, row) && self.flip();
        }

        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) =>
            {
                self.flip()
            }
            _ => false,
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        draw_flipper(frame, area, &self.surface);
    }
}
