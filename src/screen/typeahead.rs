use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use tui_input::backend::crossterm::EventHandler;
use tui_input::{Input, InputRequest};

use crate::config::TypeaheadConfig;
use crate::typeahead::{ClearBehavior, Row, Trigger, Typeahead, TypeaheadView};
use crate::ui::{TypeaheadLayout, TypeaheadTarget, draw_typeahead};

use super::{Screen, WidgetKind, left_click};

/// The search field and result panel as currently shown.
#[derive(Debug, Default)]
pub struct TypeaheadSurface {
    input: Input,
    rows: Vec<Row>,
    panel_visible: bool,
}

impl TypeaheadSurface {
    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }
}

impl TypeaheadView for TypeaheadSurface {
    fn input_value(&self) -> &str {
        self.input.value()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
    }

    fn render_rows(&mut self, rows: &[Row]) {
        self.rows = rows.to_vec();
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
    }
}

pub struct TypeaheadScreen {
    widget: Typeahead,
    surface: TypeaheadSurface,
}

impl TypeaheadScreen {
    pub fn new(widget: Typeahead) -> Self {
        Self {
            widget,
            surface: TypeaheadSurface::default(),
        }
    }

    pub fn from_config(config: &TypeaheadConfig) -> Self {
        let widget = Typeahead::new(config.candidates.clone()).with_clear_behavior(
            ClearBehavior::from_collapse_flag(config.clear_collapses_panel),
        );
        Self::new(widget)
    }

    pub fn surface(&self) -> &TypeaheadSurface {
        &self.surface
    }

    fn handle_paste(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            self.surface.input.handle(InputRequest::InsertChar(ch));
        }
        self.widget.handle(&mut self.surface, Trigger::Paste);
    }

    fn handle_click(&mut self, column: u16, row: u16, area: Rect) -> bool {
        let layout = TypeaheadLayout::compute(
            area,
            self.surface.panel_visible,
            self.surface.rows.len(),
        );
        match layout.hit(column, row) {
            Some(TypeaheadTarget::Input) => {
                self.widget.handle(&mut self.surface, Trigger::Click);
                true
            }
            Some(TypeaheadTarget::Clear) => {
                self.widget.clear(&mut self.surface);
                true
            }
            Some(TypeaheadTarget::Row(idx)) => {
                let Some(row) = self.surface.rows.get(idx).cloned() else {
                    return false;
                };
                self.widget.select(&mut self.surface, &row);
                true
            }
            None => false,
        }
    }
}

impl Screen for TypeaheadScreen {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Typeahead
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        if let Some((column, row)) = left_click(event) {
            return self.handle_click(column, row, area);
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => {
                self.widget.handle(&mut self.surface, Trigger::KeyUp);
                true
            }
            Event::Key(_) => {
                let Some(changed) = self.surface.input.handle_event(event) else {
                    return false;
                };
                if changed.value {
                    self.widget.handle(&mut self.surface, Trigger::Input);
                }
                true
            }
            Event::Paste(text) => {
                self.handle_paste(text);
                true
            }
            _ => false,
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        draw_typeahead(frame, area, &self.surface);
    }
}
