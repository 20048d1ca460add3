use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::color::parse_color;
use crate::config::CounterConfig;
use crate::counter::{CounterAction, CounterReading, CounterView, CounterWidget, Tone};
use crate::error::{AppError, AppResult};
use crate::ui::{CounterLayout, draw_counter};

use super::{Screen, WidgetKind, left_click};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneColors {
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
}

impl ToneColors {
    pub fn from_config(config: &CounterConfig) -> AppResult<Self> {
        Ok(Self {
            positive: require(&config.positive_color)?,
            negative: require(&config.negative_color)?,
            neutral: require(&config.neutral_color)?,
        })
    }

    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Neutral => self.neutral,
        }
    }
}

fn require(value: &str) -> AppResult<Color> {
    parse_color(value)
        .ok_or_else(|| AppError::invalid_argument(format!("unrecognized color {value:?}")))
}

#[derive(Debug)]
pub struct CounterSurface {
    reading: CounterReading,
    colors: ToneColors,
}

impl CounterSurface {
    pub fn reading(&self) -> CounterReading {
        self.reading
    }

    pub fn colors(&self) -> &ToneColors {
        &self.colors
    }
}

impl CounterView for CounterSurface {
    fn show(&mut self, reading: CounterReading) {
        self.reading = reading;
    }
}

pub struct CounterScreen {
    widget: CounterWidget,
    surface: CounterSurface,
}

impl CounterScreen {
    pub fn new(colors: ToneColors) -> Self {
        let widget = CounterWidget::default();
        Self {
            surface: CounterSurface {
                reading: widget.reading(),
                colors,
            },
            widget,
        }
    }

    pub fn from_config(config: &CounterConfig) -> AppResult<Self> {
        Ok(Self::new(ToneColors::from_config(config)?))
    }

    pub fn surface(&self) -> &CounterSurface {
        &self.surface
    }

    fn activate(&mut self, action: CounterAction) -> bool {
        self.widget.activate(&mut self.surface, action);
        true
    }
}

fn shortcut(code: KeyCode) -> Option<CounterAction> {
    match code {
        KeyCode::Char('-') => Some(CounterAction::Decrease),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(CounterAction::Increase),
        KeyCode::Char('0') | KeyCode::Char('r') => Some(CounterAction::Reset),
        _ => None,
    }
}

impl Screen for CounterScreen {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Counter
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> bool {
        if let Some((column, row)) = left_click(event) {
            return match CounterLayout::compute(area).hit(column, row) {
                Some(action) => self.activate(action),
                None => false,
            };
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match shortcut(key.code) {
                Some(action) => self.activate(action),
                None => false,
            },
            _ => false,
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        draw_counter(frame, area, &self.surface);
    }
}
