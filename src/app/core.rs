use ratatui::Frame;

use crate::config::Config;
use crate::error::AppResult;
use crate::screen::{
    CounterScreen, FlipperScreen, NotesScreen, Screen, TypeaheadScreen, WidgetKind,
};
use crate::ui::{draw_chrome, split_layout};

/// Holds every widget screen; only the active one receives input and is drawn.
pub struct App {
    pub config: Config,
    active: WidgetKind,
    typeahead: TypeaheadScreen,
    counter: CounterScreen,
    flipper: FlipperScreen,
    notes: NotesScreen,
}

impl App {
    pub fn new_with_config(config: Config, start: WidgetKind) -> AppResult<Self> {
        let typeahead = TypeaheadScreen::from_config(&config.typeahead);
        let counter = CounterScreen::from_config(&config.counter)?;
        let flipper = FlipperScreen::from_config(&config.flipper)?;
        let notes = NotesScreen::from_config(&config.notes);
        log::debug!(
            "app: {} candidates, {} palette colors, starting on {}",
            config.typeahead.candidates.len(),
            config.flipper.colors.len(),
            start.id()
        );

        Ok(Self {
            config,
            active: start,
            typeahead,
            counter,
            flipper,
            notes,
        })
    }

    pub fn active(&self) -> WidgetKind {
        self.active
    }

    /// Returns whether the active widget changed.
    pub fn switch_to(&mut self, kind: WidgetKind) -> bool {
        if self.active == kind {
            return false;
        }
        log::info!("switch widget {} -> {}", self.active.id(), kind.id());
        self.active = kind;
        true
    }

    pub fn typeahead(&self) -> &TypeaheadScreen {
        &self.typeahead
    }

    pub fn counter(&self) -> &CounterScreen {
        &self.counter
    }

    pub fn flipper(&self) -> &FlipperScreen {
        &self.flipper
    }

    pub fn notes(&self) -> &NotesScreen {
        &self.notes
    }

    pub(crate) fn active_screen(&self) -> &dyn Screen {
        match self.active {
            WidgetKind::Typeahead => &self.typeahead,
            WidgetKind::Counter => &self.counter,
            WidgetKind::ColorFlipper => &self.flipper,
            WidgetKind::Notes => &self.notes,
        }
    }

    pub(crate) fn active_screen_mut(&mut self) -> &mut dyn Screen {
        match self.active {
            WidgetKind::Typeahead => &mut self.typeahead,
            WidgetKind::Counter => &mut self.counter,
            WidgetKind::ColorFlipper => &mut self.flipper,
            WidgetKind::Notes => &mut self.notes,
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let layout = split_layout(frame.area());
        let screen = self.active_screen();
        screen.draw(frame, layout.body);
        draw_chrome(frame, layout.status, screen.kind());
    }
}
