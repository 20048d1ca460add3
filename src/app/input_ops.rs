use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::input::{GlobalCommand, map_global_key};
use crate::ui::split_layout;

use super::core::App;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub redraw: bool,
    pub quit_requested: bool,
}

impl App {
    /// Routes one terminal event. `area` is the whole terminal; the active
    /// screen gets the body above the status bar.
    pub(crate) fn handle_input_event(&mut self, event: &Event, area: Rect) -> InputEventOutcome {
        if let Event::Key(key) = event
            && let Some(command) = map_global_key(*key)
        {
            return match command {
                GlobalCommand::Quit => {
                    log::info!("quit requested");
                    InputEventOutcome {
                        redraw: false,
                        quit_requested: true,
                    }
                }
                GlobalCommand::Switch(kind) => InputEventOutcome {
                    redraw: self.switch_to(kind),
                    quit_requested: false,
                },
            };
        }

        if let Event::Resize(..) = event {
            return InputEventOutcome {
                redraw: true,
                quit_requested: false,
            };
        }

        let body = split_layout(area).body;
        InputEventOutcome {
            redraw: self.active_screen_mut().handle_event(event, body),
            quit_requested: false,
        }
    }
}
