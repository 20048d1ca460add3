use crossterm::event::Event;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        let (mut events, mut bus) = EventBusRuntime::spawn();
        log::info!("event loop started on {}", self.active().id());

        let result = self.drive(&mut session, &mut events).await;

        bus.shutdown();
        session.restore()?;
        log::info!("event loop stopped");
        result
    }

    /// Draws, then applies events until quit is requested or the channel
    /// closes. Redraws only after an event changed something.
    pub(crate) async fn drive(
        &mut self,
        surface: &mut impl TerminalSurface,
        events: &mut UnboundedReceiver<DomainEvent>,
    ) -> AppResult<()> {
        let mut redraw = true;
        loop {
            if redraw {
                surface.draw(|frame| self.draw(frame))?;
                redraw = false;
            }

            let Some(event) = events.recv().await else {
                return Ok(());
            };
            match event {
                DomainEvent::Input(event) => {
                    if let Event::Resize(..) = event {
                        surface.clear()?;
                    }
                    let size = surface.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let outcome = self.handle_input_event(&event, area);
                    if outcome.quit_requested {
                        return Ok(());
                    }
                    redraw = outcome.redraw;
                }
                DomainEvent::InputError(message) => {
                    log::warn!("input error: {message}");
                }
            }
        }
    }
}
