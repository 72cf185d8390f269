use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::app::{App, AppEvent};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Polls for crossterm events and maps them to `AppEvent`s.
/// Only an expired timeout counts as a tick.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(map_event(event::read()?));
    }
    Ok(Some(AppEvent::Tick))
}

/// Key presses become `KeyPress`; resize, mouse and focus events yield
/// nothing and just trigger the next redraw.
fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::KeyPress(key.code)),
        _ => None,
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event);
        }
    }
    info!(remaining = app.colors.len(), "event loop finished");
    Ok(())
}
