mod state;

use crossterm::event::KeyCode;
use flowgrid::ChangeSet;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Grid,
    Help,
}

/// Number of ticks a freshly inserted cell stays highlighted.
pub const HIGHLIGHT_TICKS: u8 = 4;

/// Cells from the most recent insertion, shown highlighted until it fades.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub change: ChangeSet,
    pub ticks_left: u8,
}
