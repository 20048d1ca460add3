mod state;
mod widget;

pub use state::{Counter, CounterAction, CounterReading, Tone};
pub use widget::{CounterView, CounterWidget};
