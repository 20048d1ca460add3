mod core;
mod event_bus;
mod event_loop;
mod input_ops;
pub(crate) mod terminal_session;


pub use core::App;
