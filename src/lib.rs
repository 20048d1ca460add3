pub mod app;
pub mod color;
pub mod config;
pub mod counter;
pub mod error;
pub(crate) mod event;
pub mod flipper;
pub mod input;
pub mod logging;
pub mod notes;
pub mod screen;
pub mod typeahead;
pub mod ui;
