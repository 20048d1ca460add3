pub mod keymap;

pub use keymap::{GlobalCommand, map_global_key};
