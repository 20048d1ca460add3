mod picker;
mod widget;

pub use picker::{IndexPicker, RandomPicker};
pub use widget::{ColorFlipper, FlipperView, PaletteColor, parse_palette};
