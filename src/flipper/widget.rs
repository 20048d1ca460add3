use ratatui::style::Color;

use crate::color::parse_color;
use crate::error::{AppError, AppResult};

use super::picker::IndexPicker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    /// The color exactly as configured, shown as the label.
    pub name: String,
    pub color: Color,
}

pub fn parse_palette(names: &[String]) -> AppResult<Vec<PaletteColor>> {
    if names.is_empty() {
        return Err(AppError::invalid_argument("color palette is empty"));
    }
    names
        .iter()
        .map(|name| {
            parse_color(name)
                .map(|color| PaletteColor {
                    name: name.clone(),
                    color,
                })
                .ok_or_else(|| AppError::invalid_argument(format!("unrecognized color {name:?}")))
        })
        .collect()
}

pub trait FlipperView {
    fn set_background(&mut self, color: Color);
    fn set_label(&mut self, text: &str);
}

pub struct ColorFlipper<P: IndexPicker> {
    palette: Vec<PaletteColor>,
    picker: P,
    current: Option<usize>,
}

impl<P: IndexPicker> ColorFlipper<P> {
    /// `palette` must be non-empty; [`parse_palette`] guarantees that.
    pub fn new(palette: Vec<PaletteColor>, picker: P) -> Self {
        Self {
            palette,
            picker,
            current: None,
        }
    }

    pub fn palette(&self) -> &[PaletteColor] {
        &self.palette
    }

    pub fn current(&self) -> Option<&PaletteColor> {
        self.current.and_then(|idx| self.palette.get(idx))
    }

    pub fn flip(&mut self, view: &mut impl FlipperView) -> Option<&PaletteColor> {
        if self.palette.is_empty() {
            return None;
        }
        let idx = self.picker.pick(self.palette.len()).min(self.palette.len() - 1);
        self.current = Some(idx);
        let entry = &self.palette[idx];
        log::debug!("flipper picked {} ({:?})", entry.name, entry.color);
        view.set_background(entry.color);
        view.set_label(&entry.name);
        Some(entry)
    }
}
