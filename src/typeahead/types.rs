/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
}

impl Row {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Events that make the widget recompute its suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The input value changed through typing.
    Input,
    /// A key was released while the input had focus.
    KeyUp,
    /// A paste into the input completed.
    Paste,
    /// The input itself was clicked.
    Click,
}

impl Trigger {
    pub fn id(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::KeyUp => "keyup",
            Self::Paste => "paste",
            Self::Click => "click",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// What the clear control does beyond emptying the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearBehavior {
    /// Re-render with the empty query, which hides the panel.
    #[default]
    Collapse,
    /// Only empty the input; the panel keeps its rows until the next trigger.
    KeepPanel,
}

impl ClearBehavior {
    pub fn from_collapse_flag(collapse: bool) -> Self {
        if collapse {
            Self::Collapse
        } else {
            Self::KeepPanel
        }
    }
}

/// A single mutation of the typeahead's view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    SetInputValue(String),
    /// Replaces every previously rendered row.
    RenderRows(Vec<Row>),
    SetPanelVisible(bool),
}

/// The document surface the typeahead drives.
pub trait TypeaheadView {
    fn input_value(&self) -> &str;
    fn set_input_value(&mut self, value: &str);
    fn render_rows(&mut self, rows: &[Row]);
    fn set_panel_visible(&mut self, visible: bool);
}

pub fn apply_ops(view: &mut impl TypeaheadView, ops: &[ViewOp]) {
    for op in ops {
        match op {
            ViewOp::SetInputValue(value) => view.set_input_value(value),
            ViewOp::RenderRows(rows) => view.render_rows(rows),
            ViewOp::SetPanelVisible(visible) => view.set_panel_visible(*visible),
        }
    }
}
