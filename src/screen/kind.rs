#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum WidgetKind {
    Typeahead,
    Counter,
    ColorFlipper,
    Notes,
}

impl WidgetKind {
    pub const ALL: [Self; 4] = [
        Self::Typeahead,
        Self::Counter,
        Self::ColorFlipper,
        Self::Notes,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Typeahead => "typeahead",
            Self::Counter => "counter",
            Self::ColorFlipper => "color-flipper",
            Self::Notes => "notes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == value)
    }

    /// Number of the function key that switches to this widget.
    pub fn function_key(self) -> u8 {
        match self {
            Self::Typeahead => 1,
            Self::Counter => 2,
            Self::ColorFlipper => 3,
            Self::Notes => 4,
        }
    }

    pub fn from_function_key(key: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.function_key() == key)
    }
}
