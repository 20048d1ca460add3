#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    Decrease,
    Increase,
    Reset,
}

impl CounterAction {
    pub const ALL: [Self; 3] = [Self::Decrease, Self::Reset, Self::Increase];

    pub fn id(self) -> &'static str {
        match self {
            Self::Decrease => "decrease",
            Self::Increase => "increase",
            Self::Reset => "reset",
        }
    }

    /// Maps a control's class name to its action; unknown classes reset.
    pub fn from_class(class: &str) -> Self {
        match class {
            "decrease" => Self::Decrease,
            "increase" => Self::Increase,
            _ => Self::Reset,
        }
    }
}

/// Sign class of the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    pub fn of(count: i64) -> Self {
        match count.signum() {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterReading {
    pub count: i64,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn reading(&self) -> CounterReading {
        CounterReading {
            count: self.count,
            tone: Tone::of(self.count),
        }
    }

    pub fn apply(&mut self, action: CounterAction) -> CounterReading {
        self.count = match action {
            CounterAction::Decrease => self.count.saturating_sub(1),
            CounterAction::Increase => self.count.saturating_add(1),
            CounterAction::Reset => 0,
        };
        self.reading()
    }
}
