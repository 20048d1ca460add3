mod matcher;
mod types;
mod widget;

pub use matcher::{CandidateMatcher, SubstringMatcher, filter_rows};
pub use types::{ClearBehavior, PanelState, Row, Trigger, TypeaheadView, ViewOp, apply_ops};
pub use widget::Typeahead;
