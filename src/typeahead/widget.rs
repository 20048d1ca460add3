use super::matcher::{CandidateMatcher, SubstringMatcher, filter_rows};
use super::types::{ClearBehavior, PanelState, Row, Trigger, TypeaheadView, ViewOp, apply_ops};

/// Keeps a suggestion panel in sync with a text input.
///
/// The widget holds no per-event state: every trigger re-reads the query
/// from the view and recomputes the rows from the full candidate set.
pub struct Typeahead {
    candidates: Vec<String>,
    matcher: Box<dyn CandidateMatcher>,
    clear_behavior: ClearBehavior,
}

impl Typeahead {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            matcher: Box::new(SubstringMatcher),
            clear_behavior: ClearBehavior::default(),
        }
    }

    pub fn with_clear_behavior(mut self, clear_behavior: ClearBehavior) -> Self {
        self.clear_behavior = clear_behavior;
        self
    }

    pub fn with_matcher(mut self, matcher: Box<dyn CandidateMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn suggest(&self, query: &str) -> Vec<Row> {
        filter_rows(query, &self.candidates, self.matcher.as_ref())
    }

    pub fn plan_refresh(&self, query: &str) -> Vec<ViewOp> {
        let panel = PanelState::for_query(query);
        vec![
            ViewOp::RenderRows(self.suggest(query)),
            ViewOp::SetPanelVisible(panel.is_expanded()),
        ]
    }

    pub fn plan_select(&self, row: &Row) -> Vec<ViewOp> {
        vec![
            ViewOp::SetInputValue(row.text.clone()),
            ViewOp::SetPanelVisible(false),
        ]
    }

    pub fn plan_clear(&self) -> Vec<ViewOp> {
        let mut ops = vec![ViewOp::SetInputValue(String::new())];
        if self.clear_behavior == ClearBehavior::Collapse {
            ops.extend(self.plan_refresh(""));
        }
        ops
    }

    pub fn handle(&self, view: &mut impl TypeaheadView, trigger: Trigger) -> PanelState {
        log::trace!("typeahead trigger={}", trigger.id());
        self.refresh(view)
    }

    pub fn refresh(&self, view: &mut impl TypeaheadView) -> PanelState {
        let query = view.input_value().to_string();
        let panel = PanelState::for_query(&query);
        let ops = self.plan_refresh(&query);
        log::debug!("typeahead refresh query={query:?} panel={panel:?}");
        apply_ops(view, &ops);
        panel
    }

    pub fn select(&self, view: &mut impl TypeaheadView, row: &Row) -> PanelState {
        log::debug!("typeahead select {:?}", row.text);
        apply_ops(view, &self.plan_select(row));
        PanelState::Collapsed
    }

    /// Empties the input. Returns `None` when the configured
    /// [`ClearBehavior`] leaves the panel untouched.
    pub fn clear(&self, view: &mut impl TypeaheadView) -> Option<PanelState> {
        log::debug!("typeahead clear behavior={:?}", self.clear_behavior);
        apply_ops(view, &self.plan_clear());
        match self.clear_behavior {
            ClearBehavior::Collapse => Some(PanelState::Collapsed),
            ClearBehavior::KeepPanel => None,
        }
    }
}
