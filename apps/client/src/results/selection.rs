//! Owns the current [`ResultSet`] and which outcome is on display.

use tracing::debug;

use super::detail::{render_detail, DetailOptions, DetailView};
use super::normalizer::ResultSet;
use super::summary::{render_summary, SummaryCard};

/// What the detail panels should do after a selection change.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Show(Box<DetailView>),
    Hide,
}

#[derive(Debug, Default)]
pub struct SelectionController {
    set: ResultSet,
    selected: Option<usize>,
    options: DetailOptions,
}

impl SelectionController {
    pub fn new(options: DetailOptions) -> Self {
        Self {
            set: ResultSet::default(),
            selected: None,
            options,
        }
    }

    /// Replaces the whole result set and selects its first success, if any.
    /// Any selection made against the previous set is discarded.
    pub fn initialize_from(&mut self, set: ResultSet) -> SelectionChange {
        self.set = set;
        self.selected = None;
        match self.set.first_success_index() {
            Some(index) => self.select(index),
            None => {
                debug!("No successful outcome to select in {} results", self.set.len());
                SelectionChange::Hide
            }
        }
    }

    /// Selects `index` if it names a success; otherwise clears the selection.
    pub fn select(&mut self, index: usize) -> SelectionChange {
        match self.set.get(index).and_then(|outcome| outcome.as_success()) {
            Some(success) => {
                debug!("Selected result {}", index + 1);
                self.selected = Some(index);
                SelectionChange::Show(Box::new(render_detail(success, self.options)))
            }
            None => {
                debug!("Result {} is not selectable; hiding detail panels", index + 1);
                self.selected = None;
                SelectionChange::Hide
            }
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.set
    }

    /// One picker label per outcome, in order.
    pub fn labels(&self) -> Vec<String> {
        self.set
            .outcomes()
            .iter()
            .enumerate()
            .map(|(index, outcome)| outcome.label(index + 1))
            .collect()
    }

    pub fn summary(&self) -> Vec<SummaryCard> {
        render_summary(&self.set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::normalizer::normalize;
    use serde_json::json;

    fn scenario_a() -> ResultSet {
        normalize(json!({
            "results": [
                {"resume": {"name": "Ravi"}, "match_score": {"overall_score": 0.873}},
                {"error": "parse failed", "filename": "a.pdf"}
            ]
        }))
        .unwrap()
    }

    fn shown(change: SelectionChange) -> DetailView {
        match change {
            SelectionChange::Show(view) => *view,
            SelectionChange::Hide => panic!("expected detail view"),
        }
    }

    #[test]
    fn test_mixed_batch_selects_first_success() {
        let mut controller = SelectionController::default();
        let view = shown(controller.initialize_from(scenario_a()));

        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(view.scores.overall_score.as_deref(), Some("87.3%"));
        assert_eq!(controller.labels(), vec!["Ravi", "Error: a.pdf"]);
    }

    #[test]
    fn test_first_success_may_follow_failures() {
        let set = normalize(json!({
            "results": [{"error": "x"}, {"error": "y"}, {"resume": {"email": "c@d.e"}}]
        }))
        .unwrap();

        let mut controller = SelectionController::default();
        controller.initialize_from(set);
        assert_eq!(controller.selected_index(), Some(2));
    }

    #[test]
    fn test_all_failures_select_nothing() {
        let set = normalize(json!({
            "results": [{"error": "x", "filename": "a.pdf"}, {"error": "y"}]
        }))
        .unwrap();

        let mut controller = SelectionController::default();
        assert_eq!(controller.initialize_from(set), SelectionChange::Hide);
        assert_eq!(controller.selected_index(), None);
        assert_eq!(controller.labels(), vec!["Error: a.pdf", "Error: Resume 2"]);
    }

    #[test]
    fn test_empty_set_selects_nothing() {
        let mut controller = SelectionController::default();
        assert_eq!(
            controller.initialize_from(ResultSet::default()),
            SelectionChange::Hide
        );
        assert_eq!(controller.selected_index(), None);
        assert_eq!(controller.select(0), SelectionChange::Hide);
    }

    #[test]
    fn test_selecting_failure_or_out_of_range_hides() {
        let mut controller = SelectionController::default();
        controller.initialize_from(scenario_a());

        assert_eq!(controller.select(1), SelectionChange::Hide);
        assert_eq!(controller.selected_index(), None);

        shown(controller.select(0));
        assert_eq!(controller.select(9), SelectionChange::Hide);
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn test_single_response_has_one_label() {
        let set = normalize(json!({"resume": {}, "match_score": {}})).unwrap();
        let mut controller = SelectionController::default();
        shown(controller.initialize_from(set));
        assert_eq!(controller.labels(), vec!["Resume 1"]);
    }

    #[test]
    fn test_new_set_discards_stale_selection() {
        let mut controller = SelectionController::default();
        controller.initialize_from(normalize(json!({
            "results": [{"error": "x"}, {"resume": {}}, {"resume": {"name": "Third"}}]
        }))
        .unwrap());
        shown(controller.select(2));

        controller.initialize_from(scenario_a());
        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(controller.result_set().len(), 2);
    }

    #[test]
    fn test_legacy_options_flow_into_detail() {
        let set = normalize(json!({"resume": {}, "match_score": {"overall_score": 0}})).unwrap();
        let mut controller = SelectionController::new(DetailOptions {
            show_zero_scores: false,
        });
        let view = shown(controller.initialize_from(set));
        assert_eq!(view.scores.overall_score, None);
    }
}
