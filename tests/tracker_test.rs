// Test selection tracking against an in-memory page

use picker_wasm::tracker::SelectionTracker;
use picker_wasm::view::PageView;

/// One fake grid cell
struct FakeCell {
    label: String,
    taken: bool,
    marked: bool,
}

/// In-memory stand-in for the page; cells are addressed by index
#[derive(Default)]
struct FakePage {
    cells: Vec<FakeCell>,
    count_field: String,
    value_field: String,
}

impl FakePage {
    fn with_labels(labels: &[&str]) -> Self {
        Self {
            cells: labels
                .iter()
                .map(|label| FakeCell {
                    label: (*label).to_string(),
                    taken: false,
                    marked: false,
                })
                .collect(),
            count_field: String::new(),
            value_field: String::new(),
        }
    }
}

impl PageView for FakePage {
    type Cell = usize;

    fn label(&self, cell: &usize) -> Option<String> {
        self.cells.get(*cell).map(|c| c.label.trim().to_string())
    }

    fn is_taken(&self, cell: &usize) -> bool {
        self.cells.get(*cell).map(|c| c.taken).unwrap_or(false)
    }

    fn set_marked(&mut self, cell: &usize, marked: bool) {
        if let Some(c) = self.cells.get_mut(*cell) {
            c.marked = marked;
        }
    }

    fn clear_marks(&mut self) {
        for c in &mut self.cells {
            c.marked = false;
        }
    }

    fn write_count(&mut self, count: usize) {
        self.count_field = count.to_string();
    }

    fn write_value(&mut self, joined: &str) {
        self.value_field = joined.to_string();
    }
}

#[test]
fn test_toggle_selects_marks_and_updates_fields() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["3", "7", "12"]));

    let selected = tracker.toggle(&0);

    assert_eq!(selected, Some(true), "first click should select");
    assert!(tracker.view().cells[0].marked, "clicked cell should carry the marker");
    assert_eq!(tracker.view().count_field, "1");
    assert_eq!(tracker.view().value_field, "3");
}

#[test]
fn test_double_toggle_restores_prior_state() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["3", "7", "12"]));
    tracker.toggle(&0);
    let labels_before = tracker.selection().labels().to_vec();
    let count_before = tracker.view().count_field.clone();
    let value_before = tracker.view().value_field.clone();

    tracker.toggle(&1);
    tracker.toggle(&1);

    assert_eq!(tracker.selection().labels(), labels_before.as_slice());
    assert_eq!(tracker.view().count_field, count_before);
    assert_eq!(tracker.view().value_field, value_before);
    assert!(!tracker.view().cells[1].marked, "double-toggled cell should end unmarked");
}

#[test]
fn test_fields_equal_selection_after_every_mutation() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["3", "7", "12"]));

    for step in [0usize, 1, 2, 1, 0] {
        tracker.toggle(&step);

        let len = tracker.selection().len();
        let joined = tracker.selection().joined();
        assert_eq!(tracker.view().count_field, len.to_string(), "count field must track length");
        assert_eq!(tracker.view().value_field, joined, "value field must track joined labels");
    }

    tracker.reset();
    assert_eq!(tracker.view().count_field, "0");
    assert_eq!(tracker.view().value_field, "");
}

#[test]
fn test_reset_clears_selection_marks_and_fields() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["3", "7", "12"]));
    tracker.toggle(&0);
    tracker.toggle(&1);
    tracker.toggle(&2);
    assert_eq!(tracker.selection().labels(), ["3", "7", "12"]);

    tracker.reset();

    assert!(tracker.selection().is_empty());
    assert_eq!(tracker.view().count_field, "0");
    assert_eq!(tracker.view().value_field, "");
    assert!(
        tracker.view().cells.iter().all(|c| !c.marked),
        "no cell may keep its marker after reset"
    );
}

#[test]
fn test_click_sequence_one_five_one() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["1", "5"]));

    tracker.toggle(&0);
    tracker.toggle(&1);
    tracker.toggle(&0);

    assert_eq!(tracker.selection().labels(), ["5"]);
    assert_eq!(tracker.view().count_field, "1");
    assert_eq!(tracker.view().value_field, "5");
}

#[test]
fn test_single_toggles_keep_first_toggle_order() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["8", "2", "5"]));

    tracker.toggle(&2);
    tracker.toggle(&0);
    tracker.toggle(&1);

    assert_eq!(tracker.selection().labels(), ["5", "8", "2"]);
    assert_eq!(tracker.view().value_field, "5,8,2");
}

#[test]
fn test_taken_cell_is_ignored() {
    let mut page = FakePage::with_labels(&["3", "7"]);
    page.cells[1].taken = true;
    let mut tracker = SelectionTracker::new(page);
    tracker.toggle(&0);

    let result = tracker.toggle(&1);

    assert_eq!(result, None, "taken cell must not toggle");
    assert_eq!(tracker.selection().labels(), ["3"]);
    assert!(!tracker.view().cells[1].marked);
    assert_eq!(tracker.view().count_field, "1");
    assert_eq!(tracker.view().value_field, "3");
}

#[test]
fn test_labels_are_trimmed() {
    // Grid templates indent cell text; membership is on the trimmed label
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["  42\n"]));

    tracker.toggle(&0);

    assert_eq!(tracker.selection().labels(), ["42"]);
    assert_eq!(tracker.view().value_field, "42");
}

#[test]
fn test_duplicate_labels_share_membership_but_not_marks() {
    // Two cells showing the same number: membership is by label, the
    // marker follows the clicked cell
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["9", "9"]));

    tracker.toggle(&0);
    assert_eq!(tracker.selection().labels(), ["9"]);
    assert!(tracker.view().cells[0].marked);

    tracker.toggle(&1);
    assert!(tracker.selection().is_empty(), "second cell toggles the same label off");
    assert!(!tracker.view().cells[1].marked);
    assert!(tracker.view().cells[0].marked, "only the clicked cell is unmarked");
}

#[test]
fn test_reset_on_empty_selection_is_harmless() {
    let mut tracker = SelectionTracker::new(FakePage::with_labels(&["3"]));

    tracker.reset();

    assert!(tracker.selection().is_empty());
    assert_eq!(tracker.view().count_field, "0");
    assert_eq!(tracker.view().value_field, "");
}
