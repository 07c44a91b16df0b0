//! Selection tracker
//!
//! This module contains the SelectionTracker struct, the owner of all
//! picker state. It pairs the Selection with a PageView and keeps the
//! page's counter and joined-value fields equal to a pure function of
//! the selection after every mutation.

use log::debug;

use crate::models::Selection;
use crate::view::PageView;

/// Toggle/reset core, generic over the page it drives
///
/// The selection has no external mutation path: every change goes
/// through [`toggle`](SelectionTracker::toggle) or
/// [`reset`](SelectionTracker::reset), which also rewrite both display
/// fields.
pub struct SelectionTracker<V: PageView> {
    selection: Selection,
    view: V,
}

impl<V: PageView> SelectionTracker<V> {
    /// Create a tracker with an empty selection
    pub fn new(view: V) -> Self {
        Self {
            selection: Selection::new(),
            view,
        }
    }

    /// Toggle the cell's label and mirror the change to the page
    ///
    /// Selecting marks the cell and appends its label; deselecting
    /// unmarks it and removes the label. Either way both display fields
    /// are rewritten. Returns whether the label is selected after the
    /// call, or `None` when the click is ignored (taken cell, or a cell
    /// with no readable label).
    pub fn toggle(&mut self, cell: &V::Cell) -> Option<bool> {
        if self.view.is_taken(cell) {
            debug!("ignoring click on taken cell");
            return None;
        }

        let label = self.view.label(cell)?;
        let selected = self.selection.toggle(&label);
        self.view.set_marked(cell, selected);
        self.sync_fields();

        debug!(
            "toggled '{}': selected={}, count={}",
            label,
            selected,
            self.selection.len()
        );
        Some(selected)
    }

    /// Clear the selection and every selected marker on the page
    ///
    /// The counter goes back to 0 and the joined value to the empty
    /// string. Taken markers are page-owned and stay untouched.
    pub fn reset(&mut self) {
        self.view.clear_marks();
        self.selection.clear();
        self.sync_fields();
    }

    /// The current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The page view this tracker drives
    pub fn view(&self) -> &V {
        &self.view
    }

    fn sync_fields(&mut self) {
        self.view.write_count(self.selection.len());
        self.view.write_value(&self.selection.joined());
    }
}
