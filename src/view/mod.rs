//! Page view abstraction
//!
//! The tracker core never touches the DOM directly; it drives a PageView.
//! The trait covers exactly what the toggle/reset logic needs from the
//! page: read a cell's label, mark cells selected or unselected, and
//! write the two derived display fields.

pub mod dom;

pub use dom::DomPage;

/// What the tracker needs from the page
pub trait PageView {
    /// Handle to one selectable number cell
    type Cell;

    /// The cell's displayed label, whitespace-trimmed
    ///
    /// `None` when the cell has no readable text content.
    fn label(&self, cell: &Self::Cell) -> Option<String>;

    /// Whether the page marked this cell unavailable
    fn is_taken(&self, cell: &Self::Cell) -> bool;

    /// Add or remove the selected marker on `cell`
    fn set_marked(&mut self, cell: &Self::Cell, marked: bool);

    /// Remove the selected marker from every number cell on the page
    fn clear_marks(&mut self);

    /// Write the selection count display
    fn write_count(&mut self, count: usize);

    /// Write the comma-joined form value
    fn write_value(&mut self, joined: &str);
}
