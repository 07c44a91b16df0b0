//! Selection state
//!
//! This module contains the Selection struct, the insertion-ordered list
//! of number labels the user has picked. It is pure state with no DOM
//! types, so the toggle semantics are testable on the native target.

use serde::{Deserialize, Serialize};

/// Ordered collection of currently selected number labels
///
/// Insertion order is preserved and no label appears twice: toggling a
/// label that is already present removes it instead of duplicating it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<String>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Toggle membership of `label`
    ///
    /// Absent labels are appended at the end; present labels are removed.
    /// Returns `true` when the label is selected after the call.
    pub fn toggle(&mut self, label: &str) -> bool {
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
            false
        } else {
            self.labels.push(label.to_string());
            true
        }
    }

    /// Whether `label` is currently selected
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Remove every label
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Number of selected labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The selected labels in insertion order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels joined with "," in insertion order
    ///
    /// This is exactly the string the page's hidden form field carries;
    /// empty selection gives the empty string.
    pub fn joined(&self) -> String {
        self.labels.join(",")
    }
}
