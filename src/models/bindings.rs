//! Page binding contract
//!
//! The picker does not own the page markup; it binds to it. PageBindings
//! names the class and id contract the page must follow. Defaults match
//! the raffle ticket page, and JavaScript may override any subset of
//! fields when constructing the picker.

use serde::{Deserialize, Serialize};

/// Selectors and ids the DOM view binds to
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PageBindings {
    /// Class naming each selectable number cell
    pub number_class: String,

    /// Marker class added to a selected cell
    pub selected_class: String,

    /// Marker class on cells the page made unavailable (sold numbers)
    pub taken_class: String,

    /// Id of the element showing the selection count
    pub counter_id: String,

    /// Id of the form field receiving the comma-joined labels
    pub value_id: String,

    /// Id of the reset trigger, wired by `bind`
    pub reset_id: String,
}

impl Default for PageBindings {
    fn default() -> Self {
        Self {
            number_class: "number".to_string(),
            selected_class: "selected".to_string(),
            taken_class: "taken".to_string(),
            counter_id: "counter".to_string(),
            value_id: "selected_numbers".to_string(),
            reset_id: "reset".to_string(),
        }
    }
}

impl PageBindings {
    /// CSS selector matching every number cell
    pub fn number_selector(&self) -> String {
        format!(".{}", self.number_class)
    }
}
