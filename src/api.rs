//! WASM API for the number grid picker
//!
//! This module provides the JavaScript-facing API: an exported
//! NumberPicker class owning the selection state, plus optional click
//! wiring for pages that do not attach their own handlers.
//!
//! Pages that wire clicks themselves (inline `onclick` on each cell)
//! call `toggleNumber` / `resetSelection` directly; pages that prefer
//! the module to own the wiring call `bind()` once after construction.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::models::PageBindings;
use crate::tracker::SelectionTracker;
use crate::view::DomPage;

/// Picker state snapshot returned to JavaScript
#[derive(Serialize)]
struct Snapshot<'a> {
    labels: &'a [String],
    count: usize,
    value: String,
}

/// Number grid picker bound to the current page
#[wasm_bindgen]
pub struct NumberPicker {
    tracker: Rc<RefCell<SelectionTracker<DomPage>>>,
    listeners: Vec<(Element, Closure<dyn FnMut()>)>,
}

#[wasm_bindgen]
impl NumberPicker {
    /// Create a picker bound to the default page contract
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<NumberPicker, JsValue> {
        Self::from_bindings(PageBindings::default())
    }

    /// Create a picker with custom page bindings
    ///
    /// # Parameters
    /// - `bindings`: plain object; any missing field keeps its default
    ///   (e.g. `{ number_class: "cell", counter_id: "picked-count" }`)
    ///
    /// # Returns
    /// The picker, or an error when the page is missing a field target
    #[wasm_bindgen(js_name = withBindings)]
    pub fn with_bindings(bindings: JsValue) -> Result<NumberPicker, JsValue> {
        let bindings: PageBindings = serde_wasm_bindgen::from_value(bindings)
            .map_err(|e| JsValue::from_str(&format!("Invalid bindings: {}", e)))?;
        Self::from_bindings(bindings)
    }

    /// Toggle the clicked number cell
    ///
    /// Selecting adds the selected marker class and appends the cell's
    /// label; a second click on the same label removes both. After
    /// either change the counter text and the joined form value are
    /// rewritten. Clicks on taken cells are ignored.
    ///
    /// # Parameters
    /// - `element`: the clicked number cell
    ///
    /// # Returns
    /// `true` when the cell's label is selected after the call
    #[wasm_bindgen(js_name = toggleNumber)]
    pub fn toggle_number(&mut self, element: &Element) -> bool {
        self.tracker.borrow_mut().toggle(element).unwrap_or(false)
    }

    /// Clear the selection and every selected marker on the page
    ///
    /// Resets the counter to 0 and the joined form value to "".
    #[wasm_bindgen(js_name = resetSelection)]
    pub fn reset_selection(&mut self) {
        self.tracker.borrow_mut().reset();
        log::info!("Selection reset");
    }

    /// Currently selected labels in insertion order
    #[wasm_bindgen(js_name = selectedNumbers)]
    pub fn selected_numbers(&self) -> js_sys::Array {
        self.tracker
            .borrow()
            .selection()
            .labels()
            .iter()
            .map(|label| JsValue::from_str(label))
            .collect()
    }

    /// Number of selected labels
    pub fn count(&self) -> usize {
        self.tracker.borrow().selection().len()
    }

    /// Comma-joined labels, exactly as the form submits them
    #[wasm_bindgen(js_name = joinedValue)]
    pub fn joined_value(&self) -> String {
        self.tracker.borrow().selection().joined()
    }

    /// Full state snapshot: `{ labels, count, value }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let tracker = self.tracker.borrow();
        let selection = tracker.selection();
        let snapshot = Snapshot {
            labels: selection.labels(),
            count: selection.len(),
            value: selection.joined(),
        };
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Attach click listeners to every number cell and the reset trigger
    ///
    /// Listeners stay alive until `unbind()` or the picker is dropped.
    /// Rebinding first detaches the previous listeners, so the method is
    /// safe to call again after the page re-renders the grid.
    pub fn bind(&mut self) -> Result<(), JsValue> {
        self.unbind();

        let (cells, reset_trigger) = {
            let tracker = self.tracker.borrow();
            (tracker.view().number_cells(), tracker.view().reset_trigger())
        };

        for cell in cells {
            let tracker = Rc::clone(&self.tracker);
            let target = cell.clone();
            let closure: Closure<dyn FnMut()> = Closure::new(move || {
                tracker.borrow_mut().toggle(&target);
            });
            cell.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            self.listeners.push((cell, closure));
        }

        if let Some(trigger) = reset_trigger {
            let tracker = Rc::clone(&self.tracker);
            let closure: Closure<dyn FnMut()> = Closure::new(move || {
                tracker.borrow_mut().reset();
            });
            trigger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            self.listeners.push((trigger, closure));
        }

        log::info!("Bound click listeners to {} elements", self.listeners.len());
        Ok(())
    }

    /// Detach every listener attached by `bind()`
    pub fn unbind(&mut self) {
        for (element, closure) in self.listeners.drain(..) {
            let _ = element
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

impl NumberPicker {
    fn from_bindings(bindings: PageBindings) -> Result<NumberPicker, JsValue> {
        let page = DomPage::new(bindings)?;
        log::info!(
            "Number picker bound: {} cells on page",
            page.number_cells().len()
        );

        Ok(NumberPicker {
            tracker: Rc::new(RefCell::new(SelectionTracker::new(page))),
            listeners: Vec::new(),
        })
    }
}
