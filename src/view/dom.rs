//! web-sys implementation of the page view
//!
//! DomPage addresses the live page through the PageBindings contract:
//! number cells by class, the counter and the hidden form field by id.
//! Both field targets must exist when the view is constructed; number
//! cells may come and go (the page re-renders the grid between raffles).

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::error::PickerError;
use crate::models::PageBindings;
use crate::view::PageView;

/// The live page, addressed through [`PageBindings`]
pub struct DomPage {
    document: Document,
    bindings: PageBindings,
}

impl DomPage {
    /// Bind to the current browser document
    ///
    /// Fails when there is no window/document or when either field
    /// target (counter, joined value) is missing from the page.
    pub fn new(bindings: PageBindings) -> Result<Self, PickerError> {
        let document = web_sys::window()
            .ok_or(PickerError::NoWindow)?
            .document()
            .ok_or(PickerError::NoDocument)?;
        Self::with_document(document, bindings)
    }

    /// Bind to an explicit document
    pub fn with_document(
        document: Document,
        bindings: PageBindings,
    ) -> Result<Self, PickerError> {
        let page = Self { document, bindings };
        page.field_target(&page.bindings.counter_id)?;
        page.field_target(&page.bindings.value_id)?;
        Ok(page)
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    /// Every number cell currently on the page
    pub fn number_cells(&self) -> Vec<Element> {
        let mut cells = Vec::new();
        if let Ok(list) = self
            .document
            .query_selector_all(&self.bindings.number_selector())
        {
            for i in 0..list.length() {
                if let Some(node) = list.item(i) {
                    if let Ok(element) = node.dyn_into::<Element>() {
                        cells.push(element);
                    }
                }
            }
        }
        cells
    }

    /// The reset trigger, when the page has one
    pub fn reset_trigger(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.bindings.reset_id)
    }

    fn field_target(&self, id: &str) -> Result<Element, PickerError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PickerError::MissingTarget(id.to_string()))
    }
}

impl PageView for DomPage {
    type Cell = Element;

    fn label(&self, cell: &Element) -> Option<String> {
        cell.text_content().map(|text| text.trim().to_string())
    }

    fn is_taken(&self, cell: &Element) -> bool {
        cell.class_list().contains(&self.bindings.taken_class)
    }

    fn set_marked(&mut self, cell: &Element, marked: bool) {
        let classes = cell.class_list();
        let result = if marked {
            classes.add_1(&self.bindings.selected_class)
        } else {
            classes.remove_1(&self.bindings.selected_class)
        };
        if result.is_err() {
            log::warn!(
                "could not update class '{}' on cell",
                self.bindings.selected_class
            );
        }
    }

    fn clear_marks(&mut self) {
        for cell in self.number_cells() {
            let _ = cell.class_list().remove_1(&self.bindings.selected_class);
        }
    }

    fn write_count(&mut self, count: usize) {
        match self.field_target(&self.bindings.counter_id) {
            Ok(element) => element.set_text_content(Some(&count.to_string())),
            Err(err) => log::warn!("{}", err),
        }
    }

    fn write_value(&mut self, joined: &str) {
        match self.field_target(&self.bindings.value_id) {
            Ok(element) => {
                // The raffle page uses a hidden <input>; fall back to text
                // content so a display-only target works with the same binding
                if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                    input.set_value(joined);
                } else {
                    element.set_text_content(Some(joined));
                }
            }
            Err(err) => log::warn!("{}", err),
        }
    }
}
