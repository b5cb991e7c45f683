use std::{cell::Cell, rc::Rc};

use scenebridge_client::{Element, NodeElement};
use scenebridge_shared::PropValue;

/// Shared counter a handler can bump.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// A handler that increments this counter each time it runs.
    pub fn handler(&self) -> PropValue {
        let cell = self.0.clone();
        PropValue::callback(move |_| cell.set(cell.get() + 1))
    }
}

/// `panel > [button(color) > "label", "text"]`, the shape most tests render.
pub fn panel_with_button(color: &str, label: &str) -> Element {
    Element::node("panel")
        .child(button(color).child(Element::text(label)))
        .child(Element::text("text"))
        .into()
}

pub fn button(color: &str) -> NodeElement {
    Element::node("button").prop("color", color)
}

/// A container with one empty child per kind, in order.
pub fn row_of(kinds: &[&str]) -> Element {
    Element::node("row")
        .children(kinds.iter().map(|kind| Element::node(*kind)))
        .into()
}
