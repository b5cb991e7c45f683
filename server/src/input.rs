use std::mem;

use log::debug;
use serde_json::json;

use scenebridge_shared::{EventKind, HostEvent, NodeId};

/// Keyboard focus and the events raised since the last drain.
#[derive(Debug, Default)]
pub struct InputState {
    focused: Option<NodeId>,
    pending: Vec<HostEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// A press on a focusable node moves focus there, blurring whatever held
    /// it before. Every press ends with a click.
    pub fn press(&mut self, node_id: NodeId, focusable: bool) {
        if focusable {
            if let Some(previous) = self.focused.filter(|previous| *previous != node_id) {
                self.pending.push(HostEvent::new(previous, EventKind::Blur));
            }
            self.focused = Some(node_id);
            self.pending.push(HostEvent::new(node_id, EventKind::Focus));
        }
        debug!("Node pressed: id={}", node_id);
        self.pending.push(HostEvent::new(node_id, EventKind::Click));
    }

    /// Returns false when nothing holds focus.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(focused) = self.focused else {
            return false;
        };
        debug!("Keyboard event: key={}, focused_node={}", key, focused);
        self.pending.push(HostEvent::with_payload(
            focused,
            EventKind::KeyDown,
            json!({ "key": key }),
        ));
        true
    }

    /// Drops focus if `node_id` holds it, without raising blur.
    pub fn forget(&mut self, node_id: NodeId) {
        if self.focused == Some(node_id) {
            self.focused = None;
        }
    }

    pub fn drain(&mut self) -> Vec<HostEvent> {
        mem::take(&mut self.pending)
    }
}
