use serde_json::Value;

use crate::{events::event_kind::EventKind, NodeId};

/// An input event raised by the host against one of its nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct HostEvent {
    pub node_id: NodeId,
    pub kind: EventKind,
    pub payload: Option<Value>,
}

impl HostEvent {
    pub fn new(node_id: NodeId, kind: EventKind) -> Self {
        Self {
            node_id,
            kind,
            payload: None,
        }
    }

    pub fn with_payload(node_id: NodeId, kind: EventKind, payload: Value) -> Self {
        Self {
            node_id,
            kind,
            payload: Some(payload),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
