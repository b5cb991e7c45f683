use log::{debug, warn};
use serde_json::Value;

use scenebridge_shared::{EventKind, NodeId, PropValue};

use crate::registry::{instance::Instance, instance_registry::SharedRegistry};

/// What happened to an inbound event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The stored handler ran
    Invoked,
    /// No live instance has this id (typical while a subtree is torn down)
    LostReference,
    /// The target is a text node, which carries no handlers
    TextTarget,
    /// The event name is not one the bridge understands
    UnknownEvent,
    /// The event requires a payload and none was supplied
    MalformedPayload,
    /// The instance has no handler for this event
    NoHandler,
}

/// Inbound path: routes host events to the handlers held in the registry.
#[derive(Clone)]
pub struct EventDispatcher {
    registry: SharedRegistry,
}

impl EventDispatcher {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Delivers `event_name` for `node_id` to the matching handler, if any.
    ///
    /// Never fails. The handler is invoked after the registry borrow is
    /// released, so it may freely inspect the registry.
    pub fn dispatch(
        &self,
        node_id: NodeId,
        event_name: &str,
        payload: Option<&Value>,
    ) -> DispatchOutcome {
        let callback = {
            let registry = self.registry.borrow();
            let Some(instance) = registry.resolve(node_id) else {
                warn!("Lost event '{}' for node {} - not registered", event_name, node_id);
                return DispatchOutcome::LostReference;
            };
            let Instance::Node(node) = instance else {
                return DispatchOutcome::TextTarget;
            };

            let Some(kind) = EventKind::from_name(event_name) else {
                return DispatchOutcome::UnknownEvent;
            };
            let payload_missing = payload.map_or(true, Value::is_null);
            if kind.requires_payload() && payload_missing {
                debug!("Dropping '{}' for node {}: missing payload", event_name, node_id);
                return DispatchOutcome::MalformedPayload;
            }

            let handler = node.props().get(kind.handler_key()).and_then(PropValue::as_callback);
            let Some(callback) = handler.cloned() else {
                return DispatchOutcome::NoHandler;
            };
            callback
        };

        debug!("Dispatching '{}' to node {}", event_name, node_id);
        callback.call(payload);
        DispatchOutcome::Invoked
    }
}
