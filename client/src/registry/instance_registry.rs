use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::warn;

use scenebridge_shared::NodeId;

use crate::registry::instance::Instance;

/// Registry handle shared by the mutation client and the event dispatcher.
pub type SharedRegistry = Rc<RefCell<InstanceRegistry>>;

/// Flat index from remote id to the live local instance.
///
/// Only id-keyed lookups are offered; tree structure lives in the instances
/// themselves and in the diff engine.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    instances: HashMap<NodeId, Instance>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    pub fn shared() -> SharedRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Records `instance` under `node_id`.
    ///
    /// A second registration for a live id overwrites the first (last write
    /// wins) and returns the displaced record.
    pub fn register(&mut self, node_id: NodeId, instance: Instance) -> Option<Instance> {
        let previous = self.instances.insert(node_id, instance);
        if previous.is_some() {
            warn!("Node {} registered twice, replacing previous instance", node_id);
        }
        previous
    }

    pub fn resolve(&self, node_id: NodeId) -> Option<&Instance> {
        self.instances.get(&node_id)
    }

    pub fn resolve_mut(&mut self, node_id: NodeId) -> Option<&mut Instance> {
        self.instances.get_mut(&node_id)
    }

    pub fn unregister(&mut self, node_id: NodeId) -> Option<Instance> {
        let removed = self.instances.remove(&node_id);
        if removed.is_none() {
            warn!("Cannot unregister node {} - not registered", node_id);
        }
        removed
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.instances.contains_key(&node_id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.instances.keys().copied()
    }
}
