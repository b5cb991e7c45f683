use log::{debug, info, warn};
use serde_json::Value;

use scenebridge_shared::{BoundaryError, HostBoundary, HostEvent, NodeId, RootId};

use crate::{input::InputState, scene::scene_graph::SceneGraph, server_config::ServerConfig};

/// Reference remote host: applies boundary calls to an in-memory
/// [`SceneGraph`] and turns input into [`HostEvent`]s.
///
/// Calls naming unknown nodes are logged and ignored. Only malformed props and
/// kinds outside `ServerConfig::known_kinds` are rejected.
pub struct SceneHost {
    config: ServerConfig,
    graph: SceneGraph,
    input: InputState,
    next_id: u64,
    batches_completed: usize,
}

impl SceneHost {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            graph: SceneGraph::new(),
            input: InputState::new(),
            next_id: 1,
            batches_completed: 0,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn batches_completed(&self) -> usize {
        self.batches_completed
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.input.focused()
    }

    // Input

    /// Presses `node_id`: focus moves there if its kind is focusable, then a
    /// click is raised.
    pub fn press(&mut self, node_id: NodeId) -> Result<(), BoundaryError> {
        let Some(node) = self.graph.get(node_id) else {
            warn!("Press on unknown node {}", node_id);
            return Err(BoundaryError::UnknownNode {
                node_id: node_id.value(),
                operation: "press",
            });
        };
        let focusable = node.kind().map_or(false, |kind| self.config.is_focusable(kind));
        self.input.press(node_id, focusable);
        Ok(())
    }

    /// Sends `key` to the focused node. Returns false when nothing has focus.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.key_down(key)
    }

    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        self.input.drain()
    }

    // Mutation

    fn allocate(&mut self) -> NodeId {
        let node_id = NodeId::new(self.next_id);
        self.next_id += 1;
        node_id
    }

    /// Keeps host-allocated ids clear of ids chosen by a sender.
    pub(crate) fn reserve(&mut self, node_id: NodeId) {
        self.next_id = self.next_id.max(node_id.value() + 1);
    }

    fn parse_props(operation: &'static str, props_encoded: &str) -> Result<Value, BoundaryError> {
        let props: Value =
            serde_json::from_str(props_encoded).map_err(|err| BoundaryError::Rejected {
                operation,
                reason: format!("malformed props: {}", err),
            })?;
        if !props.is_object() {
            return Err(BoundaryError::Rejected {
                operation,
                reason: "props must be a JSON object".to_string(),
            });
        }
        Ok(props)
    }

    pub(crate) fn insert_node(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        kind: &str,
        props_encoded: &str,
    ) -> Result<(), BoundaryError> {
        if !self.config.accepts_kind(kind) {
            warn!("Unknown node type: {}", kind);
            return Err(BoundaryError::Rejected {
                operation: "create_node",
                reason: format!("unknown node type '{}'", kind),
            });
        }
        let props = Self::parse_props("create_node", props_encoded)?;

        self.graph.insert_element(root_id, node_id, kind, props);
        debug!("Created {} node: id={} root={}", kind, node_id, root_id);
        Ok(())
    }

    pub(crate) fn insert_text(&mut self, root_id: &RootId, node_id: NodeId, content: &str) {
        self.graph.insert_text(root_id, node_id, content);
        debug!("Created text node: id={} text={}", node_id, content);
    }
}

impl Default for SceneHost {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

impl HostBoundary for SceneHost {
    fn create_node(
        &mut self,
        root_id: &RootId,
        kind: &str,
        props_encoded: &str,
    ) -> Result<NodeId, BoundaryError> {
        let node_id = self.allocate();
        self.insert_node(root_id, node_id, kind, props_encoded)?;
        Ok(node_id)
    }

    fn create_text(&mut self, root_id: &RootId, content: &str) -> Result<NodeId, BoundaryError> {
        let node_id = self.allocate();
        self.insert_text(root_id, node_id, content);
        Ok(node_id)
    }

    fn append_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError> {
        if self.graph.append(root_id, parent_id, child_id) {
            debug!("Appended child: parent={} child={}", parent_id, child_id);
        }
        Ok(())
    }

    fn remove_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError> {
        if self.graph.remove(root_id, parent_id, child_id) {
            debug!("Removed child: parent={} child={}", parent_id, child_id);
        }
        Ok(())
    }

    fn update_node(
        &mut self,
        _root_id: &RootId,
        node_id: NodeId,
        props_encoded: &str,
    ) -> Result<(), BoundaryError> {
        let props = Self::parse_props("update_node", props_encoded)?;
        if self.graph.update_props(node_id, props) {
            debug!("Updated node {}", node_id);
        }
        Ok(())
    }

    fn update_text(
        &mut self,
        _root_id: &RootId,
        node_id: NodeId,
        content: &str,
    ) -> Result<(), BoundaryError> {
        self.graph.update_text(node_id, content);
        Ok(())
    }

    fn destroy_node(&mut self, _root_id: &RootId, node_id: NodeId) -> Result<(), BoundaryError> {
        if self.graph.destroy(node_id) {
            self.input.forget(node_id);
            debug!("Destroyed node {}", node_id);
        }
        Ok(())
    }

    fn clear_container(&mut self, root_id: &RootId) -> Result<(), BoundaryError> {
        let dropped = self.graph.clear_root(root_id);
        if let Some(focused) = self.input.focused() {
            if !self.graph.contains(focused) {
                self.input.forget(focused);
            }
        }
        info!("Clearing container: {} ({} nodes dropped)", root_id, dropped);
        Ok(())
    }

    fn complete(&mut self, root_id: &RootId) -> Result<(), BoundaryError> {
        self.batches_completed += 1;
        debug!("Batch complete for root {}", root_id);
        Ok(())
    }
}
