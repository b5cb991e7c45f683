use std::collections::HashMap;

use log::warn;
use serde_json::{json, Map, Value};

use scenebridge_shared::{NodeId, RootId, CONTENT_KEY};

#[derive(Clone, Debug, PartialEq)]
pub enum NodeBody {
    Element { kind: String, props: Value },
    Text,
}

/// A node as the host sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    id: NodeId,
    root_id: RootId,
    body: NodeBody,
    content: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn root_id(&self) -> &RootId {
        &self.root_id
    }

    /// `None` for text nodes.
    pub fn kind(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Element { kind, .. } => Some(kind),
            NodeBody::Text => None,
        }
    }

    pub fn props(&self) -> Option<&Value> {
        match &self.body {
            NodeBody::Element { props, .. } => Some(props),
            NodeBody::Text => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.body, NodeBody::Text)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// `Some(NodeId::CONTAINER)` when attached directly to the root container.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

fn content_of(props: &Value) -> Option<String> {
    props.get(CONTENT_KEY).and_then(Value::as_str).map(str::to_string)
}

/// In-memory scene graph, one container per root.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: HashMap<NodeId, SceneNode>,
    containers: HashMap<RootId, Vec<NodeId>>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_element(&mut self, root_id: &RootId, node_id: NodeId, kind: &str, props: Value) {
        let content = content_of(&props);
        self.insert(SceneNode {
            id: node_id,
            root_id: root_id.clone(),
            body: NodeBody::Element {
                kind: kind.to_string(),
                props,
            },
            content,
            parent: None,
            children: Vec::new(),
        });
    }

    pub fn insert_text(&mut self, root_id: &RootId, node_id: NodeId, content: &str) {
        self.insert(SceneNode {
            id: node_id,
            root_id: root_id.clone(),
            body: NodeBody::Text,
            content: Some(content.to_string()),
            parent: None,
            children: Vec::new(),
        });
    }

    fn insert(&mut self, node: SceneNode) {
        if let Some(previous) = self.nodes.remove(&node.id) {
            warn!("Node {} already exists, replacing it", node.id);
            self.detach(previous.id, previous.parent, &previous.root_id);
        }
        self.nodes.insert(node.id, node);
    }

    /// Attaches `child` as the last child of `parent`, moving it if it is
    /// already attached somewhere. Returns false when either end is unknown.
    pub fn append(&mut self, root_id: &RootId, parent: NodeId, child: NodeId) -> bool {
        let Some(previous_parent) = self.nodes.get(&child).map(SceneNode::parent) else {
            warn!("Cannot append: child {} not found (parent {})", child, parent);
            return false;
        };
        if !parent.is_container() {
            match self.nodes.get(&parent) {
                None => {
                    warn!("Cannot append: parent {} not found (child {})", parent, child);
                    return false;
                }
                Some(node) if node.is_text() => {
                    warn!("Cannot append {} under text node {}", child, parent);
                    return false;
                }
                Some(_) => {}
            }
            if self.is_within(parent, child) {
                warn!("Cannot append {} under its own descendant {}", child, parent);
                return false;
            }
        }

        self.detach(child, previous_parent, root_id);
        if parent.is_container() {
            self.containers.entry(root_id.clone()).or_default().push(child);
        } else if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        true
    }

    /// Whether `node_id` is `ancestor` or sits somewhere beneath it.
    fn is_within(&self, node_id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = Some(node_id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            if current.is_container() {
                return false;
            }
            cursor = self.nodes.get(&current).and_then(SceneNode::parent);
        }
        false
    }

    /// Detaches `child` from `parent`. Returns false when `child` is not a
    /// child of `parent`.
    pub fn remove(&mut self, root_id: &RootId, parent: NodeId, child: NodeId) -> bool {
        let attached = self
            .nodes
            .get(&child)
            .map_or(false, |node| node.parent == Some(parent));
        if !attached {
            warn!("Cannot remove: {} is not a child of {}", child, parent);
            return false;
        }

        self.detach(child, Some(parent), root_id);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = None;
        }
        true
    }

    fn detach(&mut self, child: NodeId, parent: Option<NodeId>, root_id: &RootId) {
        let siblings = match parent {
            None => return,
            Some(parent) if parent.is_container() => self.containers.get_mut(root_id),
            Some(parent) => self.nodes.get_mut(&parent).map(|node| &mut node.children),
        };
        if let Some(siblings) = siblings {
            siblings.retain(|id| *id != child);
        }
    }

    /// Replaces the props of an element node; a string `content` also
    /// replaces its text.
    pub fn update_props(&mut self, node_id: NodeId, new_props: Value) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            warn!("Cannot update: node {} not found", node_id);
            return false;
        };
        let NodeBody::Element { props, .. } = &mut node.body else {
            warn!("Cannot update props of text node {}", node_id);
            return false;
        };
        if let Some(content) = content_of(&new_props) {
            node.content = Some(content);
        }
        *props = new_props;
        true
    }

    pub fn update_text(&mut self, node_id: NodeId, content: &str) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            warn!("Cannot update text: node {} not found", node_id);
            return false;
        };
        node.content = Some(content.to_string());
        true
    }

    /// Frees a node. It is detached from its parent first; its remaining
    /// children become orphans.
    pub fn destroy(&mut self, node_id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&node_id) else {
            warn!("Cannot destroy: node {} not found", node_id);
            return false;
        };
        self.detach(node_id, node.parent, &node.root_id);
        for child in node.children {
            if let Some(child) = self.nodes.get_mut(&child) {
                child.parent = None;
            }
        }
        true
    }

    /// Drops everything attached under the container of `root_id`. Detached
    /// nodes survive. Returns how many nodes were dropped.
    pub fn clear_root(&mut self, root_id: &RootId) -> usize {
        let mut pending = self.containers.remove(root_id).unwrap_or_default();
        let mut dropped = 0;
        while let Some(node_id) = pending.pop() {
            if let Some(node) = self.nodes.remove(&node_id) {
                pending.extend(node.children);
                dropped += 1;
            }
        }
        dropped
    }

    pub fn get(&self, node_id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&node_id)
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn container_children(&self, root_id: &RootId) -> &[NodeId] {
        self.containers.get(root_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nested JSON view of everything attached under `root_id`.
    pub fn snapshot(&self, root_id: &RootId) -> Value {
        Value::Array(
            self.container_children(root_id)
                .iter()
                .filter_map(|id| self.snapshot_node(*id))
                .collect(),
        )
    }

    fn snapshot_node(&self, node_id: NodeId) -> Option<Value> {
        let node = self.nodes.get(&node_id)?;
        let mut out = Map::new();
        match &node.body {
            NodeBody::Element { kind, props } => {
                out.insert("kind".to_string(), json!(kind));
                out.insert("props".to_string(), props.clone());
            }
            NodeBody::Text => {
                out.insert("kind".to_string(), json!("#text"));
            }
        }
        if let Some(content) = &node.content {
            out.insert("content".to_string(), json!(content));
        }
        if !node.children.is_empty() {
            let children = node
                .children
                .iter()
                .filter_map(|id| self.snapshot_node(*id))
                .collect();
            out.insert("children".to_string(), Value::Array(children));
        }
        Some(Value::Object(out))
    }
}
