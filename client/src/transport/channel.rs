use log::debug;

use scenebridge_shared::{BoundaryError, HostBoundary, MessageSender, MutationMessage, NodeId, RootId};

/// A [`HostBoundary`] that queues every call as a [`MutationMessage`].
///
/// The host cannot answer over a queue, so ids are allocated here, starting at
/// 1, and travel inside the create messages.
pub struct ChannelBoundary {
    sender: MessageSender,
    next_id: u64,
}

impl ChannelBoundary {
    pub fn new(sender: MessageSender) -> Self {
        Self {
            sender,
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> NodeId {
        let node_id = NodeId::new(self.next_id);
        self.next_id += 1;
        node_id
    }

    fn send(&self, message: MutationMessage) -> Result<(), BoundaryError> {
        debug!("Queueing {} for root {}", message.operation(), message.root_id());
        self.sender.send(message)
    }
}

impl HostBoundary for ChannelBoundary {
    fn create_node(
        &mut self,
        root_id: &RootId,
        kind: &str,
        props_encoded: &str,
    ) -> Result<NodeId, BoundaryError> {
        let node_id = self.allocate();
        self.send(MutationMessage::CreateNode {
            root_id: root_id.clone(),
            node_id,
            kind: kind.to_string(),
            props_encoded: props_encoded.to_string(),
        })?;
        Ok(node_id)
    }

    fn create_text(&mut self, root_id: &RootId, content: &str) -> Result<NodeId, BoundaryError> {
        let node_id = self.allocate();
        self.send(MutationMessage::CreateText {
            root_id: root_id.clone(),
            node_id,
            content: content.to_string(),
        })?;
        Ok(node_id)
    }

    fn append_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError> {
        self.send(MutationMessage::AppendChild {
            root_id: root_id.clone(),
            parent_id,
            child_id,
        })
    }

    fn remove_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError> {
        self.send(MutationMessage::RemoveChild {
            root_id: root_id.clone(),
            parent_id,
            child_id,
        })
    }

    fn update_node(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        props_encoded: &str,
    ) -> Result<(), BoundaryError> {
        self.send(MutationMessage::UpdateNode {
            root_id: root_id.clone(),
            node_id,
            props_encoded: props_encoded.to_string(),
        })
    }

    fn update_text(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        content: &str,
    ) -> Result<(), BoundaryError> {
        self.send(MutationMessage::UpdateText {
            root_id: root_id.clone(),
            node_id,
            content: content.to_string(),
        })
    }

    fn destroy_node(&mut self, root_id: &RootId, node_id: NodeId) -> Result<(), BoundaryError> {
        self.send(MutationMessage::DestroyNode {
            root_id: root_id.clone(),
            node_id,
        })
    }

    fn clear_container(&mut self, root_id: &RootId) -> Result<(), BoundaryError> {
        self.send(MutationMessage::ClearContainer {
            root_id: root_id.clone(),
        })
    }

    fn complete(&mut self, root_id: &RootId) -> Result<(), BoundaryError> {
        self.send(MutationMessage::Complete {
            root_id: root_id.clone(),
        })
    }
}
