use log::{debug, warn};

use scenebridge_shared::{
    channel, BoundaryError, HostBoundary, MessageReceiver, MessageSender, MutationMessage,
};

use crate::scene::scene_host::SceneHost;

impl SceneHost {
    /// A message queue sized by `ServerConfig::channel_capacity`.
    pub fn channel(&self) -> (MessageSender, MessageReceiver) {
        channel(self.config().channel_capacity)
    }

    /// Applies one queued call, honoring the node id chosen by the sender.
    pub fn apply_message(&mut self, message: MutationMessage) -> Result<(), BoundaryError> {
        match message {
            MutationMessage::CreateNode {
                root_id,
                node_id,
                kind,
                props_encoded,
            } => {
                self.reserve(node_id);
                self.insert_node(&root_id, node_id, &kind, &props_encoded)
            }
            MutationMessage::CreateText {
                root_id,
                node_id,
                content,
            } => {
                self.reserve(node_id);
                self.insert_text(&root_id, node_id, &content);
                Ok(())
            }
            MutationMessage::AppendChild {
                root_id,
                parent_id,
                child_id,
            } => self.append_child(&root_id, parent_id, child_id),
            MutationMessage::RemoveChild {
                root_id,
                parent_id,
                child_id,
            } => self.remove_child(&root_id, parent_id, child_id),
            MutationMessage::UpdateNode {
                root_id,
                node_id,
                props_encoded,
            } => self.update_node(&root_id, node_id, &props_encoded),
            MutationMessage::UpdateText {
                root_id,
                node_id,
                content,
            } => self.update_text(&root_id, node_id, &content),
            MutationMessage::DestroyNode { root_id, node_id } => {
                self.destroy_node(&root_id, node_id)
            }
            MutationMessage::ClearContainer { root_id } => self.clear_container(&root_id),
            MutationMessage::Complete { root_id } => self.complete(&root_id),
        }
    }

    /// Drains `receiver` and applies everything queued. A message the host
    /// rejects is logged and skipped; the rest still apply. Returns how many
    /// messages were applied.
    pub fn process_messages(&mut self, receiver: &MessageReceiver) -> usize {
        let mut applied = 0;
        for message in receiver.drain() {
            let operation = message.operation();
            match self.apply_message(message) {
                Ok(()) => applied += 1,
                Err(err) => warn!("Skipping queued {}: {}", operation, err),
            }
        }
        if applied > 0 {
            debug!("Applied {} queued messages", applied);
        }
        applied
    }
}
