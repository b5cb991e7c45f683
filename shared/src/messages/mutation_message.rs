use serde::{Deserialize, Serialize};

use crate::{NodeId, RootId};

/// One queued boundary call.
///
/// Used by transports that cannot answer synchronously: the sending side
/// picks node ids itself and the host honors them on arrival.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MutationMessage {
    CreateNode {
        root_id: RootId,
        node_id: NodeId,
        kind: String,
        props_encoded: String,
    },
    CreateText {
        root_id: RootId,
        node_id: NodeId,
        content: String,
    },
    AppendChild {
        root_id: RootId,
        parent_id: NodeId,
        child_id: NodeId,
    },
    RemoveChild {
        root_id: RootId,
        parent_id: NodeId,
        child_id: NodeId,
    },
    UpdateNode {
        root_id: RootId,
        node_id: NodeId,
        props_encoded: String,
    },
    UpdateText {
        root_id: RootId,
        node_id: NodeId,
        content: String,
    },
    DestroyNode {
        root_id: RootId,
        node_id: NodeId,
    },
    ClearContainer {
        root_id: RootId,
    },
    /// End of a mutation batch
    Complete {
        root_id: RootId,
    },
}

impl MutationMessage {
    pub fn root_id(&self) -> &RootId {
        match self {
            Self::CreateNode { root_id, .. }
            | Self::CreateText { root_id, .. }
            | Self::AppendChild { root_id, .. }
            | Self::RemoveChild { root_id, .. }
            | Self::UpdateNode { root_id, .. }
            | Self::UpdateText { root_id, .. }
            | Self::DestroyNode { root_id, .. }
            | Self::ClearContainer { root_id }
            | Self::Complete { root_id } => root_id,
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            Self::CreateNode { .. } => "create_node",
            Self::CreateText { .. } => "create_text",
            Self::AppendChild { .. } => "append_child",
            Self::RemoveChild { .. } => "remove_child",
            Self::UpdateNode { .. } => "update_node",
            Self::UpdateText { .. } => "update_text",
            Self::DestroyNode { .. } => "destroy_node",
            Self::ClearContainer { .. } => "clear_container",
            Self::Complete { .. } => "complete",
        }
    }
}
