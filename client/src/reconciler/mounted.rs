use scenebridge_shared::{NodeId, Props};

/// Last committed shape of one element, with the id the host gave it.
#[derive(Clone, Debug)]
pub enum Mounted {
    Node(MountedNode),
    Text { id: NodeId, text: String },
}

#[derive(Clone, Debug)]
pub struct MountedNode {
    pub id: NodeId,
    pub kind: String,
    pub key: Option<String>,
    pub props: Props,
    pub children: Vec<Mounted>,
}

impl Mounted {
    pub fn id(&self) -> NodeId {
        match self {
            Mounted::Node(node) => node.id,
            Mounted::Text { id, .. } => *id,
        }
    }

    /// Ids of this subtree, descendants before their parent.
    pub fn collect_ids_post_order(&self, ids: &mut Vec<NodeId>) {
        if let Mounted::Node(node) = self {
            for child in &node.children {
                child.collect_ids_post_order(ids);
            }
        }
        ids.push(self.id());
    }
}

/// Parent slot an effect applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    Container,
    Node(NodeId),
}
