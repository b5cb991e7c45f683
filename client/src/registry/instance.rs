use scenebridge_shared::{NodeId, Props};

/// Local record of a node mirrored on the host.
#[derive(Clone, Debug)]
pub enum Instance {
    Node(NodeInstance),
    Text(TextInstance),
}

impl Instance {
    pub fn id(&self) -> NodeId {
        match self {
            Instance::Node(node) => node.id(),
            Instance::Text(text) => text.id(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Instance::Text(_))
    }

    pub fn as_node(&self) -> Option<&NodeInstance> {
        match self {
            Instance::Node(node) => Some(node),
            Instance::Text(_) => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut NodeInstance> {
        match self {
            Instance::Node(node) => Some(node),
            Instance::Text(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextInstance> {
        match self {
            Instance::Text(text) => Some(text),
            Instance::Node(_) => None,
        }
    }

    /// Property map of the instance; text instances have none.
    pub fn props(&self) -> Option<&Props> {
        self.as_node().map(NodeInstance::props)
    }
}

#[derive(Clone, Debug)]
pub struct NodeInstance {
    id: NodeId,
    kind: String,
    props: Props,
    children: Vec<NodeId>,
}

impl NodeInstance {
    pub fn new(id: NodeId, kind: impl Into<String>, props: Props) -> Self {
        Self {
            id,
            kind: kind.into(),
            props,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Replaces the property map wholesale; nothing is merged.
    pub fn set_props(&mut self, props: Props) {
        self.props = props;
    }

    /// Attaches `child` as the last child, moving it if already attached.
    pub fn append_child(&mut self, child: NodeId) {
        self.children.retain(|existing| *existing != child);
        self.children.push(child);
    }

    /// Detaches `child` by id. Returns false if it was not a child.
    pub fn remove_child(&mut self, child: NodeId) -> bool {
        let before = self.children.len();
        self.children.retain(|existing| *existing != child);
        self.children.len() != before
    }
}

#[derive(Clone, Debug)]
pub struct TextInstance {
    id: NodeId,
    text: String,
}

impl TextInstance {
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
