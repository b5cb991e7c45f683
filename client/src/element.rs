use scenebridge_shared::{PropValue, Props, CHILDREN_KEY};

/// Description of the virtual tree handed to `render`.
#[derive(Clone, Debug)]
pub enum Element {
    Node(NodeElement),
    Text(String),
}

impl Element {
    pub fn node(kind: impl Into<String>) -> NodeElement {
        NodeElement::new(kind)
    }

    pub fn text(content: impl Into<String>) -> Element {
        Element::Text(content.into())
    }
}

impl From<NodeElement> for Element {
    fn from(node: NodeElement) -> Self {
        Element::Node(node)
    }
}

impl From<&str> for Element {
    fn from(content: &str) -> Self {
        Element::Text(content.to_string())
    }
}

impl From<String> for Element {
    fn from(content: String) -> Self {
        Element::Text(content)
    }
}

#[derive(Clone, Debug)]
pub struct NodeElement {
    kind: String,
    key: Option<String>,
    props: Props,
    children: Vec<Element>,
}

impl NodeElement {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: None,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Sets the text-content shorthand: the node's sole child is this text.
    ///
    /// Changing only this text on a later render issues no update. Use a text
    /// child for text that changes.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.prop(CHILDREN_KEY, PropValue::Str(content.into()))
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn kind_name(&self) -> &str {
        &self.kind
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn prop_map(&self) -> &Props {
        &self.props
    }

    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }
}
