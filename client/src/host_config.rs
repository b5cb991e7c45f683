use scenebridge_shared::{NodeId, Props};

/// Property change computed in the render phase and applied at commit.
#[derive(Clone, Debug)]
pub struct UpdatePayload {
    /// The complete new property map; it replaces the old one wholesale.
    pub props: Props,
}

/// Lifecycle hooks a diff engine drives while reconciling a tree.
///
/// Instances are referred to by their remote [`NodeId`]. Hooks named
/// `*_container` target the root container of the session.
///
/// The render phase (`create_*`, `append_initial_child`,
/// `finalize_initial_children`, `prepare_update`) builds detached subtrees and
/// computes changes. The commit phase runs between `prepare_for_commit` and
/// `reset_after_commit` and is the only place attached nodes are mutated.
pub trait HostConfig {
    type Error;

    fn create_instance(&mut self, kind: &str, props: &Props) -> Result<NodeId, Self::Error>;

    fn create_text_instance(&mut self, text: &str) -> Result<NodeId, Self::Error>;

    fn append_initial_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Self::Error>;

    /// Returns true when the instance wants a commit-time mount callback.
    fn finalize_initial_children(&mut self, instance: NodeId, kind: &str, props: &Props) -> bool;

    /// True when `props` carry the node's text directly, so element children
    /// must not be instantiated.
    fn should_set_text_content(&self, kind: &str, props: &Props) -> bool;

    /// Returns `None` when no update call is needed.
    fn prepare_update(
        &self,
        instance: NodeId,
        kind: &str,
        old_props: &Props,
        new_props: &Props,
    ) -> Option<UpdatePayload>;

    fn prepare_for_commit(&mut self);

    fn reset_after_commit(&mut self) -> Result<(), Self::Error>;

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Self::Error>;

    fn append_child_to_container(&mut self, child: NodeId) -> Result<(), Self::Error>;

    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        before: NodeId,
    ) -> Result<(), Self::Error>;

    fn insert_in_container_before(&mut self, child: NodeId, before: NodeId) -> Result<(), Self::Error>;

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Self::Error>;

    fn remove_child_from_container(&mut self, child: NodeId) -> Result<(), Self::Error>;

    fn commit_update(&mut self, instance: NodeId, payload: UpdatePayload) -> Result<(), Self::Error>;

    fn commit_text_update(
        &mut self,
        instance: NodeId,
        old_text: &str,
        new_text: &str,
    ) -> Result<(), Self::Error>;

    /// Called once for every instance of a deleted subtree.
    fn detach_deleted_instance(&mut self, instance: NodeId) -> Result<(), Self::Error>;

    fn clear_container(&mut self) -> Result<(), Self::Error>;
}
