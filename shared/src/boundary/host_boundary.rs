use std::{cell::RefCell, rc::Rc};

use crate::{boundary::error::BoundaryError, NodeId, RootId};

/// The synchronous call surface exposed by the remote host.
///
/// Every call blocks until the host acknowledges it. There is no positional
/// insert: `append_child` always attaches the child as the last child of the
/// parent, moving it there if it was already attached.
///
/// Implementations must not call back into the bridge from inside any of
/// these methods.
pub trait HostBoundary {
    /// Allocates a node of `kind` and returns its remote id.
    fn create_node(
        &mut self,
        root_id: &RootId,
        kind: &str,
        props_encoded: &str,
    ) -> Result<NodeId, BoundaryError>;

    /// Allocates a text node and returns its remote id.
    fn create_text(&mut self, root_id: &RootId, content: &str) -> Result<NodeId, BoundaryError>;

    fn append_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError>;

    fn remove_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError>;

    fn update_node(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        props_encoded: &str,
    ) -> Result<(), BoundaryError>;

    fn update_text(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        content: &str,
    ) -> Result<(), BoundaryError>;

    fn destroy_node(&mut self, root_id: &RootId, node_id: NodeId) -> Result<(), BoundaryError>;

    fn clear_container(&mut self, root_id: &RootId) -> Result<(), BoundaryError>;

    /// Marks the end of a mutation batch.
    fn complete(&mut self, _root_id: &RootId) -> Result<(), BoundaryError> {
        Ok(())
    }
}

// Lets a caller keep a handle on a host it also lends to the bridge.
impl<B: HostBoundary> HostBoundary for Rc<RefCell<B>> {
    fn create_node(
        &mut self,
        root_id: &RootId,
        kind: &str,
        props_encoded: &str,
    ) -> Result<NodeId, BoundaryError> {
        self.borrow_mut().create_node(root_id, kind, props_encoded)
    }

    fn create_text(&mut self, root_id: &RootId, content: &str) -> Result<NodeId, BoundaryError> {
        self.borrow_mut().create_text(root_id, content)
    }

    fn append_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError> {
        self.borrow_mut().append_child(root_id, parent_id, child_id)
    }

    fn remove_child(
        &mut self,
        root_id: &RootId,
        parent_id: NodeId,
        child_id: NodeId,
    ) -> Result<(), BoundaryError> {
        self.borrow_mut().remove_child(root_id, parent_id, child_id)
    }

    fn update_node(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        props_encoded: &str,
    ) -> Result<(), BoundaryError> {
        self.borrow_mut().update_node(root_id, node_id, props_encoded)
    }

    fn update_text(
        &mut self,
        root_id: &RootId,
        node_id: NodeId,
        content: &str,
    ) -> Result<(), BoundaryError> {
        self.borrow_mut().update_text(root_id, node_id, content)
    }

    fn destroy_node(&mut self, root_id: &RootId, node_id: NodeId) -> Result<(), BoundaryError> {
        self.borrow_mut().destroy_node(root_id, node_id)
    }

    fn clear_container(&mut self, root_id: &RootId) -> Result<(), BoundaryError> {
        self.borrow_mut().clear_container(root_id)
    }

    fn complete(&mut self, root_id: &RootId) -> Result<(), BoundaryError> {
        self.borrow_mut().complete(root_id)
    }
}
