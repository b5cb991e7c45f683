use log::{debug, info, warn};

use scenebridge_shared::{encode_props_string, HostBoundary, NodeId, Props, RootId};

use crate::{
    client_config::ClientConfig,
    error::RenderError,
    host_config::{HostConfig, UpdatePayload},
    registry::{
        instance::{Instance, NodeInstance, TextInstance},
        instance_registry::SharedRegistry,
    },
};

/// Lifecycle-hook adapter that turns diff-engine callbacks into boundary
/// calls for a single root.
///
/// Each hook issues at most one call across the boundary and keeps the
/// shared registry in step with what the host has acknowledged.
pub struct MutationClient<B: HostBoundary> {
    root_id: RootId,
    boundary: B,
    registry: SharedRegistry,
    config: ClientConfig,
    batch_len: usize,
}

impl<B: HostBoundary> MutationClient<B> {
    pub fn new(root_id: RootId, boundary: B, registry: SharedRegistry, config: ClientConfig) -> Self {
        Self {
            root_id,
            boundary,
            registry,
            config,
            batch_len: 0,
        }
    }

    pub fn root_id(&self) -> &RootId {
        &self.root_id
    }

    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    fn is_registered(&self, node_id: NodeId, operation: &'static str) -> bool {
        let registered = self.registry.borrow().contains(node_id);
        if !registered {
            warn!(
                "Lost reference: cannot {} on node {} (root {}) - not registered",
                operation, node_id, self.root_id
            );
        }
        registered
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        if !self.is_registered(parent, "append_child") || !self.is_registered(child, "append_child") {
            return Ok(());
        }

        debug!("append_child parent={} child={}", parent, child);
        self.boundary.append_child(&self.root_id, parent, child)?;
        self.batch_len += 1;

        if let Some(node) = self
            .registry
            .borrow_mut()
            .resolve_mut(parent)
            .and_then(Instance::as_node_mut)
        {
            node.append_child(child);
        }
        Ok(())
    }

    fn attach_to_container(&mut self, child: NodeId) -> Result<(), RenderError> {
        if !self.is_registered(child, "append_child_to_container") {
            return Ok(());
        }

        debug!("append_child container child={}", child);
        self.boundary
            .append_child(&self.root_id, NodeId::CONTAINER, child)?;
        self.batch_len += 1;
        Ok(())
    }
}

impl<B: HostBoundary> HostConfig for MutationClient<B> {
    type Error = RenderError;

    fn create_instance(&mut self, kind: &str, props: &Props) -> Result<NodeId, RenderError> {
        let props_encoded = encode_props_string(props)?;
        let node_id = self
            .boundary
            .create_node(&self.root_id, kind, &props_encoded)?;
        debug!("create_node id={} kind={} props={}", node_id, kind, props_encoded);

        self.registry.borrow_mut().register(
            node_id,
            Instance::Node(NodeInstance::new(node_id, kind, props.clone())),
        );
        Ok(node_id)
    }

    fn create_text_instance(&mut self, text: &str) -> Result<NodeId, RenderError> {
        let node_id = self.boundary.create_text(&self.root_id, text)?;
        debug!("create_text id={} content={}", node_id, text);

        self.registry
            .borrow_mut()
            .register(node_id, Instance::Text(TextInstance::new(node_id, text)));
        Ok(node_id)
    }

    fn append_initial_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        self.attach(parent, child)
    }

    fn finalize_initial_children(&mut self, _instance: NodeId, _kind: &str, _props: &Props) -> bool {
        false
    }

    fn should_set_text_content(&self, _kind: &str, props: &Props) -> bool {
        props.text_content().is_some()
    }

    fn prepare_update(
        &self,
        _instance: NodeId,
        _kind: &str,
        old_props: &Props,
        new_props: &Props,
    ) -> Option<UpdatePayload> {
        old_props.differs_from(new_props).then(|| UpdatePayload {
            props: new_props.clone(),
        })
    }

    fn prepare_for_commit(&mut self) {
        self.batch_len = 0;
    }

    fn reset_after_commit(&mut self) -> Result<(), RenderError> {
        self.boundary.complete(&self.root_id)?;
        debug!(
            "Commit complete for root {}: {} attached mutations",
            self.root_id, self.batch_len
        );
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        self.attach(parent, child)
    }

    fn append_child_to_container(&mut self, child: NodeId) -> Result<(), RenderError> {
        self.attach_to_container(child)
    }

    // The wire protocol has no positional insert; `before` is ignored and the
    // child lands at the end of the parent.
    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        before: NodeId,
    ) -> Result<(), RenderError> {
        debug!(
            "insert_before parent={} child={} before={} applied as append",
            parent, child, before
        );
        self.attach(parent, child)
    }

    fn insert_in_container_before(&mut self, child: NodeId, before: NodeId) -> Result<(), RenderError> {
        debug!(
            "insert_in_container_before child={} before={} applied as append",
            child, before
        );
        self.attach_to_container(child)
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), RenderError> {
        if !self.is_registered(parent, "remove_child") || !self.is_registered(child, "remove_child") {
            return Ok(());
        }

        debug!("remove_child parent={} child={}", parent, child);
        self.boundary.remove_child(&self.root_id, parent, child)?;
        self.batch_len += 1;

        if let Some(node) = self
            .registry
            .borrow_mut()
            .resolve_mut(parent)
            .and_then(Instance::as_node_mut)
        {
            node.remove_child(child);
        }
        Ok(())
    }

    fn remove_child_from_container(&mut self, child: NodeId) -> Result<(), RenderError> {
        if !self.is_registered(child, "remove_child_from_container") {
            return Ok(());
        }

        debug!("remove_child container child={}", child);
        self.boundary
            .remove_child(&self.root_id, NodeId::CONTAINER, child)?;
        self.batch_len += 1;
        Ok(())
    }

    fn commit_update(&mut self, instance: NodeId, payload: UpdatePayload) -> Result<(), RenderError> {
        if !self.is_registered(instance, "update_node") {
            return Ok(());
        }

        let props_encoded = encode_props_string(&payload.props)?;
        debug!("update_node id={} props={}", instance, props_encoded);
        self.boundary
            .update_node(&self.root_id, instance, &props_encoded)?;
        self.batch_len += 1;

        if let Some(node) = self
            .registry
            .borrow_mut()
            .resolve_mut(instance)
            .and_then(Instance::as_node_mut)
        {
            node.set_props(payload.props);
        }
        Ok(())
    }

    fn commit_text_update(
        &mut self,
        instance: NodeId,
        _old_text: &str,
        new_text: &str,
    ) -> Result<(), RenderError> {
        if !self.is_registered(instance, "update_text") {
            return Ok(());
        }

        debug!("update_text id={} content={}", instance, new_text);
        self.boundary
            .update_text(&self.root_id, instance, new_text)?;
        self.batch_len += 1;

        if let Some(text) = self
            .registry
            .borrow_mut()
            .resolve_mut(instance)
            .and_then(Instance::as_text_mut)
        {
            text.set_text(new_text);
        }
        Ok(())
    }

    fn detach_deleted_instance(&mut self, instance: NodeId) -> Result<(), RenderError> {
        if self.registry.borrow_mut().unregister(instance).is_none() {
            return Ok(());
        }

        if self.config.destroy_on_detach {
            debug!("destroy_node id={}", instance);
            self.boundary.destroy_node(&self.root_id, instance)?;
            self.batch_len += 1;
        }
        Ok(())
    }

    fn clear_container(&mut self) -> Result<(), RenderError> {
        info!("Clearing container for root {}", self.root_id);
        self.boundary.clear_container(&self.root_id)?;
        self.batch_len += 1;
        Ok(())
    }
}
