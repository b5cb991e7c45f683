use std::{cell::Ref, mem};

use log::info;
use serde_json::Value;

use scenebridge_shared::{HostBoundary, NodeId, RootId};

use crate::{
    client_config::ClientConfig,
    dispatcher::{DispatchOutcome, EventDispatcher},
    element::Element,
    error::RenderError,
    mutation_client::MutationClient,
    reconciler::{diff_engine::DiffEngine, tree_reconciler::TreeReconciler},
    registry::instance_registry::{InstanceRegistry, SharedRegistry},
};

/// The single host-side mount point an app renders into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootContainer {
    root_id: RootId,
    anchor: NodeId,
}

impl RootContainer {
    fn new(root_id: RootId) -> Self {
        Self {
            root_id,
            anchor: NodeId::CONTAINER,
        }
    }

    pub fn root_id(&self) -> &RootId {
        &self.root_id
    }

    /// Parent id used for container-level attach and detach calls.
    pub fn anchor(&self) -> NodeId {
        self.anchor
    }
}

struct Session<B: HostBoundary, E> {
    container: RootContainer,
    client: MutationClient<B>,
    engine: E,
}

enum Lifecycle<B: HostBoundary, E> {
    Idle { boundary: B, engine: E },
    Mounted(Session<B, E>),
    Rendering,
}

/// Binds a tree to a host boundary and renders it into one root.
///
/// The first `render` creates the mutation client and the engine session for
/// that root; every later render reuses them and diffs against what was last
/// committed.
pub struct App<B: HostBoundary, E: DiffEngine = TreeReconciler> {
    tree: Element,
    config: ClientConfig,
    registry: SharedRegistry,
    dispatcher: EventDispatcher,
    lifecycle: Lifecycle<B, E>,
}

impl<B: HostBoundary> App<B, TreeReconciler> {
    pub fn new(tree: impl Into<Element>, boundary: B) -> Self {
        Self::with_config(tree, boundary, ClientConfig::default())
    }

    pub fn with_config(tree: impl Into<Element>, boundary: B, config: ClientConfig) -> Self {
        Self::with_engine(tree, boundary, TreeReconciler::new(), config)
    }
}

impl<B: HostBoundary, E: DiffEngine> App<B, E> {
    pub fn with_engine(tree: impl Into<Element>, boundary: B, engine: E, config: ClientConfig) -> Self {
        let registry = InstanceRegistry::shared();
        Self {
            tree: tree.into(),
            config,
            dispatcher: EventDispatcher::new(registry.clone()),
            registry,
            lifecycle: Lifecycle::Idle { boundary, engine },
        }
    }

    /// Renders the current tree into `root_id`.
    ///
    /// An app serves a single root: once mounted, rendering into any other
    /// root fails with [`RenderError::RootMismatch`]. A failed render leaves
    /// the app mounted; mutations already issued stay applied, except that
    /// nodes created by the failed render are detached again.
    pub fn render(&mut self, root_id: impl Into<RootId>) -> Result<(), RenderError> {
        let root_id = root_id.into();

        let mut session = match mem::replace(&mut self.lifecycle, Lifecycle::Rendering) {
            Lifecycle::Rendering => return Err(RenderError::Reentrant),
            Lifecycle::Idle { boundary, engine } => {
                info!("Mounting app on root {}", root_id);
                Session {
                    container: RootContainer::new(root_id.clone()),
                    client: MutationClient::new(
                        root_id,
                        boundary,
                        self.registry.clone(),
                        self.config.clone(),
                    ),
                    engine,
                }
            }
            Lifecycle::Mounted(session) => {
                if session.container.root_id != root_id {
                    let bound = session.container.root_id.to_string();
                    self.lifecycle = Lifecycle::Mounted(session);
                    return Err(RenderError::RootMismatch {
                        bound,
                        requested: root_id.to_string(),
                    });
                }
                session
            }
        };

        let result = session.engine.update_container(&mut session.client, &self.tree);
        self.lifecycle = Lifecycle::Mounted(session);
        result
    }

    /// Replaces the tree. A mounted app re-renders into its root right away.
    pub fn set_tree(&mut self, tree: impl Into<Element>) -> Result<(), RenderError> {
        self.tree = tree.into();

        let root_id = match &self.lifecycle {
            Lifecycle::Idle { .. } => return Ok(()),
            Lifecycle::Mounted(session) => session.container.root_id.clone(),
            Lifecycle::Rendering => return Err(RenderError::Reentrant),
        };
        self.render(root_id)
    }

    pub fn tree(&self) -> &Element {
        &self.tree
    }

    /// Routes a host event to the handler stored for `node_id`.
    pub fn dispatch_event(
        &self,
        node_id: NodeId,
        event_name: &str,
        payload: Option<&Value>,
    ) -> DispatchOutcome {
        self.dispatcher.dispatch(node_id, event_name, payload)
    }

    /// A dispatcher handle that outlives borrows of the app.
    pub fn dispatcher(&self) -> EventDispatcher {
        self.dispatcher.clone()
    }

    pub fn registry(&self) -> Ref<'_, InstanceRegistry> {
        self.registry.borrow()
    }

    pub fn root_container(&self) -> Option<&RootContainer> {
        match &self.lifecycle {
            Lifecycle::Mounted(session) => Some(&session.container),
            _ => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted(_))
    }

    pub fn boundary(&self) -> Option<&B> {
        match &self.lifecycle {
            Lifecycle::Idle { boundary, .. } => Some(boundary),
            Lifecycle::Mounted(session) => Some(session.client.boundary()),
            Lifecycle::Rendering => None,
        }
    }
}

/// Shorthand for [`App::new`].
pub fn create_app<B: HostBoundary>(tree: impl Into<Element>, boundary: B) -> App<B> {
    App::new(tree, boundary)
}
