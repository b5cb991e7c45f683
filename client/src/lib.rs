//! # Scenebridge Client
//! Renders a virtual UI tree into a scene graph that lives on the other side
//! of a host boundary. Keeps a registry of every live instance, turns tree
//! diffs into boundary mutations, and routes host events back to the handlers
//! attached to each node.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod transport;
pub mod shared {
    pub use scenebridge_shared::{
        decode_props, encode_props, encode_props_string, BoundaryError, Callback, EventKind,
        HostBoundary, NodeId, PropValue, Props, RootId, SerializationError,
    };
}

mod app;
mod client_config;
mod dispatcher;
mod element;
mod error;
mod host_config;
mod mutation_client;
mod reconciler;
mod registry;

pub use app::{create_app, App, RootContainer};
pub use client_config::ClientConfig;
pub use dispatcher::{DispatchOutcome, EventDispatcher};
pub use element::{Element, NodeElement};
pub use error::RenderError;
pub use host_config::{HostConfig, UpdatePayload};
pub use mutation_client::MutationClient;
pub use reconciler::{diff_engine::DiffEngine, tree_reconciler::TreeReconciler};
pub use registry::{
    instance::{Instance, NodeInstance, TextInstance},
    instance_registry::{InstanceRegistry, SharedRegistry},
};
