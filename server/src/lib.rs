//! # Scenebridge Server
//! The host side of scenebridge: an in-memory scene graph that applies the
//! mutation calls issued by a scenebridge client, either directly through
//! `HostBoundary` or from a message queue, and raises input events against
//! its nodes.

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
        channel, BoundaryError, EventKind, HostBoundary, HostEvent, MessageReceiver,
        MessageSender, MutationMessage, NodeId, RootId,
    };
}

mod input;
mod scene;
mod server_config;

pub use input::InputState;
pub use scene::{
    scene_graph::{NodeBody, SceneGraph, SceneNode},
    scene_host::SceneHost,
};
pub use server_config::ServerConfig;
