//! # Scenebridge Shared
//! Common functionality shared between scenebridge-client & scenebridge-server
//! crates: identifiers, property values, the wire encoding of property maps,
//! the host boundary and the messages that travel across it.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod boundary;
mod events;
mod messages;
mod props;
mod serialization;
mod transport;
mod types;

pub use boundary::{error::BoundaryError, host_boundary::HostBoundary};
pub use events::{event_kind::EventKind, host_event::HostEvent};
pub use messages::mutation_message::MutationMessage;
pub use props::{
    callback::Callback,
    prop_map::{Props, CHILDREN_KEY, CONTENT_KEY},
    prop_value::PropValue,
};
pub use serialization::{
    decoder::{decode_props, decode_props_str},
    encoder::{encode_props, encode_props_string},
    error::SerializationError,
};
pub use transport::channel::{channel, MessageReceiver, MessageSender, DEFAULT_CHANNEL_CAPACITY};
pub use types::{NodeId, RootId};
