use thiserror::Error;

use scenebridge_shared::{BoundaryError, SerializationError};

/// Errors that terminate a render call
///
/// A failing render leaves every mutation issued before the failure applied
/// on the host. Only the nodes it created are detached again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A boundary call failed and aborted the commit
    #[error("Boundary call failed: {0}")]
    Boundary(#[from] BoundaryError),

    /// Properties could not be encoded for the wire
    #[error("Property serialization failed: {0}")]
    Serialization(#[from] SerializationError),

    /// The app is already mounted on a different root
    #[error("App is mounted on root '{bound}', cannot render into '{requested}'")]
    RootMismatch {
        bound: String,
        requested: String,
    },

    /// `render` was entered while a previous render had not finished
    #[error("Render already in progress")]
    Reentrant,
}
