use thiserror::Error;

/// Errors that can occur while converting property maps to and from their
/// wire representation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    /// A property map must be encoded as a structured object
    #[error("Expected a property object, found {found}")]
    NotAnObject {
        found: &'static str,
    },

    /// The encoded form could not be produced
    #[error("Failed to encode properties: {message}")]
    Encode {
        message: String,
    },

    /// The encoded form could not be parsed
    #[error("Failed to decode properties: {message}")]
    Decode {
        message: String,
    },
}
