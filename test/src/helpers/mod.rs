pub mod assertions;
pub mod tree_builder;

pub use recording_boundary::{BoundaryCall, RecordingBoundary};
pub use tree_builder::{button, panel_with_button, row_of, Counter};
