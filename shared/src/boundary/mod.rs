pub mod error;
pub mod host_boundary;
