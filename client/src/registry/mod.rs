pub mod instance;
pub mod instance_registry;
