use crate::{element::Element, host_config::HostConfig};

/// A tree-diffing engine bound to one root container.
///
/// Each call compares `tree` against what the engine committed last time and
/// drives `host` through the hooks needed to make the host match.
pub trait DiffEngine {
    fn update_container<H: HostConfig>(&mut self, host: &mut H, tree: &Element) -> Result<(), H::Error>;
}
