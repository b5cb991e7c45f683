use std::default::Default;

/// Contains Config properties which will be used by the bridge
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Whether detaching a deleted instance also tells the host to free the
    /// node (`destroy_node`). When false, only the local registry entry is
    /// dropped and the host keeps the detached node alive.
    pub destroy_on_detach: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            destroy_on_detach: true,
        }
    }
}
