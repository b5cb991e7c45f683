use std::{collections::HashSet, default::Default};

use scenebridge_shared::DEFAULT_CHANNEL_CAPACITY;

/// Contains Config properties which will be used by the SceneHost
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Node kinds that take keyboard focus when pressed.
    pub focusable_kinds: HashSet<String>,
    /// When set, `create_node` rejects any kind not listed here. When `None`,
    /// every kind is accepted.
    pub known_kinds: Option<HashSet<String>>,
    /// Queue depth used when the host builds its own message channel.
    pub channel_capacity: usize,
}

impl ServerConfig {
    pub fn is_focusable(&self, kind: &str) -> bool {
        self.focusable_kinds.contains(kind)
    }

    pub fn accepts_kind(&self, kind: &str) -> bool {
        self.known_kinds
            .as_ref()
            .map_or(true, |known| known.contains(kind))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            focusable_kinds: HashSet::from(["text-input".to_string()]),
            known_kinds: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
