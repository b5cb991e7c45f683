/// The closed set of events the host may deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Focus,
    Blur,
    KeyDown,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Click,
        EventKind::Focus,
        EventKind::Blur,
        EventKind::KeyDown,
    ];

    /// Parses a wire event name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(EventKind::Click),
            "focus" => Some(EventKind::Focus),
            "blur" => Some(EventKind::Blur),
            "keydown" => Some(EventKind::KeyDown),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::KeyDown => "keydown",
        }
    }

    /// Property key holding the handler for this event.
    pub fn handler_key(&self) -> &'static str {
        match self {
            EventKind::Click => "onClick",
            EventKind::Focus => "onFocus",
            EventKind::Blur => "onBlur",
            EventKind::KeyDown => "onKeyDown",
        }
    }

    pub fn requires_payload(&self) -> bool {
        matches!(self, EventKind::KeyDown)
    }
}
