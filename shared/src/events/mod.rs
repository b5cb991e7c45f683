pub mod event_kind;
pub mod host_event;
