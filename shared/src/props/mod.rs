pub mod callback;
pub mod prop_map;
pub mod prop_value;
