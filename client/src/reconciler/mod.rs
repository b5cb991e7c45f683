pub mod diff_engine;
pub mod mounted;
pub mod tree_reconciler;
