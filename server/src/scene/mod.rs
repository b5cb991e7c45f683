pub mod scene_graph;
pub mod scene_host;
