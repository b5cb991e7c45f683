/// Assert the boundary saw exactly these operations, in order
#[macro_export]
macro_rules! assert_operations {
    ($boundary:expr, [$($op:expr),* $(,)?]) => {{
        let expected: Vec<&'static str> = vec![$($op),*];
        assert_eq!($boundary.operations(), expected, "Unexpected boundary operations");
    }};
}

/// Assert every id in the app's registry is alive in the scene graph
#[macro_export]
macro_rules! assert_registry_mirrors_scene {
    ($app:expr, $graph:expr) => {{
        let registry = $app.registry();
        for node_id in registry.ids() {
            assert!(
                $graph.contains(node_id),
                "Registered node {} is missing from the scene graph",
                node_id
            );
        }
        assert_eq!(
            registry.len(),
            $graph.len(),
            "Registry and scene graph disagree on live node count"
        );
    }};
}
