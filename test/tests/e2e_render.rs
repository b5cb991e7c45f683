use std::{cell::RefCell, rc::Rc};

use serde_json::json;

use scenebridge_client::{App, ClientConfig, Element, RenderError};
use scenebridge_server::SceneHost;
use scenebridge_shared::{NodeId, RootId};
use scenebridge_test::{
    assert_operations, assert_registry_mirrors_scene, button, panel_with_button, row_of,
    BoundaryCall, RecordingBoundary,
};

fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

#[test]
fn parent_with_two_children_builds_then_attaches() {
    init_logger();
    let boundary = RecordingBoundary::new();
    let tree: Element = Element::node("panel")
        .child(button("red"))
        .child(Element::text("hi"))
        .into();
    let mut app = App::new(tree, boundary.clone());

    app.render("main").unwrap();

    assert_eq!(
        boundary.calls(),
        vec![
            BoundaryCall::CreateNode {
                node_id: NodeId::new(1),
                kind: "panel".to_string(),
                props: json!({}),
            },
            BoundaryCall::CreateNode {
                node_id: NodeId::new(2),
                kind: "button".to_string(),
                props: json!({ "color": "red" }),
            },
            BoundaryCall::AppendChild {
                parent_id: NodeId::new(1),
                child_id: NodeId::new(2),
            },
            BoundaryCall::CreateText {
                node_id: NodeId::new(3),
                content: "hi".to_string(),
            },
            BoundaryCall::AppendChild {
                parent_id: NodeId::new(1),
                child_id: NodeId::new(3),
            },
            BoundaryCall::ClearContainer,
            BoundaryCall::AppendChild {
                parent_id: NodeId::CONTAINER,
                child_id: NodeId::new(1),
            },
            BoundaryCall::Complete,
        ]
    );

    let registry = app.registry();
    assert_eq!(registry.len(), 3);
    let panel = registry.resolve(NodeId::new(1)).and_then(|i| i.as_node()).unwrap();
    assert_eq!(panel.children(), &[NodeId::new(2), NodeId::new(3)]);
    assert!(registry.resolve(NodeId::new(3)).unwrap().is_text());
}

#[test]
fn single_color_change_is_one_update() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(panel_with_button("red", "go"), boundary.clone());
    app.render("main").unwrap();
    boundary.take_calls();

    app.set_tree(panel_with_button("blue", "go")).unwrap();

    assert_eq!(
        boundary.calls(),
        vec![
            BoundaryCall::UpdateNode {
                node_id: NodeId::new(2),
                props: json!({ "color": "blue" }),
            },
            BoundaryCall::Complete,
        ]
    );
    let registry = app.registry();
    let props = registry.resolve(NodeId::new(2)).and_then(|i| i.props()).unwrap();
    assert_eq!(props.get("color").and_then(|v| v.as_str()), Some("blue"));
}

#[test]
fn identical_rerender_only_completes() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(panel_with_button("red", "go"), boundary.clone());
    app.render("main").unwrap();
    boundary.take_calls();

    app.render("main").unwrap();
    app.set_tree(panel_with_button("red", "go")).unwrap();

    assert_operations!(boundary, ["complete", "complete"]);
}

#[test]
fn text_child_change_updates_text() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(panel_with_button("red", "go"), boundary.clone());
    app.render("main").unwrap();
    boundary.take_calls();

    app.set_tree(panel_with_button("red", "stop")).unwrap();

    assert_eq!(
        boundary.calls(),
        vec![
            BoundaryCall::UpdateText {
                node_id: NodeId::new(3),
                content: "stop".to_string(),
            },
            BoundaryCall::Complete,
        ]
    );
}

#[test]
fn removed_child_is_detached_then_destroyed() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(panel_with_button("red", "go"), boundary.clone());
    app.render("main").unwrap();
    boundary.take_calls();

    app.set_tree(Element::node("panel").child(button("red").child(Element::text("go"))))
        .unwrap();

    assert_eq!(
        boundary.calls(),
        vec![
            BoundaryCall::RemoveChild {
                parent_id: NodeId::new(1),
                child_id: NodeId::new(4),
            },
            BoundaryCall::DestroyNode {
                node_id: NodeId::new(4),
            },
            BoundaryCall::Complete,
        ]
    );
    assert!(!app.registry().contains(NodeId::new(4)));
    assert_eq!(app.registry().len(), 3);
}

#[test]
fn removed_subtree_is_destroyed_children_first() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(panel_with_button("red", "go"), boundary.clone());
    app.render("main").unwrap();
    boundary.take_calls();

    app.set_tree(Element::node("panel").child(Element::text("text")))
        .unwrap();

    // positional: the button slot now holds text, the old text slot is surplus
    assert_operations!(
        boundary,
        [
            "create_text",
            "remove_child",
            "destroy_node",
            "destroy_node",
            "remove_child",
            "destroy_node",
            "append_child",
            "complete",
        ]
    );
    let destroyed: Vec<NodeId> = boundary
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            BoundaryCall::DestroyNode { node_id } => Some(node_id),
            _ => None,
        })
        .collect();
    assert_eq!(destroyed, vec![NodeId::new(3), NodeId::new(2), NodeId::new(4)]);
    assert_eq!(app.registry().len(), 2);
}

#[test]
fn destroy_can_be_left_to_the_host() {
    let boundary = RecordingBoundary::new();
    let config = ClientConfig {
        destroy_on_detach: false,
    };
    let mut app = App::with_config(row_of(&["a", "b"]), boundary.clone(), config);
    app.render("main").unwrap();
    boundary.take_calls();

    app.set_tree(row_of(&["a"])).unwrap();

    assert_operations!(boundary, ["remove_child", "complete"]);
    assert!(!app.registry().contains(NodeId::new(3)));
}

#[test]
fn text_shorthand_is_sent_as_content() {
    let boundary = RecordingBoundary::new();
    let tree: Element = Element::node("label").text("Hello").into();
    let mut app = App::new(tree, boundary.clone());

    app.render("main").unwrap();

    assert_eq!(boundary.count("create_text"), 0);
    assert_eq!(
        boundary.calls()[0],
        BoundaryCall::CreateNode {
            node_id: NodeId::new(1),
            kind: "label".to_string(),
            props: json!({ "content": "Hello" }),
        }
    );
}

#[test]
fn insert_before_lands_at_the_end() {
    let host = Rc::new(RefCell::new(SceneHost::default()));
    let boundary = RecordingBoundary::new();
    let mut recorded = App::new(row_of(&["a", "b"]), boundary.clone());
    let mut scene = App::new(row_of(&["a", "b"]), host.clone());
    recorded.render("main").unwrap();
    scene.render("main").unwrap();
    boundary.take_calls();

    recorded.set_tree(row_of(&["c", "b"])).unwrap();
    scene.set_tree(row_of(&["c", "b"])).unwrap();

    // "c" is placed before "b", which the protocol can only express as append
    assert!(boundary.calls().contains(&BoundaryCall::AppendChild {
        parent_id: NodeId::new(1),
        child_id: NodeId::new(4),
    }));
    let host = host.borrow();
    assert_eq!(
        host.graph().get(NodeId::new(1)).unwrap().children(),
        &[NodeId::new(3), NodeId::new(4)]
    );
    let row = scene.registry();
    let row = row.resolve(NodeId::new(1)).and_then(|i| i.as_node()).unwrap();
    assert_eq!(row.children(), &[NodeId::new(3), NodeId::new(4)]);
}

#[test]
fn scene_host_mirrors_the_registry() {
    let host = Rc::new(RefCell::new(SceneHost::default()));
    let mut app = App::new(panel_with_button("red", "go"), host.clone());

    app.render("main").unwrap();
    assert_registry_mirrors_scene!(app, host.borrow().graph());

    app.set_tree(row_of(&["a", "b", "c"])).unwrap();
    assert_registry_mirrors_scene!(app, host.borrow().graph());

    assert_eq!(
        host.borrow().graph().snapshot(&RootId::new("main")),
        json!([{
            "kind": "row",
            "props": {},
            "children": [
                { "kind": "a", "props": {} },
                { "kind": "b", "props": {} },
                { "kind": "c", "props": {} }
            ]
        }])
    );
}

#[test]
fn second_root_is_rejected() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(panel_with_button("red", "go"), boundary.clone());
    app.render("main").unwrap();
    let calls_before = boundary.calls().len();

    let result = app.render("overlay");

    assert_eq!(
        result,
        Err(RenderError::RootMismatch {
            bound: "main".to_string(),
            requested: "overlay".to_string(),
        })
    );
    assert_eq!(boundary.calls().len(), calls_before);
    assert_eq!(boundary.roots(), vec![RootId::new("main")]);
    assert_eq!(app.root_container().unwrap().anchor(), NodeId::CONTAINER);
    assert!(app.render("main").is_ok());
}

#[test]
fn set_tree_before_render_only_stores() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(row_of(&["a"]), boundary.clone());

    app.set_tree(row_of(&["a", "b"])).unwrap();

    assert!(boundary.calls().is_empty());
    assert!(!app.is_mounted());
    app.render("main").unwrap();
    assert_eq!(boundary.count("create_node"), 3);
}
