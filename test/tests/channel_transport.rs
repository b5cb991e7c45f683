use serde_json::json;

use scenebridge_client::{transport::ChannelBoundary, App, Element, RenderError};
use scenebridge_server::{SceneHost, ServerConfig};
use scenebridge_shared::{BoundaryError, MutationMessage, NodeId, RootId};
use scenebridge_test::{assert_registry_mirrors_scene, panel_with_button};

#[test]
fn queued_mutations_rebuild_the_tree_on_the_host() {
    let mut host = SceneHost::default();
    let (sender, receiver) = host.channel();
    let mut app = App::new(panel_with_button("red", "go"), ChannelBoundary::new(sender));

    app.render("main").unwrap();
    assert_eq!(host.process_messages(&receiver), 10);

    assert_eq!(
        host.graph().snapshot(&RootId::new("main")),
        json!([{
            "kind": "panel",
            "props": {},
            "children": [
                {
                    "kind": "button",
                    "props": { "color": "red" },
                    "children": [{ "kind": "#text", "content": "go" }]
                },
                { "kind": "#text", "content": "text" }
            ]
        }])
    );
    assert_registry_mirrors_scene!(app, host.graph());
    assert_eq!(host.batches_completed(), 1);
}

#[test]
fn updates_flow_through_the_queue() {
    let mut host = SceneHost::default();
    let (sender, receiver) = host.channel();
    let mut app = App::new(panel_with_button("red", "go"), ChannelBoundary::new(sender));
    app.render("main").unwrap();
    host.process_messages(&receiver);

    app.set_tree(panel_with_button("blue", "stop")).unwrap();
    let messages = receiver.drain();

    assert_eq!(
        messages
            .iter()
            .map(MutationMessage::operation)
            .collect::<Vec<_>>(),
        vec!["update_node", "update_text", "complete"]
    );
    for message in messages {
        host.apply_message(message).unwrap();
    }
    let button = host.graph().get(NodeId::new(2)).unwrap();
    assert_eq!(button.props(), Some(&json!({ "color": "blue" })));
    assert_eq!(host.graph().get(NodeId::new(3)).unwrap().content(), Some("stop"));
}

#[test]
fn closed_queue_fails_the_render() {
    let host = SceneHost::default();
    let (sender, receiver) = host.channel();
    drop(receiver);
    let mut app = App::new(panel_with_button("red", "go"), ChannelBoundary::new(sender));

    assert_eq!(
        app.render("main"),
        Err(RenderError::Boundary(BoundaryError::Disconnected))
    );
}

fn long_row(len: usize) -> Element {
    Element::node("row")
        .children((0..len).map(|index| Element::text(index.to_string())))
        .into()
}

#[test]
fn batch_over_capacity_fails_instead_of_blocking() {
    let host = SceneHost::default();
    let (sender, receiver) = host.channel();
    let mut app = App::new(long_row(200), ChannelBoundary::new(sender));

    assert!(matches!(
        app.render("main"),
        Err(RenderError::Boundary(BoundaryError::QueueFull { capacity: 256, .. }))
    ));
    assert_eq!(receiver.drain().len(), 256);
    assert!(app.registry().is_empty());
}

#[test]
fn capacity_sized_for_the_batch_delivers_it() {
    let mut host = SceneHost::new(ServerConfig {
        channel_capacity: 1024,
        ..ServerConfig::default()
    });
    let (sender, receiver) = host.channel();
    let mut app = App::new(long_row(200), ChannelBoundary::new(sender));

    app.render("main").unwrap();
    // row + 200 texts, 200 initial appends, clear, container append, complete
    assert_eq!(host.process_messages(&receiver), 404);

    let row = host.graph().container_children(&RootId::new("main"))[0];
    assert_eq!(host.graph().get(row).unwrap().children().len(), 200);
    assert_registry_mirrors_scene!(app, host.graph());
}
