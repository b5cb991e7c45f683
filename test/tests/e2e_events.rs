use std::{cell::RefCell, rc::Rc};

use serde_json::{json, Value};

use scenebridge_client::{App, DispatchOutcome, Element};
use scenebridge_server::SceneHost;
use scenebridge_shared::{NodeId, PropValue};
use scenebridge_test::{button, Counter, RecordingBoundary};

fn deliver<B: scenebridge_shared::HostBoundary>(app: &App<B>, host: &Rc<RefCell<SceneHost>>) -> Vec<DispatchOutcome> {
    let events = host.borrow_mut().drain_events();
    events
        .iter()
        .map(|event| app.dispatch_event(event.node_id, event.name(), event.payload.as_ref()))
        .collect()
}

#[test]
fn click_without_handler_is_a_no_op() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(button("red"), boundary.clone());
    app.render("main").unwrap();
    let calls = boundary.calls().len();

    assert_eq!(
        app.dispatch_event(NodeId::new(1), "click", None),
        DispatchOutcome::NoHandler
    );
    assert_eq!(boundary.calls().len(), calls);
}

#[test]
fn click_reaches_its_handler() {
    let clicks = Counter::new();
    let tree = button("red").prop("onClick", clicks.handler());
    let mut app = App::new(tree, RecordingBoundary::new());
    app.render("main").unwrap();

    assert_eq!(
        app.dispatch_event(NodeId::new(1), "click", None),
        DispatchOutcome::Invoked
    );
    assert_eq!(
        app.dispatch_event(NodeId::new(1), "focus", None),
        DispatchOutcome::NoHandler
    );
    assert_eq!(clicks.get(), 1);
}

#[test]
fn event_for_removed_node_is_lost() {
    let clicks = Counter::new();
    let with_button: Element = Element::node("panel")
        .child(button("red").prop("onClick", clicks.handler()))
        .into();
    let mut app = App::new(with_button, RecordingBoundary::new());
    app.render("main").unwrap();

    app.set_tree(Element::node("panel")).unwrap();

    assert_eq!(
        app.dispatch_event(NodeId::new(2), "click", None),
        DispatchOutcome::LostReference
    );
    assert_eq!(clicks.get(), 0);
}

#[test]
fn replaced_handler_is_the_one_invoked() {
    let first = Counter::new();
    let second = Counter::new();
    let mut app = App::new(
        button("red").prop("onClick", first.handler()),
        RecordingBoundary::new(),
    );
    app.render("main").unwrap();

    app.set_tree(button("red").prop("onClick", second.handler()))
        .unwrap();
    app.dispatch_event(NodeId::new(1), "click", None);

    assert_eq!((first.get(), second.get()), (0, 1));
}

#[test]
fn text_nodes_and_unknown_events_are_ignored() {
    let mut app = App::new(
        Element::node("panel").child(Element::text("hi")),
        RecordingBoundary::new(),
    );
    app.render("main").unwrap();

    assert_eq!(
        app.dispatch_event(NodeId::new(2), "click", None),
        DispatchOutcome::TextTarget
    );
    assert_eq!(
        app.dispatch_event(NodeId::new(1), "hover", None),
        DispatchOutcome::UnknownEvent
    );
}

#[test]
fn focus_blur_and_keys_follow_presses() {
    let host = Rc::new(RefCell::new(SceneHost::default()));
    let focus_a = Counter::new();
    let blur_a = Counter::new();
    let focus_b = Counter::new();
    let clicks_b = Counter::new();
    let keys = Rc::new(RefCell::new(Vec::<String>::new()));
    let typed = keys.clone();

    let tree: Element = Element::node("panel")
        .child(
            Element::node("text-input")
                .prop("onFocus", focus_a.handler())
                .prop("onBlur", blur_a.handler())
                .prop(
                    "onKeyDown",
                    PropValue::callback(move |payload: Option<&Value>| {
                        if let Some(key) = payload.and_then(|p| p.get("key")).and_then(Value::as_str) {
                            typed.borrow_mut().push(key.to_string());
                        }
                    }),
                ),
        )
        .child(
            Element::node("text-input")
                .prop("onFocus", focus_b.handler())
                .prop("onClick", clicks_b.handler()),
        )
        .into();
    let mut app = App::new(tree, host.clone());
    app.render("main").unwrap();
    let (input_a, input_b) = (NodeId::new(2), NodeId::new(3));

    host.borrow_mut().press(input_a).unwrap();
    assert!(host.borrow_mut().key_down("KeyH"));
    assert!(host.borrow_mut().key_down("KeyI"));
    assert_eq!(
        deliver(&app, &host),
        vec![
            DispatchOutcome::Invoked,
            DispatchOutcome::NoHandler,
            DispatchOutcome::Invoked,
            DispatchOutcome::Invoked,
        ]
    );
    assert_eq!(*keys.borrow(), vec!["KeyH".to_string(), "KeyI".to_string()]);

    host.borrow_mut().press(input_b).unwrap();
    host.borrow_mut().key_down("Enter");
    assert_eq!(
        deliver(&app, &host),
        vec![
            DispatchOutcome::Invoked,
            DispatchOutcome::Invoked,
            DispatchOutcome::Invoked,
            DispatchOutcome::NoHandler,
        ]
    );

    assert_eq!(focus_a.get(), 1);
    assert_eq!(blur_a.get(), 1);
    assert_eq!(focus_b.get(), 1);
    assert_eq!(clicks_b.get(), 1);
    assert_eq!(keys.borrow().len(), 2);
    assert_eq!(host.borrow().focused(), Some(input_b));
}

#[test]
fn keydown_without_payload_is_dropped() {
    let pressed = Counter::new();
    let mut app = App::new(
        Element::node("text-input").prop("onKeyDown", pressed.handler()),
        RecordingBoundary::new(),
    );
    app.render("main").unwrap();

    assert_eq!(
        app.dispatch_event(NodeId::new(1), "keydown", None),
        DispatchOutcome::MalformedPayload
    );
    assert_eq!(
        app.dispatch_event(NodeId::new(1), "keydown", Some(&json!({ "key": "KeyA" }))),
        DispatchOutcome::Invoked
    );
    assert_eq!(pressed.get(), 1);
}

#[test]
fn dispatcher_handle_sees_later_renders() {
    let boundary = RecordingBoundary::new();
    let mut app = App::new(Element::node("panel"), boundary);
    app.render("main").unwrap();
    let dispatcher = app.dispatcher();
    let seen = Counter::new();
    let bump = seen.handler();

    app.set_tree(Element::node("panel").prop("onClick", bump))
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(NodeId::new(1), "click", None),
        DispatchOutcome::Invoked
    );
    assert_eq!(app.registry().len(), 1);
    assert_eq!(seen.get(), 1);
}
