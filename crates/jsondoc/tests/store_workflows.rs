use std::sync::{Arc, Mutex};

use jsondoc::{
    editable_rows, flatten, render_address, ContentsMirror, DocumentStore, EditSession,
    Projection, Row, StoreEvent, StoreOptions, StoreState, TreeView,
};
use jsondoc_path::path;
use serde_json::json;

fn wired_store() -> (DocumentStore, TreeView, ContentsMirror) {
    let tree = TreeView::new();
    let mirror = ContentsMirror::new();
    let mut store = DocumentStore::new(StoreOptions::default());
    store.subscribe(tree.clone());
    store.subscribe(mirror.clone());
    (store, tree, mirror)
}

#[test]
fn edit_user_name_through_session() {
    let (mut store, tree, mirror) = wired_store();
    store
        .load(r#"{"user":{"name":"Ann","tags":["x"]}}"#)
        .expect("load");

    let node = tree.node_at(&path!["user"]).expect("user node");
    assert_eq!(render_address(&node.path), "$[\"user\"]");

    let mut session = EditSession::open(&node);
    assert_eq!(session.rows(), vec![Row::new("name", "Ann")]);
    session.set("name", "Bob").expect("row exists");
    let report = session.commit(&mut store);

    assert!(report.is_complete());
    assert_eq!(
        store.document().unwrap(),
        json!({"user": {"name": "Bob", "tags": ["x"]}})
    );
    assert_eq!(mirror.contents().as_deref(), Some(store.read()));
    let rebuilt = tree.node_at(&path!["user"]).unwrap();
    assert_eq!(editable_rows(&rebuilt), vec![Row::new("name", "Bob")]);
}

#[test]
fn replace_empty_document_with_sequence() {
    let (mut store, tree, _) = wired_store();
    store.load("{}").unwrap();
    store.apply_path_update(&[], "[1,2,3]").unwrap();

    assert_eq!(store.document().unwrap(), json!([1, 2, 3]));
    assert_eq!(tree.len(), 3);
    assert_eq!(
        flatten(&tree.node_at(&path![2usize]).unwrap()),
        Projection::Block("3".into())
    );
}

#[test]
fn literal_and_raw_row_values() {
    let (mut store, _, _) = wired_store();
    store.load(r#"{"n":"","s":""}"#).unwrap();
    let report = store.commit_rows(&[], &[Row::new("n", "42"), Row::new("s", "hello")]);

    assert!(report.is_complete());
    assert_eq!(store.get(&path!["n"]), Some(json!(42)));
    assert_eq!(store.get(&path!["s"]), Some(json!("hello")));
}

#[test]
fn later_rows_see_earlier_rows_and_failures_are_independent() {
    let (mut store, _, mirror) = wired_store();
    store.load(r#"{"a":{"b":1}}"#).unwrap();

    let rows = [
        Row::new("a", "\"flat\""),
        Row::new("c", "true"),
    ];
    let report = store.commit_rows(&[], &rows);
    assert!(report.is_complete());
    assert_eq!(store.document().unwrap(), json!({"a": "flat", "c": true}));

    // "a" is now a string, so writing under it fails while "d" still lands.
    let report = store.commit_rows(&path!["a"], &[Row::new("x", "1")]);
    assert_eq!(report.applied(), 0);
    let report = store.commit_rows(&[], &[Row::new("d", "null")]);
    assert!(report.is_complete());
    assert_eq!(
        store.document().unwrap(),
        json!({"a": "flat", "c": true, "d": null})
    );
    // one load + one per successful row
    assert_eq!(mirror.revision(), 4);
}

#[test]
fn clear_empties_tree_but_keeps_mirror() {
    let (mut store, tree, mirror) = wired_store();
    store.load(r#"{"a":1}"#).unwrap();
    let mirrored = mirror.contents();

    store.clear();
    assert_eq!(store.state(), StoreState::Ready);
    assert_eq!(store.read(), "{}");
    assert!(tree.is_empty());
    assert_eq!(mirror.contents(), mirrored);
}

#[test]
fn reload_own_text_is_stable() {
    let (mut store, tree, _) = wired_store();
    store
        .load(r#"{"z":[{"k":1.5,"tiny":1.0715660391465826e-75}],"a":{"b":[null,false,"s"]}}"#)
        .unwrap();
    let text = store.read().to_string();
    let nodes = tree.nodes();

    store.load(&text).unwrap();
    assert_eq!(store.read(), text);
    assert_eq!(tree.nodes(), nodes);
    assert_eq!(tree.rebuilds(), 2);
}

#[test]
fn events_arrive_in_subscription_order() {
    let mut store = DocumentStore::default();
    let tree = TreeView::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&order);
    let tree_handle = tree.clone();
    store.subscribe(tree.clone());
    store.on_change(move |ev| {
        if let StoreEvent::Loaded { .. } = ev {
            // the tree subscriber ran first
            seen.lock().unwrap().push(tree_handle.len());
        }
    });

    store.load(r#"{"a":{"b":{}}}"#).unwrap();
    assert_eq!(order.lock().unwrap().as_slice(), &[3]);
}

#[test]
fn cancelled_session_changes_nothing() {
    let (mut store, tree, mirror) = wired_store();
    store.load(r#"{"name":"Ann"}"#).unwrap();
    let revision = mirror.revision();

    let mut session = EditSession::open(&tree.node_at(&[]).unwrap());
    session.set("name", "Bob").unwrap();
    session.cancel();

    assert_eq!(store.get(&path!["name"]), Some(json!("Ann")));
    assert_eq!(mirror.revision(), revision);
}
