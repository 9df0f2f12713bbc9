use jsondoc_path::{
    format_json_pointer, get, parse_json_pointer, path, render_address, set, with_value,
    PathStep, PathTraversalError,
};
use serde_json::json;

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    let cases = ["", "/", "/foo", "/foo/bar", "/a~0b/c~1d", "/arr/0", "/~0/~1"];

    for pointer in cases {
        let path = parse_json_pointer(pointer).expect("absolute pointer");
        let out = format_json_pointer(&path);
        assert_eq!(out, pointer);
    }
}

#[test]
fn pointer_steps_become_addresses() {
    let cases = [
        ("", "$"),
        ("/user", "$[\"user\"]"),
        ("/user/tags/0", "$[\"user\"][\"tags\"][0]"),
        ("/a~1b/10", "$[\"a/b\"][10]"),
    ];
    for (pointer, address) in cases {
        let path = parse_json_pointer(pointer).unwrap();
        assert_eq!(render_address(&path), address, "pointer {pointer:?}");
    }
}

#[test]
fn set_matrix_user_document() {
    let doc = json!({"user": {"name": "Ann", "tags": ["x"]}});

    let renamed = with_value(doc.clone(), &path!["user", "name"], json!("Bob")).unwrap();
    assert_eq!(renamed, json!({"user": {"name": "Bob", "tags": ["x"]}}));

    let tagged = with_value(doc.clone(), &path!["user", "tags", 1usize], json!("y")).unwrap();
    assert_eq!(tagged, json!({"user": {"name": "Ann", "tags": ["x", "y"]}}));

    let aged = with_value(doc.clone(), &path!["user", "age"], json!(30)).unwrap();
    assert_eq!(
        aged.as_object().unwrap()["user"]
            .as_object()
            .unwrap()
            .keys()
            .collect::<Vec<_>>(),
        ["name", "tags", "age"]
    );

    let replaced = with_value(doc, &[], json!([1, 2, 3])).unwrap();
    assert_eq!(replaced, json!([1, 2, 3]));
}

#[test]
fn set_error_matrix() {
    let doc = json!({"user": {"name": "Ann", "tags": ["x"]}});
    let cases: Vec<(Vec<PathStep>, PathTraversalError)> = vec![
        (
            path!["user", "tags", 5usize],
            PathTraversalError::IndexOutOfBounds { depth: 2, index: 5, len: 1 },
        ),
        (
            path!["user", "tags", 4usize, "label"],
            PathTraversalError::IndexOutOfBounds { depth: 2, index: 4, len: 1 },
        ),
        (
            path!["user", "tags", "first"],
            PathTraversalError::KeyOnSequence { depth: 2, key: "first".into() },
        ),
        (
            path!["user", "name", "first"],
            PathTraversalError::NotAContainer { depth: 2, found: "string" },
        ),
    ];
    for (path, expected) in cases {
        let mut target = doc.clone();
        let err = set(&mut target, &path, json!(1)).expect_err("write must fail");
        assert_eq!(err, expected, "path {path:?}");
        assert_eq!(target, doc, "document changed for {path:?}");
    }
}

#[test]
fn get_after_pointer_parse() {
    let doc = json!({"foo": {"bar": [10, 20, null]}});
    assert_eq!(
        get(&doc, &parse_json_pointer("/foo/bar/0").unwrap()),
        Some(&json!(10))
    );
    assert_eq!(get(&doc, &parse_json_pointer("/foo/bar/3").unwrap()), None);
    assert_eq!(
        get(&doc, &parse_json_pointer("/foo/bar/2").unwrap()),
        Some(&json!(null))
    );
}
