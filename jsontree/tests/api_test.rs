// SPDX-License-Identifier: Apache-2.0

// Exercises the public API end to end: parse, navigate, query, validate.

use jsontree::{parse, NodeKind};
use test_log::test;

#[test]
fn array_traversal_in_source_order() {
    let doc = parse("[0,1,2,3,4,5,6,7,8,9]").unwrap();
    let root = doc.root().unwrap();
    assert_eq!(root.kind(), NodeKind::Array);

    let mut element = root.first_child();
    for expected in 0..10 {
        let node = element.expect("array ended early");
        assert_eq!(node.kind(), NodeKind::Number);
        assert_eq!(node.int_value(), expected);
        element = node.next_sibling();
    }
    assert!(element.is_none(), "array has an eleventh element");
}

#[test]
fn keyword_literals() {
    let doc = parse("[true,false,null]").unwrap();
    let root = doc.root().unwrap();

    let first = root.first_child().unwrap();
    assert_eq!(first.kind(), NodeKind::True);
    let second = first.next_sibling().unwrap();
    assert_eq!(second.kind(), NodeKind::False);
    let third = second.next_sibling().unwrap();
    assert_eq!(third.kind(), NodeKind::Null);
    assert!(third.next_sibling().is_none());
}

#[test]
fn member_lookup() {
    let doc = parse(r#"{"a":0,"b":1,"c":2}"#).unwrap();
    let root = doc.root().unwrap();

    let member = root.find_member("b").unwrap();
    assert_eq!(member.kind(), NodeKind::Member);
    let value = member.first_child().unwrap();
    assert_eq!(value.kind(), NodeKind::Number);
    assert_eq!(value.int_value(), 1);

    assert!(root.find_member("d").is_none());
}

#[test]
fn string_identity() {
    let doc = parse(r#""Hello World!""#).unwrap();
    let root = doc.root().unwrap();
    assert_eq!(root.kind(), NodeKind::String);
    assert!(root.string_eq("Hello World!"));
    assert_eq!(root.string_len(), 12);
}

#[test]
fn string_contents() {
    // The full printable repertoire the grammar accepts.
    for input in [
        r#""Hello World!""#,
        r#""0123456789""#,
        r#""abcdefghijklmnopqrstuvwxyz""#,
        r#""ABCDEFGHIJKLMNOPQRSTUVWXYZ""#,
        r#""!$%^&*()_+-=<>,./?'@#~[]{}`""#,
    ] {
        let doc = parse(input).unwrap();
        let root = doc.root().unwrap();
        assert!(
            root.string_eq(&input[1..input.len() - 1]),
            "span mismatch for {input}"
        );
    }
}

#[test]
fn numeric_round_trip() {
    let doc = parse("123.456").unwrap();
    assert_eq!(doc.root().unwrap().float_value(), 123.456);

    let doc = parse("-0").unwrap();
    assert_eq!(doc.root().unwrap().float_value(), 0.0);

    let doc = parse("0.").unwrap();
    assert_eq!(doc.root().unwrap().float_value(), 0.0);
}

#[test]
fn accepted_inputs_validate() {
    for input in [
        "{}",
        "[]",
        "0",
        "-1.5",
        "true",
        "false",
        "null",
        r#""""#,
        r#"{"a":{"b":{"c":[1,2,3]}}}"#,
        r#"[{"x":0.5},{"y":[true,null]},[],{}]"#,
        "  [ 1 , 2 ,\t3\r\n]  ",
    ] {
        let doc = parse(input).unwrap();
        doc.root().unwrap().validate();
    }
}

#[test]
fn empty_input_is_a_document_without_root() {
    for input in ["", "   ", "\t\r\n"] {
        let doc = parse(input).unwrap();
        assert!(doc.root().is_none());
        assert_eq!(doc.node_count(), 0);
    }
}

#[test]
fn allocation_accounting() {
    // One node per container even when the body is empty, one node per
    // member key, nothing else.
    assert_eq!(parse("{}").unwrap().node_count(), 1);
    assert_eq!(parse("[]").unwrap().node_count(), 1);
    assert_eq!(parse(r#"{"a":0}"#).unwrap().node_count(), 3);
    assert_eq!(parse("[0,1,2]").unwrap().node_count(), 4);
    assert_eq!(parse(r#"{"a":[true],"b":{}}"#).unwrap().node_count(), 6);
}

#[test]
fn release_is_whole_document() {
    let source = String::from("[1,2,3]");
    let doc = parse(&source).unwrap();
    assert_eq!(doc.node_count(), 4);
    drop(doc);
    // A second drop of `doc` would not compile; release is total and runs
    // exactly once.
}

#[test]
fn parse_slice_matches_parse() {
    let doc = jsontree::parse_slice(b"[1]").unwrap();
    assert_eq!(doc.root().unwrap().first_child().unwrap().int_value(), 1);
}
