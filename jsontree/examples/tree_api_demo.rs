// SPDX-License-Identifier: Apache-2.0

// Example demonstrating the tree API: parse once, then navigate and query
// nodes whose text still lives in the input buffer.

use jsontree::{NodeKind, ParseError};

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "number": 42.5, "flags": [true, false, null]}"#;
    let doc = jsontree::parse(json)?;
    println!("Input: {}", json);
    println!("Nodes allocated: {}", doc.node_count());

    let root = doc.root().expect("non-empty input");
    root.validate();

    let name = root.find_member("name").expect("name member");
    println!("name matches \"value\": {}", name.first_child().unwrap().string_eq("value"));

    let number = root.find_member("number").expect("number member");
    let value = number.first_child().unwrap();
    println!("number as int:   {}", value.int_value());
    println!("number as float: {}", value.float_value());

    let flags = root.find_member("flags").expect("flags member");
    let mut element = flags.first_child().unwrap().first_child();
    while let Some(node) = element {
        match node.kind() {
            NodeKind::True | NodeKind::False => println!("flag: {}", node.bool_value()),
            NodeKind::Null => println!("flag: null"),
            other => println!("unexpected {:?}", other),
        }
        element = node.next_sibling();
    }

    Ok(())
}
