// SPDX-License-Identifier: Apache-2.0

// Loads a JSON file, parses it, validates the tree and pretty-prints it.
// Everything here is a consumer of the public jsontree API.

use std::env;
use std::fs;
use std::process;

use jsontree::{NodeKind, NodeRef};

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} file.json", args[0]);
        process::exit(1);
    }
    let path = &args[1];
    let source = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: unable to read '{}': {}", path, e);
            process::exit(1);
        }
    };

    let document = match jsontree::parse_slice(&source) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            process::exit(1);
        }
    };

    if let Some(root) = document.root() {
        root.validate();
        print_node(&source, root, 0);
        println!();
    }
}

fn indent(depth: usize) {
    for _ in 0..depth {
        print!("  ");
    }
}

fn print_node(source: &[u8], node: NodeRef<'_>, depth: usize) {
    match node.kind() {
        NodeKind::True => print!("true"),
        NodeKind::False => print!("false"),
        NodeKind::Null => print!("null"),
        NodeKind::Number => print!("{}", node.float_value()),
        NodeKind::String => print_quoted(source, node),
        NodeKind::Member => {
            print_quoted(source, node);
            print!(": ");
            if let Some(value) = node.first_child() {
                print_node(source, value, depth);
            }
        }
        NodeKind::Object => print_container(source, node, depth, '{', '}'),
        NodeKind::Array => print_container(source, node, depth, '[', ']'),
    }
}

fn print_quoted(source: &[u8], node: NodeRef<'_>) {
    let start = node.span_start();
    let text = &source[start..start + node.string_len()];
    // The grammar only admits printable ASCII inside strings.
    print!("\"{}\"", String::from_utf8_lossy(text));
}

fn print_container(source: &[u8], node: NodeRef<'_>, depth: usize, open: char, close: char) {
    if node.first_child().is_none() {
        print!("{}{}", open, close);
        return;
    }
    println!("{}", open);
    let mut child = node.first_child();
    while let Some(element) = child {
        indent(depth + 1);
        print_node(source, element, depth + 1);
        child = element.next_sibling();
        if child.is_some() {
            println!(",");
        } else {
            println!();
        }
    }
    indent(depth);
    print!("{}", close);
}
