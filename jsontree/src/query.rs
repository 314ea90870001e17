// SPDX-License-Identifier: Apache-2.0

//! Read-only interpretation of a finished tree.
//!
//! Every operation has a node-kind precondition. Violating one is a
//! programming contract failure, not a recoverable error: the methods panic
//! immediately instead of returning a sentinel that would silently misread
//! the tree.

use crate::document::NodeRef;
use crate::node::NodeKind;

impl<'a> NodeRef<'a> {
    /// Source bytes from this node's span start to the end of the buffer.
    fn span(&self) -> &'a [u8] {
        &self.source[self.span_start()..]
    }

    /// Integer value of a `Number` node.
    ///
    /// Re-scans the span as an optional minus followed by decimal digits,
    /// stopping at the first non-digit; a fractional part is deliberately
    /// ignored.
    ///
    /// # Panics
    /// If the node is not a `Number`.
    pub fn int_value(&self) -> i64 {
        assert!(
            self.kind() == NodeKind::Number,
            "int_value on a {:?} node",
            self.kind()
        );
        let (negative, digits) = split_sign(self.span());
        let mut value: i64 = 0;
        for &byte in digits {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value * 10 + i64::from(byte - b'0');
        }
        if negative {
            -value
        } else {
            value
        }
    }

    /// Floating-point value of a `Number` node.
    ///
    /// Re-scans the span as `-`? digits (`.` digits)?, accumulating the
    /// fractional digits against a power-of-ten divisor. A span with no
    /// digits at all yields `0.0`; that case is not reachable from a
    /// successful parse.
    ///
    /// # Panics
    /// If the node is not a `Number`.
    pub fn float_value(&self) -> f64 {
        assert!(
            self.kind() == NodeKind::Number,
            "float_value on a {:?} node",
            self.kind()
        );
        let (negative, rest) = split_sign(self.span());
        let mut value = 0.0f64;
        let mut index = 0;
        while index < rest.len() && rest[index].is_ascii_digit() {
            value = value * 10.0 + f64::from(rest[index] - b'0');
            index += 1;
        }
        if rest.get(index) == Some(&b'.') {
            index += 1;
            let mut fraction = 0.0f64;
            let mut divisor = 1.0f64;
            while index < rest.len() && rest[index].is_ascii_digit() {
                fraction = fraction * 10.0 + f64::from(rest[index] - b'0');
                divisor *= 10.0;
                index += 1;
            }
            value += fraction / divisor;
        }
        if negative {
            -value
        } else {
            value
        }
    }

    /// Compares the text of a `String` node, or the key of a `Member`,
    /// against `expected`.
    ///
    /// Bytes are compared until the closing quote (full match) or the first
    /// mismatch.
    ///
    /// # Panics
    /// If the node is neither a `String` nor a `Member`.
    pub fn string_eq(&self, expected: &str) -> bool {
        self.expect_stringish("string_eq");
        let span = self.span();
        let expected = expected.as_bytes();
        let mut index = 0;
        loop {
            let byte = span[index];
            if byte == b'"' {
                return index == expected.len();
            }
            if expected.get(index) != Some(&byte) {
                return false;
            }
            index += 1;
        }
    }

    /// Length of the text of a `String` node, or of a `Member` key:
    /// the distance from the span start to the closing quote.
    ///
    /// # Panics
    /// If the node is neither a `String` nor a `Member`.
    pub fn string_len(&self) -> usize {
        self.expect_stringish("string_len");
        let span = self.span();
        let mut length = 0;
        while span[length] != b'"' {
            length += 1;
        }
        length
    }

    /// Boolean value of a `True` or `False` node.
    ///
    /// # Panics
    /// If the node is any other kind.
    pub fn bool_value(&self) -> bool {
        match self.kind() {
            NodeKind::True => true,
            NodeKind::False => false,
            other => panic!("bool_value on a {:?} node", other),
        }
    }

    /// Looks up a member of an `Object` node by key.
    ///
    /// Linear scan over the member list comparing keys with [`string_eq`];
    /// returns the first match. No index is built.
    ///
    /// [`string_eq`]: NodeRef::string_eq
    ///
    /// # Panics
    /// If the node is not an `Object`.
    pub fn find_member(&self, key: &str) -> Option<NodeRef<'a>> {
        assert!(
            self.kind() == NodeKind::Object,
            "find_member on a {:?} node",
            self.kind()
        );
        let mut member = self.first_child();
        while let Some(node) = member {
            if node.string_eq(key) {
                return Some(node);
            }
            member = node.next_sibling();
        }
        None
    }

    /// Walks the subtree rooted here asserting the structural invariants:
    /// leaves carry no child, a member has exactly one child (its value,
    /// with no sibling), object children are members, and every span lies
    /// inside the source buffer.
    ///
    /// The parser guarantees all of this for the trees it produces; the
    /// walk exists as a consistency check for tests and for trees built by
    /// other means.
    ///
    /// # Panics
    /// If any invariant is violated.
    pub fn validate(&self) {
        let node = self.node();
        assert!(
            node.span_start <= self.source.len(),
            "node span outside the source buffer"
        );
        match node.kind {
            NodeKind::True
            | NodeKind::False
            | NodeKind::Null
            | NodeKind::String
            | NodeKind::Number => {
                assert!(node.child.is_none(), "{:?} node with a child", node.kind);
            }
            NodeKind::Member => {
                let value = self.first_child().expect("member node without a value");
                assert!(
                    value.next_sibling().is_none(),
                    "member value with a sibling"
                );
            }
            NodeKind::Object => {
                let mut member = self.first_child();
                while let Some(node) = member {
                    assert!(
                        node.kind() == NodeKind::Member,
                        "object child is a {:?} node, not a member",
                        node.kind()
                    );
                    member = node.next_sibling();
                }
            }
            NodeKind::Array => {}
        }
        // Depth-first over children; each child walks its own subtree and
        // we step along the sibling list iteratively.
        let mut child = self.first_child();
        while let Some(node) = child {
            node.validate();
            child = node.next_sibling();
        }
    }

    fn expect_stringish(&self, operation: &str) {
        assert!(
            matches!(self.kind(), NodeKind::String | NodeKind::Member),
            "{} on a {:?} node",
            operation,
            self.kind()
        );
    }
}

fn split_sign(span: &[u8]) -> (bool, &[u8]) {
    match span.first() {
        Some(b'-') => (true, &span[1..]),
        _ => (false, span),
    }
}
