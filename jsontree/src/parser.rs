// SPDX-License-Identifier: Apache-2.0

use crate::arena::NodeArena;
use crate::document::Document;
use crate::node::{NodeId, NodeKind};
use crate::parse_error::{ErrorKind, ParseError};
use crate::scanner::Scanner;

/// Parses JSON text into a span tree over `input`.
///
/// The returned document borrows `input` for its whole lifetime; node spans
/// are offsets into it, never copies. Input that is empty or
/// whitespace-only is a successful parse with no root node. On failure no
/// tree is exposed and everything allocated along the way is discarded as
/// one unit.
///
/// # Example
/// ```
/// let doc = jsontree::parse(r#"{"answer": 42}"#).unwrap();
/// let root = doc.root().unwrap();
/// let member = root.find_member("answer").unwrap();
/// assert_eq!(member.first_child().unwrap().int_value(), 42);
/// ```
pub fn parse(input: &str) -> Result<Document<'_>, ParseError> {
    parse_slice(input.as_bytes())
}

/// Parses JSON from raw bytes. See [`parse`].
pub fn parse_slice(input: &[u8]) -> Result<Document<'_>, ParseError> {
    Parser::new(input).parse_document()
}

/// Grammar productions, one method per rule. Each consumes the scanner and
/// allocates nodes in the arena; any failure aborts the whole parse.
struct Parser<'a> {
    scanner: Scanner<'a>,
    arena: NodeArena,
    source: &'a [u8],
}

impl<'a> Parser<'a> {
    fn new(source: &'a [u8]) -> Self {
        Parser {
            scanner: Scanner::new(source),
            arena: NodeArena::new(),
            source,
        }
    }

    fn parse_document(mut self) -> Result<Document<'a>, ParseError> {
        self.scanner.skip_whitespace();
        if self.scanner.at_end() {
            // Absence of a value is tolerated at the top level.
            return Ok(Document::new(self.source, None, self.arena));
        }
        let root = self.parse_element()?;
        if !self.scanner.at_end() {
            return Err(self.error(ErrorKind::TrailingCharacters));
        }
        log::trace!("parsed {} bytes into {} nodes", self.source.len(), self.arena.len());
        Ok(Document::new(self.source, Some(root), self.arena))
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::at(self.source, self.scanner.pos(), kind)
    }

    /// element := ws value ws
    fn parse_element(&mut self) -> Result<NodeId, ParseError> {
        self.scanner.skip_whitespace();
        let value = self.parse_value()?;
        self.scanner.skip_whitespace();
        Ok(value)
    }

    /// value := object | array | string | number | "true" | "false" | "null"
    ///
    /// The grammar is LL(1): the first byte decides the production, and
    /// numbers share no leading byte with the keywords.
    fn parse_value(&mut self) -> Result<NodeId, ParseError> {
        if self.scanner.found(b'{') {
            return self.parse_object();
        }
        if self.scanner.found(b'[') {
            return self.parse_array();
        }
        if self.scanner.found(b'"') {
            return self.parse_string();
        }
        let number_start = self.scanner.pos();
        if self.scanner.found(b'-') || self.scanner.peek_digit() {
            return self.parse_number(number_start);
        }
        if self.scanner.found_keyword(b"true") {
            return Ok(self.arena.alloc(NodeKind::True, self.scanner.token_start()));
        }
        if self.scanner.found_keyword(b"false") {
            return Ok(self.arena.alloc(NodeKind::False, self.scanner.token_start()));
        }
        if self.scanner.found_keyword(b"null") {
            return Ok(self.arena.alloc(NodeKind::Null, self.scanner.token_start()));
        }
        Err(self.error(ErrorKind::ExpectedValue))
    }

    /// object := '{' ( members )? '}'
    ///
    /// The node is allocated before the body is inspected, so an empty
    /// object is exactly one node with no child.
    fn parse_object(&mut self) -> Result<NodeId, ParseError> {
        let node = self.arena.alloc(NodeKind::Object, self.scanner.token_start());
        self.scanner.skip_whitespace();
        if self.scanner.found(b'}') {
            return Ok(node);
        }
        let first = self.parse_members()?;
        self.arena.get_mut(node).child = Some(first);
        if !self.scanner.found(b'}') {
            return Err(self.error(ErrorKind::UnclosedObject));
        }
        Ok(node)
    }

    /// members := member ( ',' member )*
    fn parse_members(&mut self) -> Result<NodeId, ParseError> {
        let first = self.parse_member()?;
        let mut prev = first;
        while self.scanner.found(b',') {
            let next = self.parse_member()?;
            self.arena.get_mut(prev).sibling = Some(next);
            prev = next;
        }
        Ok(first)
    }

    /// member := ws string ':' element
    ///
    /// The member node carries the key's span directly; the key never gets
    /// a node of its own.
    fn parse_member(&mut self) -> Result<NodeId, ParseError> {
        self.scanner.skip_whitespace();
        if !self.scanner.found(b'"') {
            return Err(self.error(ErrorKind::ExpectedKey));
        }
        let member = self.arena.alloc(NodeKind::Member, self.scanner.pos());
        self.finish_string_body()?;
        self.scanner.skip_whitespace();
        if !self.scanner.found(b':') {
            return Err(self.error(ErrorKind::ExpectedColon));
        }
        let value = self.parse_element()?;
        self.arena.get_mut(member).child = Some(value);
        Ok(member)
    }

    /// array := '[' ( elements )? ']'
    fn parse_array(&mut self) -> Result<NodeId, ParseError> {
        let node = self.arena.alloc(NodeKind::Array, self.scanner.token_start());
        self.scanner.skip_whitespace();
        if self.scanner.found(b']') {
            return Ok(node);
        }
        let first = self.parse_elements()?;
        self.arena.get_mut(node).child = Some(first);
        if !self.scanner.found(b']') {
            return Err(self.error(ErrorKind::UnclosedArray));
        }
        Ok(node)
    }

    /// elements := element ( ',' element )*
    ///
    /// Siblings are linked left to right, tracking first and previous once
    /// per item; lookup of the first element stays O(1).
    fn parse_elements(&mut self) -> Result<NodeId, ParseError> {
        let first = self.parse_element()?;
        let mut prev = first;
        while self.scanner.found(b',') {
            let next = self.parse_element()?;
            self.arena.get_mut(prev).sibling = Some(next);
            prev = next;
        }
        Ok(first)
    }

    /// string := '"' ( printable-ascii-except-quote )* '"'
    ///
    /// Called with the opening quote already consumed; the span starts at
    /// the first content byte.
    fn parse_string(&mut self) -> Result<NodeId, ParseError> {
        let node = self.arena.alloc(NodeKind::String, self.scanner.pos());
        self.finish_string_body()?;
        Ok(node)
    }

    /// Consumes the string body and the closing quote.
    fn finish_string_body(&mut self) -> Result<(), ParseError> {
        while self.scanner.found_string_byte() {}
        if !self.scanner.found(b'"') {
            if self.scanner.at_end() {
                return Err(self.error(ErrorKind::UnterminatedString));
            }
            return Err(self.error(ErrorKind::InvalidStringByte));
        }
        Ok(())
    }

    /// number := '-'? digit+ ( '.' digit* )?
    ///
    /// Called with an optional leading minus already consumed and `start`
    /// pointing at it (or at the first digit). A lone `-` fails; `0.` is
    /// accepted, the fraction may be empty.
    fn parse_number(&mut self, start: usize) -> Result<NodeId, ParseError> {
        let node = self.arena.alloc(NodeKind::Number, start);
        if !self.scanner.found_digit() {
            return Err(self.error(ErrorKind::ExpectedDigit));
        }
        while self.scanner.found_digit() {}
        if self.scanner.found(b'.') {
            while self.scanner.found_digit() {}
        }
        Ok(node)
    }
}
