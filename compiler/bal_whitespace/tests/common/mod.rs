//! Test fixtures: a minimal scanner and tree builder for the constructs the
//! rule table covers.
//!
//! The scanner routes whitespace runs and `//` line comments to the trivia
//! channel; words (letters, digits, `_`, `.`), string literals, and single
//! punctuation characters are significant. The tree builder recognizes just
//! enough structure to hand the extractor realistic nodes.

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "shared test support; not every test binary uses every helper"
)]

use bal_ir::{
    Channel, Child, ChildField, ConstructKind, NodeData, NodeId, SyntaxTree, TokenIdx,
    TokenStream,
};
use bal_whitespace::{rules_for, Direction, RuleVariant, WhitespaceDescriptor, WhitespaceExtractor};
use pretty_assertions::assert_eq;

/// A scanned and tree-built source file.
pub struct Parsed {
    pub stream: TokenStream,
    pub tree: SyntaxTree,
    /// Top-level construct nodes in source order.
    pub top: Vec<NodeId>,
}

impl Parsed {
    pub fn extractor(&self) -> WhitespaceExtractor<'_> {
        WhitespaceExtractor::new(&self.stream, &self.tree)
    }

    /// The only top-level construct.
    pub fn single(&self) -> NodeId {
        assert_eq!(self.top.len(), 1, "expected exactly one top-level construct");
        self.top[0]
    }

    pub fn descriptor(&self, node: NodeId) -> WhitespaceDescriptor {
        self.extractor()
            .assemble(node)
            .unwrap_or_else(|e| panic!("assembly failed: {e}"))
    }

    /// All construct nodes of `kind`, in allocation order.
    pub fn nodes_of(&self, kind: ConstructKind) -> Vec<NodeId> {
        self.tree
            .iter()
            .filter(|(_, data)| data.construct_kind() == Some(kind))
            .map(|(id, _)| id)
            .collect()
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Split `source` into significant and trivia tokens.
pub fn lex(source: &str) -> TokenStream {
    let mut builder = TokenStream::builder();
    let mut rest = source;
    while let Some(c) = rest.chars().next() {
        let (len, channel) = if c.is_whitespace() {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            (len, Channel::Trivia)
        } else if rest.starts_with("//") {
            (rest.find('\n').map_or(rest.len(), |i| i + 1), Channel::Trivia)
        } else if c == '"' {
            (rest[1..].find('"').map_or(rest.len(), |i| i + 2), Channel::Significant)
        } else if is_word(c) {
            let len = rest.find(|c: char| !is_word(c)).unwrap_or(rest.len());
            (len, Channel::Significant)
        } else {
            (c.len_utf8(), Channel::Significant)
        };
        let (text, tail) = rest.split_at(len);
        builder.push(text, channel);
        rest = tail;
    }
    builder.finish()
}

/// Scan `source` and build nodes for every top-level construct.
pub fn parse(source: &str) -> Parsed {
    parse_stream(lex(source))
}

/// Build nodes over an already-scanned stream.
pub fn parse_stream(stream: TokenStream) -> Parsed {
    let sig: Vec<TokenIdx> = stream
        .iter()
        .filter(|token| token.channel.is_significant())
        .map(|token| token.index)
        .collect();
    let mut builder = TreeBuilder {
        stream: &stream,
        sig,
        tree: SyntaxTree::new(),
    };

    let mut top = Vec::new();
    let mut pos = 0;
    while pos < builder.sig.len() {
        let keyword = builder.text(pos).to_owned();
        let (node, end) = match keyword.as_str() {
            "package" => builder.package(pos),
            "import" => builder.import(pos),
            "service" => builder.service(pos),
            "connector" => builder.connector(pos),
            "function" | "native" => builder.function(pos),
            "@" => builder.annotation(pos),
            other => panic!("unexpected top-level token {other:?}"),
        };
        top.push(node);
        pos = end + 1;
    }

    let tree = builder.tree;
    Parsed { stream, tree, top }
}

/// Builds nodes over positions in the significant-token list.
struct TreeBuilder<'s> {
    stream: &'s TokenStream,
    sig: Vec<TokenIdx>,
    tree: SyntaxTree,
}

impl TreeBuilder<'_> {
    fn text(&self, pos: usize) -> &str {
        &self.stream.get(self.sig[pos]).unwrap().text
    }

    fn tok(&self, pos: usize) -> TokenIdx {
        self.sig[pos]
    }

    fn text_at(&self, pos: usize) -> Option<&str> {
        (pos < self.sig.len()).then(|| self.text(pos))
    }

    fn find(&self, text: &str, from: usize) -> usize {
        (from..self.sig.len())
            .find(|&pos| self.text(pos) == text)
            .unwrap_or_else(|| panic!("no {text:?} after position {from}"))
    }

    /// Position of the bracket closing the one at `open`.
    fn matching(&self, open: usize) -> usize {
        let (open_text, close_text) = match self.text(open) {
            "(" => ("(", ")"),
            "{" => ("{", "}"),
            other => panic!("{other:?} is not an opening bracket"),
        };
        let mut depth = 0usize;
        for pos in open..self.sig.len() {
            if self.text(pos) == open_text {
                depth += 1;
            } else if self.text(pos) == close_text {
                depth -= 1;
                if depth == 0 {
                    return pos;
                }
            }
        }
        panic!("unbalanced {open_text:?} at position {open}")
    }

    fn with_tokens(&self, mut node: NodeData, from: usize, to: usize) -> NodeData {
        for pos in from..=to {
            node = node.with_token(self.tok(pos));
        }
        node
    }

    fn inner(&mut self, from: usize, to: usize) -> NodeId {
        let node = self.with_tokens(NodeData::inner(self.tok(from), self.tok(to)), from, to);
        self.tree.alloc(node)
    }

    fn construct(&self, kind: ConstructKind, from: usize, to: usize) -> NodeData {
        NodeData::construct(kind, self.tok(from), self.tok(to))
    }

    /// `package <name> ;`
    fn package(&mut self, from: usize) -> (NodeId, usize) {
        let semi = self.find(";", from);
        let name = self.inner(from + 1, from + 1);
        let node = self
            .construct(ConstructKind::PackageDeclaration, from, semi)
            .with_token(self.tok(from))
            .with_node(name)
            .with_token(self.tok(semi))
            .with_field(ChildField::PackageName, Child::Node(name));
        (self.tree.alloc(node), semi)
    }

    /// `import <name> [as <alias>] ;`
    fn import(&mut self, from: usize) -> (NodeId, usize) {
        let semi = self.find(";", from);
        let name = self.inner(from + 1, from + 1);
        let mut node = self
            .construct(ConstructKind::ImportDeclaration, from, semi)
            .with_token(self.tok(from))
            .with_node(name)
            .with_field(ChildField::PackageName, Child::Node(name));
        if self.text(from + 2) == "as" {
            let alias = self.tok(from + 3);
            node = node
                .with_token(self.tok(from + 2))
                .with_token(alias)
                .with_field(ChildField::Alias, Child::Token(alias));
        }
        let node = node.with_token(self.tok(semi));
        (self.tree.alloc(node), semi)
    }

    /// `@ <name> { <key> : <value> [, ...] }`
    fn annotation(&mut self, from: usize) -> (NodeId, usize) {
        let open = from + 2;
        let close = self.matching(open);
        let name = self.inner(from + 1, from + 1);
        let mut node = self
            .construct(ConstructKind::AnnotationAttachment, from, close)
            .with_token(self.tok(from))
            .with_node(name)
            .with_token(self.tok(open))
            .with_field(ChildField::NameReference, Child::Node(name));

        let mut pos = open + 1;
        while pos < close {
            let (key, colon, value) = (pos, pos + 1, pos + 2);
            let value_node = self.construct(ConstructKind::AnnotationAttributeValue, value, value);
            let value_node = self.tree.alloc(value_node.with_token(self.tok(value)));
            let attribute = self
                .construct(ConstructKind::AnnotationAttribute, key, value)
                .with_token(self.tok(key))
                .with_token(self.tok(colon))
                .with_node(value_node)
                .with_field(ChildField::Identifier, Child::Token(self.tok(key)));
            node = node.with_node(self.tree.alloc(attribute));
            pos = value + 1;
            if self.text(pos) == "," {
                node = node.with_token(self.tok(pos));
                pos += 1;
            }
        }
        let node = node.with_token(self.tok(close));
        (self.tree.alloc(node), close)
    }

    /// `{ ... }` with every inner token as a direct child.
    fn body(&mut self, open: usize) -> (NodeId, usize) {
        let close = self.matching(open);
        (self.inner(open, close), close)
    }

    /// `service <name> { [resource ...]* }`
    fn service(&mut self, from: usize) -> (NodeId, usize) {
        let open = from + 2;
        let close = self.matching(open);
        let mut body = NodeData::inner(self.tok(open), self.tok(close)).with_token(self.tok(open));
        let mut pos = open + 1;
        while pos < close {
            if matches!(self.text(pos), "@" | "resource") {
                let (resource, end) = self.resource(pos);
                body = body.with_node(resource);
                pos = end + 1;
            } else {
                body = body.with_token(self.tok(pos));
                pos += 1;
            }
        }
        let body = self.tree.alloc(body.with_token(self.tok(close)));
        let node = self
            .construct(ConstructKind::ServiceDefinition, from, close)
            .with_token(self.tok(from))
            .with_token(self.tok(from + 1))
            .with_node(body)
            .with_field(ChildField::Identifier, Child::Token(self.tok(from + 1)))
            .with_field(ChildField::Body, Child::Node(body));
        (self.tree.alloc(node), close)
    }

    /// `[@annotation] resource <name> ( <params> ) { ... }`
    fn resource(&mut self, from: usize) -> (NodeId, usize) {
        let annotation = (self.text(from) == "@").then(|| self.annotation(from));
        let keyword = annotation.map_or(from, |(_, end)| end + 1);
        let ident = keyword + 1;
        let close_paren = self.matching(keyword + 2);
        let (body, close) = self.body(close_paren + 1);

        let mut node = self.construct(ConstructKind::ResourceDefinition, from, close);
        if let Some((annotation, _)) = annotation {
            node = node.with_node(annotation);
        }
        let node = self
            .with_tokens(node, keyword, close_paren)
            .with_node(body)
            .with_field(ChildField::Identifier, Child::Token(self.tok(ident)))
            .with_field(ChildField::Body, Child::Node(body));
        (self.tree.alloc(node), close)
    }

    /// `[native] function <name> ( <params> ) [( <returns> )] [throws <id>] ({ ... } | ;)`
    fn function(&mut self, from: usize) -> (NodeId, usize) {
        let native = self.text(from) == "native";
        let keyword = if native { from + 1 } else { from };
        let ident = keyword + 1;
        let close_paren = self.matching(ident + 1);

        let mut signature_end = close_paren;
        let mut returns = None;
        if self.text_at(signature_end + 1) == Some("(") {
            let returns_close = self.matching(signature_end + 1);
            returns = Some(self.inner(signature_end + 1, returns_close));
            signature_end = returns_close;
        }
        let throws = (self.text_at(signature_end + 1) == Some("throws")).then_some(signature_end + 1);
        if throws.is_some() {
            signature_end += 2;
        }

        let mut signature = self.with_tokens(
            NodeData::inner(self.tok(ident), self.tok(signature_end)),
            ident,
            close_paren,
        );
        if let Some(returns) = returns {
            signature = signature.with_node(returns);
        }
        if let Some(throws) = throws {
            signature = self.with_tokens(signature, throws, throws + 1);
        }
        let signature = self.tree.alloc(signature);

        let after = signature_end + 1;
        let (tail, end) = if self.text(after) == "{" {
            let (body, close) = self.body(after);
            (Child::Node(body), close)
        } else {
            (Child::Token(self.tok(after)), after)
        };

        let mut node = self.construct(ConstructKind::FunctionDefinition, from, end);
        node = self.with_tokens(node, from, keyword).with_node(signature);
        node = match tail {
            Child::Node(body) => node
                .with_node(body)
                .with_field(ChildField::Body, Child::Node(body)),
            Child::Token(semi) => node.with_token(semi),
        };
        node = node
            .with_field(ChildField::Identifier, Child::Token(self.tok(ident)))
            .with_field(ChildField::Signature, Child::Node(signature));
        if let Some(returns) = returns {
            node = node.with_field(ChildField::ReturnParameters, Child::Node(returns));
        }
        (self.tree.alloc(node), end)
    }

    /// `connector <name> ( <params> ) { ... }`
    fn connector(&mut self, from: usize) -> (NodeId, usize) {
        let close_paren = self.matching(from + 2);
        let (body, close) = self.body(close_paren + 1);
        let node = self.construct(ConstructKind::ConnectorDefinition, from, close);
        let node = self
            .with_tokens(node, from, close_paren)
            .with_node(body)
            .with_field(ChildField::Identifier, Child::Token(self.tok(from + 1)))
            .with_field(ChildField::Body, Child::Node(body));
        (self.tree.alloc(node), close)
    }
}

/// Source text between `anchor` and the nearest significant token on one
/// side (or the file edge), computed from spans alone.
pub fn expected_gap(stream: &TokenStream, anchor: TokenIdx, direction: Direction) -> &str {
    let source = stream.source();
    let token = stream.get(anchor).unwrap();
    match direction {
        Direction::Right => {
            let end = stream.as_slice()[anchor.index() + 1..]
                .iter()
                .find(|t| t.channel.is_significant())
                .map_or(source.len(), |t| t.span.start as usize);
            &source[token.span.end as usize..end]
        }
        Direction::Left => {
            let start = stream.as_slice()[..anchor.index()]
                .iter()
                .rev()
                .find(|t| t.channel.is_significant())
                .map_or(0, |t| t.span.end as usize);
            &source[start..token.span.start as usize]
        }
    }
}

/// Check every region of every construct against the original source.
///
/// Present regions must equal the source slice next to their anchor; optional
/// rules whose anchor is absent must have no entry.
pub fn assert_round_trip(parsed: &Parsed) {
    let extractor = parsed.extractor();
    for node in parsed.tree.construct_nodes() {
        let descriptor = parsed.descriptor(node);
        let data = parsed.tree.get(node).unwrap();
        let variant = RuleVariant::detect(descriptor.kind(), &parsed.stream, data).unwrap();
        for rule in rules_for(descriptor.kind(), variant) {
            match extractor.resolve(node, rule.selector).unwrap() {
                Some(anchor) => assert_eq!(
                    descriptor.get(rule.tag),
                    Some(expected_gap(&parsed.stream, anchor, rule.direction)),
                    "{} of {node}",
                    rule.tag
                ),
                None => assert!(
                    !descriptor.contains(rule.tag),
                    "{} of {node} should be absent",
                    rule.tag
                ),
            }
        }
    }
}
