//! Descriptor assembly.
//!
//! For one node: look up the rule list for its kind (and variant), resolve
//! each rule's anchor, collect the adjacent trivia, and store it under the
//! rule's tag. An optional rule whose anchor is absent is left out; a
//! mandatory one, like any other precondition violation, aborts the node and
//! names the rule.

use bal_ir::{ConstructKind, NodeId, SyntaxTree, TokenIdx, TokenStream};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{
    boundary, collect, rules_for, AssembleError, Direction, RuleVariant, Selector, TriviaError,
    WhitespaceDescriptor,
};

/// Descriptors keyed by the node they describe.
pub type DescriptorMap = FxHashMap<NodeId, WhitespaceDescriptor>;

/// Read-only view over one parsed file.
///
/// Borrows the producer's token stream and tree; holds no other state, so
/// it is `Copy` and may be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct WhitespaceExtractor<'a> {
    stream: &'a TokenStream,
    tree: &'a SyntaxTree,
}

impl<'a> WhitespaceExtractor<'a> {
    pub fn new(stream: &'a TokenStream, tree: &'a SyntaxTree) -> Self {
        WhitespaceExtractor { stream, tree }
    }

    #[inline]
    pub fn stream(&self) -> &'a TokenStream {
        self.stream
    }

    #[inline]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Whitespace and comments before the first significant token.
    pub fn file_start_whitespace(&self) -> Result<String, TriviaError> {
        collect::file_start_whitespace(self.stream)
    }

    /// Resolve a boundary selector against `node`.
    pub fn resolve(
        &self,
        node: NodeId,
        selector: Selector,
    ) -> Result<Option<TokenIdx>, TriviaError> {
        boundary::resolve(self.stream, self.tree, node, selector)
    }

    /// Trivia adjacent to `idx` on one side.
    pub fn collect(&self, idx: TokenIdx, direction: Direction) -> Result<String, TriviaError> {
        collect::collect(self.stream, idx, direction)
    }

    /// Assemble the descriptor of `node` using its own construct kind.
    pub fn assemble(&self, node: NodeId) -> Result<WhitespaceDescriptor, AssembleError> {
        let data = self.tree.get(node).ok_or(AssembleError {
            node,
            tag: None,
            source: TriviaError::UnknownNode { node },
        })?;
        let kind = data.construct_kind().ok_or(AssembleError {
            node,
            tag: None,
            source: TriviaError::NotAConstruct { node },
        })?;
        self.assemble_as(node, kind)
    }

    /// Assemble the descriptor of `node` treating it as a `kind` construct.
    ///
    /// For producers that track construct kinds outside the tree.
    pub fn assemble_as(
        &self,
        node: NodeId,
        kind: ConstructKind,
    ) -> Result<WhitespaceDescriptor, AssembleError> {
        let fail = |tag, source| AssembleError { node, tag, source };

        let data = self
            .tree
            .get(node)
            .ok_or_else(|| fail(None, TriviaError::UnknownNode { node }))?;
        let variant = RuleVariant::detect(kind, self.stream, data).map_err(|e| fail(None, e))?;

        let mut descriptor = WhitespaceDescriptor::new(kind);
        for rule in rules_for(kind, variant) {
            let anchor = self
                .resolve(node, rule.selector)
                .map_err(|e| fail(Some(rule.tag), e))?;
            let Some(anchor) = anchor else {
                if !rule.optional {
                    return Err(fail(
                        Some(rule.tag),
                        TriviaError::MissingChild {
                            node,
                            selector: rule.selector,
                        },
                    ));
                }
                trace!(%node, tag = %rule.tag, "optional region absent");
                continue;
            };
            let text = self
                .collect(anchor, rule.direction)
                .map_err(|e| fail(Some(rule.tag), e))?;
            descriptor.insert(rule.tag, text);
        }

        debug!(%node, %kind, ?variant, regions = descriptor.len(), "assembled whitespace descriptor");
        Ok(descriptor)
    }

    /// Assemble every construct node of the tree in parallel.
    ///
    /// Any failing node aborts the batch; the error names that node and
    /// rule.
    pub fn assemble_all(&self) -> Result<DescriptorMap, AssembleError> {
        let nodes: Vec<NodeId> = self.tree.construct_nodes().collect();
        let descriptors = nodes
            .par_iter()
            .map(|&node| self.assemble(node).map(|descriptor| (node, descriptor)))
            .collect::<Result<DescriptorMap, AssembleError>>()?;
        debug!(nodes = descriptors.len(), "assembled descriptors for tree");
        Ok(descriptors)
    }
}
