//! Whitespace descriptors.

use std::collections::BTreeMap;
use std::fmt;

use bal_ir::ConstructKind;

use crate::RegionTag;

/// Recovered whitespace slots of one syntax node.
///
/// Maps each region tag whose anchor resolved to the exact trivia text
/// found there. A present tag may map to `""` (no whitespace); an optional
/// slot whose sub-construct is missing has no entry at all.
///
/// Iteration follows rule order. Built only by the assembler and
/// immutable afterward.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhitespaceDescriptor {
    kind: ConstructKind,
    regions: BTreeMap<RegionTag, String>,
}

impl WhitespaceDescriptor {
    pub(crate) fn new(kind: ConstructKind) -> Self {
        WhitespaceDescriptor {
            kind,
            regions: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, tag: RegionTag, text: String) {
        debug_assert_eq!(tag.kind(), self.kind, "region {tag} on a {} node", self.kind);
        self.regions.insert(tag, text);
    }

    /// The construct kind of the described node.
    #[inline]
    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    /// Whitespace text of a slot, or `None` when the slot is absent.
    pub fn get(&self, tag: impl Into<RegionTag>) -> Option<&str> {
        self.regions.get(&tag.into()).map(String::as_str)
    }

    pub fn contains(&self, tag: impl Into<RegionTag>) -> bool {
        self.regions.contains_key(&tag.into())
    }

    /// Number of present slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Present tags, in rule order.
    pub fn tags(&self) -> impl Iterator<Item = RegionTag> + '_ {
        self.regions.keys().copied()
    }

    /// Present slots with their text, in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionTag, &str)> {
        self.regions.iter().map(|(tag, text)| (*tag, text.as_str()))
    }
}

impl fmt::Debug for WhitespaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind)?;
        let mut map = f.debug_map();
        for (tag, text) in &self.regions {
            map.entry(&tag.as_str(), text);
        }
        map.finish()
    }
}
