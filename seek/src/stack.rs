//! Stack membership lookups.
//!
//! Items are addressed by [`ItemId`]. The host answers two questions about
//! an item: which open stack it currently sits in, and which stack it holds
//! while closed. The matcher only enumerates members; it never follows or
//! owns back-pointers.

use serde::{Deserialize, Serialize};

use crate::item::ItemView;

/// Identity of an item within a [`StackLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

/// Identity of a stack within a [`StackLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackId(pub usize);

/// An ordered group of items shown as one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stack {
    pub members: Vec<ItemId>,
}

/// Read access to items and their stack relations.
pub trait StackLookup {
    type Item: ItemView;

    /// Resolve an item by id.
    fn item(&self, id: ItemId) -> Option<&Self::Item>;

    /// Members of the stack `id` currently sits inside, if any.
    fn parent_stack(&self, id: ItemId) -> Option<&Stack>;

    /// Members of the stack held by `id` while it is closed, if any.
    fn contents_stack(&self, id: ItemId) -> Option<&Stack>;
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}
