//! Item and stack matching.
//!
//! [`Matcher::matches_item_or_stack`] is the entry point for highlighting:
//!
//! 1. An item inside an open stack matches when any member of that stack
//!    matches, so the whole stack lights up together.
//! 2. A closed item holding a stack matches when any contained member
//!    matches, even if its own name does not.
//! 3. Anything else is matched on its own metadata.
//!
//! An empty or whitespace-only query never matches anything.

use tracing::trace;

use crate::eval::evaluate;
use crate::fuzzy::FuzzyMatcher;
use crate::item::ItemView;
use crate::query::{parse_query, Query};
use crate::stack::{ItemId, Stack, StackLookup};

/// Evaluates search queries against items. Holds only fuzzy tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    fuzzy: FuzzyMatcher,
}

impl Matcher {
    pub fn new(fuzzy: FuzzyMatcher) -> Self {
        Self { fuzzy }
    }

    /// Check a single item against a raw query string.
    pub fn matches_item<I: ItemView + ?Sized>(&self, item: &I, raw: &str) -> bool {
        if raw.trim().is_empty() {
            return false;
        }
        self.matches_query(item, &parse_query(raw))
    }

    /// Check a single item against a parsed query.
    pub fn matches_query<I: ItemView + ?Sized>(&self, item: &I, query: &Query) -> bool {
        match query {
            Query::Name { text } if text.is_empty() => false,
            Query::Name { text } => item
                .name()
                .is_some_and(|name| self.fuzzy.contains(name, text)),
            Query::Property(property) => evaluate(property, item, &self.fuzzy),
        }
    }

    /// Check an item, taking stack membership into account.
    pub fn matches_item_or_stack<L: StackLookup + ?Sized>(
        &self,
        lookup: &L,
        id: ItemId,
        raw: &str,
    ) -> bool {
        if raw.trim().is_empty() {
            return false;
        }
        self.matches_query_or_stack(lookup, id, &parse_query(raw))
    }

    /// [`Matcher::matches_item_or_stack`] with a pre-parsed query.
    pub fn matches_query_or_stack<L: StackLookup + ?Sized>(
        &self,
        lookup: &L,
        id: ItemId,
        query: &Query,
    ) -> bool {
        if let Some(stack) = lookup.parent_stack(id) {
            return self.any_member(lookup, stack, query);
        }

        if let Some(stack) = lookup.contents_stack(id) {
            return self.any_member(lookup, stack, query);
        }

        lookup
            .item(id)
            .is_some_and(|item| self.matches_query(item, query))
    }

    /// Ids among `ids` that should be highlighted for `raw`, in the given
    /// order.
    pub fn highlighted<L, I>(&self, lookup: &L, ids: I, raw: &str) -> Vec<ItemId>
    where
        L: StackLookup + ?Sized,
        I: IntoIterator<Item = ItemId>,
    {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        let query = parse_query(raw);
        ids.into_iter()
            .filter(|&id| self.matches_query_or_stack(lookup, id, &query))
            .collect()
    }

    fn any_member<L: StackLookup + ?Sized>(
        &self,
        lookup: &L,
        stack: &Stack,
        query: &Query,
    ) -> bool {
        stack.members.iter().any(|&member| match lookup.item(member) {
            Some(item) => self.matches_query(item, query),
            None => {
                trace!(%member, "stack member does not resolve, skipping");
                false
            }
        })
    }
}

/// [`Matcher::matches_item`] with default fuzzy settings.
pub fn matches_item<I: ItemView + ?Sized>(item: &I, raw: &str) -> bool {
    Matcher::default().matches_item(item, raw)
}

/// [`Matcher::matches_item_or_stack`] with default fuzzy settings.
pub fn matches_item_or_stack<L: StackLookup + ?Sized>(lookup: &L, id: ItemId, raw: &str) -> bool {
    Matcher::default().matches_item_or_stack(lookup, id, raw)
}
