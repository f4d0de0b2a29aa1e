//! seek: inventory search matching.
//!
//! Parses short search queries (`lp:>100`, `fep:str`, `bronze`) and decides
//! whether an item, or any member of its stack, should be highlighted.

pub mod compare;
pub mod config;
pub mod error;
pub mod eval;
pub mod fuzzy;
pub mod inventory;
pub mod item;
pub mod matcher;
pub mod query;
pub mod stack;

pub use compare::{compare, CompareOp, EQ_EPSILON};
pub use config::Config;
pub use error::{Error, Result};
pub use eval::evaluate;
pub use fuzzy::{fuzzy_contains, FuzzyMatcher};
pub use inventory::{Inventory, InventoryItem};
pub use item::{Contents, Curiosity, FoodEvent, FoodInfo, ItemMetadata, ItemView};
pub use matcher::{matches_item, matches_item_or_stack, Matcher};
pub use query::{parse_query, PropertyFilter, PropertyKind, PropertyQuery, Query};
pub use stack::{ItemId, Stack, StackId, StackLookup};
