//! Inventory snapshots.
//!
//! An [`Inventory`] is an arena of items and stacks addressed by index. It is
//! what `hsq` loads from disk and what tests build by hand.
//!
//! # Snapshot format
//!
//! ```json
//! {
//!   "items": [
//!     { "name": "Bronze Bar", "in_stack": 0 },
//!     { "name": "Bronze Bar", "in_stack": 0 },
//!     { "name": "Sack", "holds_stack": 1 },
//!     { "name": "Carrot", "in_stack": 1, "food": { "events": [ { "name": "Agility", "amount": 3 } ] } }
//!   ],
//!   "stacks": [ { "members": [0, 1] }, { "members": [3] } ]
//! }
//! ```
//!
//! TOML snapshots use the same shape (`[[items]]`, `[[stacks]]`).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::ItemMetadata;
use crate::stack::{ItemId, Stack, StackId, StackLookup};
use crate::{Error, Result};

/// One item of a snapshot with its stack relations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(flatten)]
    pub meta: ItemMetadata,
    /// Open stack this item currently sits in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stack: Option<StackId>,
    /// Stack this item holds while closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holds_stack: Option<StackId>,
}

/// Arena of items and stacks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub stacks: Vec<Stack>,
}

impl Inventory {
    /// Load a snapshot. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SnapshotNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let inventory = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        debug!(
            path = %path.display(),
            items = inventory.items.len(),
            stacks = inventory.stacks.len(),
            "loaded inventory snapshot"
        );
        Ok(inventory)
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let inventory: Inventory = serde_json::from_str(s)?;
        inventory.validate()?;
        Ok(inventory)
    }

    /// Parse and validate a TOML snapshot.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let inventory: Inventory = toml::from_str(s)?;
        inventory.validate()?;
        Ok(inventory)
    }

    /// Check that every stack reference resolves and that each item's
    /// `in_stack` lists it as a member.
    pub fn validate(&self) -> Result<()> {
        for (index, stack) in self.stacks.iter().enumerate() {
            if let Some(member) = stack.members.iter().find(|m| m.0 >= self.items.len()) {
                return Err(Error::InvalidSnapshot(format!(
                    "stack {} lists unknown item {}",
                    StackId(index),
                    member
                )));
            }
        }

        for (index, item) in self.items.iter().enumerate() {
            let id = ItemId(index);
            for stack_id in [item.in_stack, item.holds_stack].into_iter().flatten() {
                if stack_id.0 >= self.stacks.len() {
                    return Err(Error::InvalidSnapshot(format!(
                        "item {} refers to unknown stack {}",
                        id, stack_id
                    )));
                }
            }
            if let Some(stack_id) = item.in_stack {
                if !self.stacks[stack_id.0].members.contains(&id) {
                    return Err(Error::InvalidSnapshot(format!(
                        "item {} claims stack {} but is not one of its members",
                        id, stack_id
                    )));
                }
            }
        }

        Ok(())
    }

    /// All item ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> {
        (0..self.items.len()).map(ItemId)
    }

    /// Add a loose item.
    pub fn add_item(&mut self, meta: ItemMetadata) -> ItemId {
        self.items.push(InventoryItem {
            meta,
            ..Default::default()
        });
        ItemId(self.items.len() - 1)
    }

    /// Add a stack over existing items without touching their relations.
    pub fn add_stack(&mut self, members: Vec<ItemId>) -> StackId {
        self.stacks.push(Stack { members });
        StackId(self.stacks.len() - 1)
    }

    /// Append `item` to `stack` and record the membership on the item.
    pub fn place_in_stack(&mut self, item: ItemId, stack: StackId) {
        if let Some(entry) = self.items.get_mut(item.0) {
            entry.in_stack = Some(stack);
        }
        if let Some(entry) = self.stacks.get_mut(stack.0) {
            entry.members.push(item);
        }
    }

    /// Add an open stack of new items. Returns the stack and its members.
    pub fn add_open_stack(&mut self, members: Vec<ItemMetadata>) -> (StackId, Vec<ItemId>) {
        let stack = self.add_stack(Vec::new());
        let ids = members
            .into_iter()
            .map(|meta| {
                let id = self.add_item(meta);
                self.place_in_stack(id, stack);
                id
            })
            .collect();
        (stack, ids)
    }

    /// Add a closed container holding a new stack of `members`. Returns the
    /// container's id.
    pub fn add_closed_stack(
        &mut self,
        container: ItemMetadata,
        members: Vec<ItemMetadata>,
    ) -> ItemId {
        let (stack, _) = self.add_open_stack(members);
        let id = self.add_item(container);
        self.items[id.0].holds_stack = Some(stack);
        id
    }
}

impl StackLookup for Inventory {
    type Item = ItemMetadata;

    fn item(&self, id: ItemId) -> Option<&ItemMetadata> {
        self.items.get(id.0).map(|item| &item.meta)
    }

    fn parent_stack(&self, id: ItemId) -> Option<&Stack> {
        let stack = self.items.get(id.0)?.in_stack?;
        self.stacks.get(stack.0)
    }

    fn contents_stack(&self, id: ItemId) -> Option<&Stack> {
        let stack = self.items.get(id.0)?.holds_stack?;
        self.stacks.get(stack.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemView;
    use tempfile::TempDir;

    const SNAPSHOT_JSON: &str = r#"{
        "items": [
            { "name": "Bronze Bar", "in_stack": 0 },
            { "name": "Bronze Bar", "in_stack": 0 },
            { "name": "Sack", "holds_stack": 1 },
            { "name": "Carrot", "in_stack": 1,
              "food": { "events": [ { "name": "Agility", "amount": 3 } ] } }
        ],
        "stacks": [ { "members": [0, 1] }, { "members": [3] } ]
    }"#;

    const SNAPSHOT_TOML: &str = r#"
[[items]]
name = "Pipe"
curiosity = { exp = 120, lph = 2.5 }

[[items]]
name = "Bucket"
content = { name = "Water", count = 10, quality = 42 }
"#;

    #[test]
    fn test_from_json() {
        let inv = Inventory::from_json_str(SNAPSHOT_JSON).unwrap();
        assert_eq!(inv.items.len(), 4);
        assert_eq!(inv.parent_stack(ItemId(1)).map(|s| s.members.len()), Some(2));
        assert_eq!(
            inv.contents_stack(ItemId(2)).map(|s| s.members.clone()),
            Some(vec![ItemId(3)])
        );
        assert!(inv.parent_stack(ItemId(2)).is_none());
    }

    #[test]
    fn test_from_toml() {
        let inv = Inventory::from_toml_str(SNAPSHOT_TOML).unwrap();
        let pipe = inv.item(ItemId(0)).unwrap();
        assert_eq!(pipe.curiosity().map(|c| c.exp), Some(120.0));
        let bucket = inv.item(ItemId(1)).unwrap();
        assert_eq!(bucket.contents().and_then(|c| c.quality()), Some(42.0));
    }

    #[test]
    fn test_rejects_unknown_member() {
        let err = Inventory::from_json_str(r#"{ "items": [], "stacks": [ { "members": [3] } ] }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot(_)));
    }

    #[test]
    fn test_rejects_unknown_stack() {
        let json = r#"{ "items": [ { "name": "Sack", "holds_stack": 2 } ] }"#;
        let err = Inventory::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot(_)));
    }

    #[test]
    fn test_rejects_unlisted_member() {
        let json = r#"{ "items": [ { "name": "Bar", "in_stack": 0 } ], "stacks": [ { "members": [] } ] }"#;
        assert!(matches!(
            Inventory::from_json_str(json),
            Err(Error::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Inventory::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let tmp = TempDir::new().unwrap();
        let json_path = tmp.path().join("bag.json");
        let toml_path = tmp.path().join("bag.toml");
        std::fs::write(&json_path, SNAPSHOT_JSON).unwrap();
        std::fs::write(&toml_path, SNAPSHOT_TOML).unwrap();

        assert_eq!(Inventory::load(&json_path).unwrap().items.len(), 4);
        assert_eq!(Inventory::load(&toml_path).unwrap().items.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");
        assert!(matches!(
            Inventory::load(&missing),
            Err(Error::SnapshotNotFound(_))
        ));
    }

    #[test]
    fn test_builders_keep_snapshot_valid() {
        let mut inv = Inventory::default();
        inv.add_item(ItemMetadata::named("Stone"));
        inv.add_open_stack(vec![ItemMetadata::named("Bar"), ItemMetadata::named("Bar")]);
        inv.add_closed_stack(ItemMetadata::named("Sack"), vec![ItemMetadata::named("Seed")]);
        inv.validate().unwrap();

        let json = serde_json::to_string(&inv).unwrap();
        assert_eq!(Inventory::from_json_str(&json).unwrap(), inv);
    }
}
