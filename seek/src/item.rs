//! Item metadata as seen by the matcher.
//!
//! [`ItemView`] is the read contract the host implements for its live items.
//! [`ItemMetadata`] is a plain owned implementation used by inventory
//! snapshots and tests.

use serde::{Deserialize, Serialize};

/// Read-only projection of an item. Every accessor returns `None` when the
/// data is missing or cannot be read right now.
pub trait ItemView {
    /// Display name of the item.
    fn name(&self) -> Option<&str>;

    /// Curiosity (study) record, if the item grants learning points.
    fn curiosity(&self) -> Option<&Curiosity>;

    /// Food record, if the item can be eaten.
    fn food(&self) -> Option<&FoodInfo>;

    /// What a filled container currently holds.
    fn contents(&self) -> Option<&Contents>;
}

/// Learning points granted by studying an item.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Curiosity {
    /// Total learning points.
    pub exp: f64,
    /// Learning points per hour of study.
    #[serde(default)]
    pub lph: f64,
}

/// Food events granted on consumption.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodInfo {
    #[serde(default)]
    pub events: Vec<FoodEvent>,
}

/// A single food event: points toward one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEvent {
    /// Attribute name (e.g. "Strength"). `None` when not yet resolved.
    #[serde(default)]
    pub name: Option<String>,
    pub amount: f64,
}

impl FoodInfo {
    /// Sum of all event amounts.
    pub fn total(&self) -> f64 {
        self.events.iter().map(|ev| ev.amount).sum()
    }

    /// Lowercase names of all events whose attribute is known.
    pub fn event_names(&self) -> impl Iterator<Item = String> + '_ {
        self.events
            .iter()
            .filter_map(|ev| ev.name.as_deref())
            .map(str::to_lowercase)
    }
}

/// Contents of a filled container (water in a bucket, seeds in a sack).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contents {
    /// Name of the content, e.g. "Water".
    #[serde(default)]
    pub name: Option<String>,
    /// Amount held.
    #[serde(default)]
    pub count: f64,
    /// Quality of the content, when reported directly.
    #[serde(default)]
    pub quality: Option<f64>,
    /// Nested metadata records describing the content.
    #[serde(default)]
    pub sub: Vec<ItemMetadata>,
}

impl Contents {
    /// Whether the container holds anything.
    pub fn is_filled(&self) -> bool {
        self.count > 0.0
    }

    /// Quality of the content: the record's own quality, else the first
    /// nested record that reports one.
    pub fn quality(&self) -> Option<f64> {
        self.quality.or_else(|| {
            self.sub
                .iter()
                .find_map(|sub| sub.quality.or_else(|| sub.contents.as_ref()?.quality()))
        })
    }
}

/// Owned item metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curiosity: Option<Curiosity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodInfo>,
    #[serde(default, rename = "content", skip_serializing_if = "Option::is_none")]
    pub contents: Option<Contents>,
}

impl ItemMetadata {
    /// Metadata with just a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_curiosity(mut self, exp: f64, lph: f64) -> Self {
        self.curiosity = Some(Curiosity { exp, lph });
        self
    }

    /// Add a food record built from `(attribute, amount)` pairs.
    pub fn with_food<'a>(mut self, events: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        self.food = Some(FoodInfo {
            events: events
                .into_iter()
                .map(|(name, amount)| FoodEvent {
                    name: Some(name.to_string()),
                    amount,
                })
                .collect(),
        });
        self
    }

    pub fn with_contents(mut self, contents: Contents) -> Self {
        self.contents = Some(contents);
        self
    }
}

impl ItemView for ItemMetadata {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn curiosity(&self) -> Option<&Curiosity> {
        self.curiosity.as_ref()
    }

    fn food(&self) -> Option<&FoodInfo> {
        self.food.as_ref()
    }

    fn contents(&self) -> Option<&Contents> {
        self.contents.as_ref()
    }
}
