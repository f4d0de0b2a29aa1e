//! Query parser for the inventory search language.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::compare::CompareOp;

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Fallback: fuzzy match against the item name (trimmed, lowercase).
    Name { text: String },
    /// Match against a typed item property.
    Property(PropertyQuery),
}

/// Property query such as `lp:>100` or `fep:str`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyQuery {
    pub property: PropertyKind,
    pub filter: PropertyFilter,
}

/// Item properties a query can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// `lp` or `study`: curiosity experience
    LearningPoints,
    /// `lph`: curiosity experience per hour
    LearningPointsPerHour,
    /// `fep` or `food`: food event points
    FoodEnergy,
}

/// What follows the `property:` prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyFilter {
    /// Nothing after the colon: the property just has to be present.
    Any,
    /// Letters only, e.g. `str` in `fep:str`.
    Type { name: String },
    /// Optional operator and a number. An unrecognized operator is `None`.
    Numeric { op: Option<CompareOp>, value: f64 },
}

impl PropertyKind {
    /// Resolve a property keyword (already lowercase).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "lp" | "study" => Some(PropertyKind::LearningPoints),
            "lph" => Some(PropertyKind::LearningPointsPerHour),
            "fep" | "food" => Some(PropertyKind::FoodEnergy),
            _ => None,
        }
    }

    /// Canonical keyword used when displaying a query.
    pub fn keyword(self) -> &'static str {
        match self {
            PropertyKind::LearningPoints => "lp",
            PropertyKind::LearningPointsPerHour => "lph",
            PropertyKind::FoodEnergy => "fep",
        }
    }
}

/// Parse a query string. Never fails: anything that is not a well-formed
/// property query becomes a name query.
pub fn parse_query(input: &str) -> Query {
    let text = input.trim().to_lowercase();

    match try_parse_property(&text) {
        Some(property) => Query::Property(property),
        None => {
            trace!(query = %text, "not a property query, matching by name");
            Query::Name { text }
        }
    }
}

/// Try to parse `property:modifier` covering the whole input.
fn try_parse_property(input: &str) -> Option<PropertyQuery> {
    let (property, rest) = try_parse_keyword(input)?;
    let filter = try_parse_modifier(rest)?;
    Some(PropertyQuery { property, filter })
}

/// Split off the property keyword and its colon.
fn try_parse_keyword(input: &str) -> Option<(PropertyKind, &str)> {
    let (keyword, rest) = input.split_once(':')?;
    let property = PropertyKind::from_keyword(keyword)?;
    Some((property, rest))
}

/// Parse everything after the colon.
fn try_parse_modifier(input: &str) -> Option<PropertyFilter> {
    if input.is_empty() {
        return Some(PropertyFilter::Any);
    }

    if input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(PropertyFilter::Type {
            name: input.to_string(),
        });
    }

    let (op, rest) = try_parse_operator(input);
    let value = try_parse_number(rest)?;
    Some(PropertyFilter::Numeric { op, value })
}

/// Consume a run of `<`, `>` and `=`. Returns the recognized operator, if
/// any, and the remaining input.
fn try_parse_operator(input: &str) -> (Option<CompareOp>, &str) {
    let end = input
        .find(|c: char| !matches!(c, '<' | '>' | '='))
        .unwrap_or(input.len());
    let symbol = &input[..end];

    let op = if symbol.is_empty() {
        None
    } else {
        let op = CompareOp::from_symbol(symbol);
        if op.is_none() {
            trace!(operator = symbol, "unrecognized operator, comparing for equality");
        }
        op
    };

    (op, &input[end..])
}

/// Parse `digits ("." digits*)?` covering the whole input.
fn try_parse_number(input: &str) -> Option<f64> {
    let int_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if int_end == 0 {
        return None;
    }

    if let Some(fraction) = input[int_end..].strip_prefix('.') {
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    } else if int_end != input.len() {
        return None;
    }

    input.parse().ok()
}

impl Query {
    /// Check if this query addresses an item property rather than its name.
    pub fn is_property(&self) -> bool {
        matches!(self, Query::Property(_))
    }

    /// Check if this query can never match (empty name search).
    pub fn is_empty(&self) -> bool {
        matches!(self, Query::Name { text } if text.is_empty())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Name { text } => f.write_str(text),
            Query::Property(property) => write!(f, "{}", property),
        }
    }
}

impl fmt::Display for PropertyQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.property.keyword())?;
        match &self.filter {
            PropertyFilter::Any => Ok(()),
            PropertyFilter::Type { name } => f.write_str(name),
            PropertyFilter::Numeric { op: Some(op), value } => write!(f, "{}{}", op, value),
            PropertyFilter::Numeric { op: None, value } => write!(f, "{}", value),
        }
    }
}
