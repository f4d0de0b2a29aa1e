//! Property query evaluation against item metadata.

use crate::compare::compare;
use crate::fuzzy::FuzzyMatcher;
use crate::item::{FoodInfo, ItemView};
use crate::query::{PropertyFilter, PropertyKind, PropertyQuery};

/// Evaluate a property query against one item. Missing metadata is a
/// non-match.
pub fn evaluate<I: ItemView + ?Sized>(
    query: &PropertyQuery,
    item: &I,
    fuzzy: &FuzzyMatcher,
) -> bool {
    match query.property {
        PropertyKind::LearningPoints => item
            .curiosity()
            .is_some_and(|c| matches_stat(c.exp, &query.filter)),
        PropertyKind::LearningPointsPerHour => item
            .curiosity()
            .is_some_and(|c| matches_stat(c.lph, &query.filter)),
        PropertyKind::FoodEnergy => item
            .food()
            .is_some_and(|food| matches_food(food, &query.filter, fuzzy)),
    }
}

/// Curiosity stats: without a number the stat just has to be positive.
fn matches_stat(actual: f64, filter: &PropertyFilter) -> bool {
    match filter {
        PropertyFilter::Numeric { op, value } => compare(actual, *op, *value),
        PropertyFilter::Any | PropertyFilter::Type { .. } => actual > 0.0,
    }
}

/// Food: a type filter wins over everything else; no filter means "is food".
fn matches_food(food: &FoodInfo, filter: &PropertyFilter, fuzzy: &FuzzyMatcher) -> bool {
    match filter {
        PropertyFilter::Type { name } => food
            .event_names()
            .any(|event| fuzzy.contains(&event, name)),
        PropertyFilter::Any => true,
        PropertyFilter::Numeric { op, value } => compare(food.total(), *op, *value),
    }
}
