//! CLI command implementations.

use std::path::Path;

use seek::{
    parse_query, Config, Inventory, ItemId, ItemView, Matcher, PropertyFilter, PropertyQuery, Query,
    StackLookup,
};
use serde_json::json;
use tracing::debug;

/// Load the config from an explicit path, or from the default location.
fn load_config(path: Option<&Path>) -> seek::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn item_name(inventory: &Inventory, id: ItemId) -> &str {
    inventory
        .item(id)
        .and_then(|item| item.name())
        .unwrap_or("<unnamed>")
}

/// Short description of an item's stack relations.
fn relation(inventory: &Inventory, id: ItemId) -> String {
    let Some(entry) = inventory.items.get(id.0) else {
        return String::new();
    };
    match (entry.in_stack, entry.holds_stack) {
        (Some(stack), Some(held)) => format!("in {}, holds {}", stack, held),
        (Some(stack), None) => format!("in {}", stack),
        (None, Some(held)) => format!("holds {}", held),
        (None, None) => String::new(),
    }
}

/// Whether the raw query carried operator characters that the parser could
/// not read, leaving a plain equality comparison.
fn dropped_operator(query_str: &str, query: &Query) -> bool {
    matches!(
        query,
        Query::Property(PropertyQuery {
            filter: PropertyFilter::Numeric { op: None, .. },
            ..
        })
    ) && query_str.contains(['<', '>', '='])
}

pub fn parse(query_str: &str, format: &str) -> seek::Result<()> {
    let query = parse_query(query_str);

    match format {
        "json" => {
            let value = if query_str.trim().is_empty() {
                json!(null)
            } else {
                serde_json::to_value(&query)?
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            if query_str.trim().is_empty() {
                println!("(empty query - matches nothing)");
            } else if query.is_property() {
                println!("property: {}", query);
                if dropped_operator(query_str, &query) {
                    println!("(operator not recognized, comparing for equality)");
                }
            } else {
                println!("name: {}", query);
            }
        }
    }

    Ok(())
}

pub fn match_items(
    config_path: Option<&Path>,
    query_str: &str,
    inventory_path: &Path,
    direct: bool,
    format: &str,
) -> seek::Result<()> {
    let config = load_config(config_path)?;
    let matcher: Matcher = config.matcher();
    let inventory = Inventory::load(inventory_path)?;

    let matched: Vec<ItemId> = if direct {
        inventory
            .ids()
            .filter(|&id| {
                inventory
                    .item(id)
                    .is_some_and(|item| matcher.matches_item(item, query_str))
            })
            .collect()
    } else {
        matcher.highlighted(&inventory, inventory.ids(), query_str)
    };
    debug!(query = query_str, matched = matched.len(), direct, "evaluated query");

    match format {
        "json" => {
            let items: Vec<_> = matched
                .iter()
                .map(|&id| {
                    json!({
                        "id": id.0,
                        "name": inventory.item(id).and_then(|item| item.name()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        _ => {
            if matched.is_empty() {
                println!("No matching items.");
                return Ok(());
            }
            for id in matched {
                let relation = relation(&inventory, id);
                if relation.is_empty() {
                    println!("{:<5} {}", id.to_string(), item_name(&inventory, id));
                } else {
                    println!(
                        "{:<5} {:<30} ({})",
                        id.to_string(),
                        item_name(&inventory, id),
                        relation
                    );
                }
            }
        }
    }

    Ok(())
}

pub fn inspect(inventory_path: &Path, format: &str) -> seek::Result<()> {
    let inventory = Inventory::load(inventory_path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&inventory)?);
        }
        _ => {
            println!(
                "{:<5} {:<24} {:>8} {:>6} {:>8} {:<16} STACK",
                "ID", "NAME", "LP", "LP/H", "FEP", "CONTENT"
            );
            println!("{}", "-".repeat(80));

            for id in inventory.ids() {
                let Some(item) = inventory.item(id) else {
                    continue;
                };
                let (lp, lph) = item
                    .curiosity()
                    .map(|c| (format!("{}", c.exp), format!("{}", c.lph)))
                    .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
                let fep = item
                    .food()
                    .map(|f| format!("{}", f.total()))
                    .unwrap_or_else(|| "-".to_string());
                let content = item
                    .contents()
                    .filter(|c| c.is_filled())
                    .map(|c| {
                        let name = c.name.as_deref().unwrap_or("?");
                        match c.quality() {
                            Some(q) => format!("{} {} q{}", c.count, name, q),
                            None => format!("{} {}", c.count, name),
                        }
                    })
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "{:<5} {:<24} {:>8} {:>6} {:>8} {:<16} {}",
                    id.to_string(),
                    item_name(&inventory, id),
                    lp,
                    lph,
                    fep,
                    content,
                    relation(&inventory, id)
                );
            }

            println!();
            println!("{} items, {} stacks", inventory.items.len(), inventory.stacks.len());
        }
    }

    Ok(())
}

pub fn config(config_path: Option<&Path>, init: bool) -> seek::Result<()> {
    let config = load_config(config_path)?;

    if init {
        if config.config_path.exists() {
            println!("Config already exists at {}", config.config_path.display());
        } else {
            config.save()?;
            println!("Wrote default config to {}", config.config_path.display());
        }
        return Ok(());
    }

    println!("config: {}", config.config_path.display());
    println!("fuzzy.max_edits: {}", config.fuzzy.max_edits);
    println!("fuzzy.min_typo_len: {}", config.fuzzy.min_typo_len);
    Ok(())
}
