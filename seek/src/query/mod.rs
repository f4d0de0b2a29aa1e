//! Inventory search query language.
//!
//! # Syntax Overview
//!
//! A query is either a property query or a plain name search:
//!
//! - **Learning points**: `lp:` / `study:` (has any LP), `lp:>100`, `lp:<=50`
//! - **LP per hour**: `lph:`, `lph:>=2.5`
//! - **Food energy**: `fep:` / `food:` (is food), `fep:>50` (total FEP),
//!   `fep:str` (has an event whose attribute fuzzily contains "str")
//! - **Name**: anything else, e.g. `bronze`, matched fuzzily against the
//!   item's display name
//!
//! A number without an operator is an approximate equality (`lp:100`).

mod parser;

pub use parser::{parse_query, PropertyFilter, PropertyKind, PropertyQuery, Query};
