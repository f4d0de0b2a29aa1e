//! Numeric comparison for property filters.

use std::fmt;

use serde::Serialize;

/// Tolerance used for equality on derived stats (`lp:100`, `fep:12.5`).
pub const EQ_EPSILON: f64 = 0.01;

/// Comparison operators for numeric property filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    /// `>` greater than
    Gt,
    /// `>=` greater or equal
    Gte,
    /// `<` less than
    Lt,
    /// `<=` less or equal
    Lte,
    /// `=` approximately equal (within [`EQ_EPSILON`])
    Eq,
}

impl CompareOp {
    /// Map operator text to an operator. Unknown runs like `=>` give `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Gte),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Lte),
            "=" => Some(CompareOp::Eq),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Eq => "=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Compare `actual` against `target`. A missing operator means equality.
pub fn compare(actual: f64, op: Option<CompareOp>, target: f64) -> bool {
    match op.unwrap_or(CompareOp::Eq) {
        CompareOp::Gt => actual > target,
        CompareOp::Gte => actual >= target,
        CompareOp::Lt => actual < target,
        CompareOp::Lte => actual <= target,
        CompareOp::Eq => (actual - target).abs() < EQ_EPSILON,
    }
}
