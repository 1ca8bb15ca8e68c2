//! # Standard Clauses
//!
//! [`StandardClause`] is the read-only catalog view of a single requirement,
//! plus helpers for the dotted clause-number scheme (`"4"`, `"4.2"`,
//! `"8.5.1"`) shared by every standard built on the high-level structure.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::identity::{ClauseId, StandardCode};

/// A leaf compliance requirement as known to the clause catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardClause {
    /// Stable catalog identifier.
    pub id: ClauseId,
    /// Dotted hierarchical clause number, e.g. `"4.2"`.
    pub clause_number: String,
    /// Human-readable title.
    pub title: String,
    /// Code of the owning standard.
    pub standard_code: StandardCode,
    /// Display name of the owning standard.
    pub standard_name: String,
}

/// First segment of a dotted clause number: `"4.2.1"` → `"4"`.
///
/// Surrounding whitespace is ignored. A number without dots is returned
/// whole (minus any trailing period).
pub fn top_level_segment(clause_number: &str) -> &str {
    let trimmed = clause_number.trim();
    trimmed.split('.').next().unwrap_or(trimmed)
}

/// Whether `clause_number` names the top-level clause `group`, either exactly
/// (`"4"`) or with a trailing period (`"4."`).
pub fn is_top_level_match(clause_number: &str, group: &str) -> bool {
    let n = clause_number.trim();
    n == group || n.strip_suffix('.') == Some(group)
}

/// Compare two dotted clause numbers.
///
/// Segments are compared numerically when both parse as integers
/// (`"4.9" < "4.10"`), lexically otherwise. When one number is a prefix of
/// the other, the shorter one sorts first (`"4" < "4.1"`).
pub fn compare_clause_numbers(a: &str, b: &str) -> Ordering {
    let mut left = a.trim().trim_end_matches('.').split('.');
    let mut right = b.trim().trim_end_matches('.').split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
