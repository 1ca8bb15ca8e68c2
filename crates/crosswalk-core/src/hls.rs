//! # High-Level Structure Taxonomy
//!
//! The fixed set of top-level structural groups shared by management-system
//! standards built on the ISO high-level structure. Clauses from different
//! standards occupying the same top-level number are compared side by side
//! even when no explicit cross-reference links them.
//!
//! | # | Group |
//! |---|-------|
//! |  4 | Context of the organization |
//! |  5 | Leadership |
//! |  6 | Planning |
//! |  7 | Support |
//! |  8 | Operation |
//! |  9 | Performance evaluation |
//! | 10 | Improvement |
//!
//! [`HlsTaxonomy`] is passed to consumers as a value so an alternate table
//! can be substituted.

use serde::{Deserialize, Serialize};

/// The seven standard HLS groups as `(number, title)` pairs, in order.
pub const HLS_GROUPS: [(&str, &str); 7] = [
    ("4", "Context of the organization"),
    ("5", "Leadership"),
    ("6", "Planning"),
    ("7", "Support"),
    ("8", "Operation"),
    ("9", "Performance evaluation"),
    ("10", "Improvement"),
];

/// One top-level structural group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HlsGroup {
    /// Group number as it appears in clause numbers, e.g. `"4"`.
    pub number: String,
    /// Group title.
    pub title: String,
}

impl HlsGroup {
    /// Build a group.
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
        }
    }
}

/// Ordered table of HLS groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlsTaxonomy {
    groups: Vec<HlsGroup>,
}

impl HlsTaxonomy {
    /// Build a taxonomy from an ordered list of groups.
    pub fn new(groups: Vec<HlsGroup>) -> Self {
        Self { groups }
    }

    /// Groups in table order.
    pub fn groups(&self) -> &[HlsGroup] {
        &self.groups
    }

    /// Look up a group by number.
    pub fn get(&self, number: &str) -> Option<&HlsGroup> {
        self.groups.iter().find(|g| g.number == number)
    }

    /// Title of a group, if the taxonomy knows it.
    pub fn title_of(&self, number: &str) -> Option<&str> {
        self.get(number).map(|g| g.title.as_str())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the taxonomy has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for HlsTaxonomy {
    fn default() -> Self {
        Self::new(
            HLS_GROUPS
                .iter()
                .map(|(number, title)| HlsGroup::new(*number, *title))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_seven_groups_in_order() {
        let t = HlsTaxonomy::default();
        assert_eq!(t.len(), 7);
        let numbers: Vec<&str> = t.groups().iter().map(|g| g.number.as_str()).collect();
        assert_eq!(numbers, vec!["4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn lookup_by_number() {
        let t = HlsTaxonomy::default();
        assert_eq!(t.title_of("5"), Some("Leadership"));
        assert_eq!(t.title_of("10"), Some("Improvement"));
        assert_eq!(t.title_of("11"), None);
    }

    #[test]
    fn custom_taxonomy_replaces_default() {
        let t = HlsTaxonomy::new(vec![HlsGroup::new("A", "Annex")]);
        assert_eq!(t.len(), 1);
        assert!(t.get("4").is_none());
        assert!(!t.is_empty());
    }
}
