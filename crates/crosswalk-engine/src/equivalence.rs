//! # Equivalence-Class Builder
//!
//! A generic disjoint-set (union-find) structure with path compression and
//! union by rank. `find` and `union` run in amortized near-constant time.
//!
//! All operations are total: referencing an element that was never added
//! registers it as a singleton first.
//!
//! Elements are stored once in an arena and addressed by index, so the
//! parent/rank vectors stay compact regardless of the element type.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

/// Disjoint-set forest over elements of type `T`.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl<T> DisjointSet<T>
where
    T: Clone + Eq + Hash + Ord,
{
    /// Create an empty structure.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Register an element as a singleton. No-op if already present.
    pub fn add(&mut self, element: T) {
        self.slot(&element);
    }

    /// Current representative of the element's class.
    ///
    /// Compresses the path from the element to its root.
    pub fn find(&mut self, element: &T) -> T {
        let slot = self.slot(element);
        let root = self.find_slot(slot);
        self.elements[root].clone()
    }

    /// Merge the classes of `a` and `b`. No-op if already merged.
    ///
    /// Returns `true` if two distinct classes were merged.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let sa = self.slot(a);
        let sb = self.slot(b);
        let ra = self.find_slot(sa);
        let rb = self.find_slot(sb);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
        true
    }

    /// Whether `a` and `b` are in the same class.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        let sa = self.slot(a);
        let sb = self.slot(b);
        self.find_slot(sa) == self.find_slot(sb)
    }

    /// Every class as `representative → members`, singletons included.
    pub fn groups(&self) -> BTreeMap<T, BTreeSet<T>> {
        let mut groups: BTreeMap<T, BTreeSet<T>> = BTreeMap::new();
        for (slot, element) in self.elements.iter().enumerate() {
            let root = self.root_of(slot);
            groups
                .entry(self.elements[root].clone())
                .or_default()
                .insert(element.clone());
        }
        groups
    }

    /// Number of distinct classes.
    pub fn class_count(&self) -> usize {
        (0..self.parent.len())
            .filter(|&slot| self.parent[slot] == slot)
            .count()
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element has been registered.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the element has been registered.
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    fn slot(&mut self, element: &T) -> usize {
        if let Some(&slot) = self.index.get(element) {
            return slot;
        }
        let slot = self.elements.len();
        self.index.insert(element.clone(), slot);
        self.elements.push(element.clone());
        self.parent.push(slot);
        self.rank.push(0);
        slot
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let root = self.root_of(slot);
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn root_of(&self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            slot = self.parent[slot];
        }
        slot
    }
}

impl<T> Default for DisjointSet<T>
where
    T: Clone + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
