//! Demo catalogs and the random source used to pick from them.
//!
//! A catalog is a fixed, non-empty list of literals. Handlers draw one entry
//! per request through a [`RandomSource`] held in application state, which
//! lets tests swap in a deterministic source.

use rand::Rng;

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production random source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A fixed, ordered list of demo values.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    items: &'static [&'static str],
}

impl Catalog {
    /// Build a catalog. Empty lists are rejected at compile time for consts.
    pub const fn new(items: &'static [&'static str]) -> Self {
        assert!(!items.is_empty(), "catalog must not be empty");
        Self { items }
    }

    pub fn items(&self) -> &'static [&'static str] {
        self.items
    }

    #[cfg(test)]
    pub fn contains(&self, value: &str) -> bool {
        self.items().contains(&value)
    }

    /// Draw one entry using the given random source.
    pub fn pick(&self, source: &dyn RandomSource) -> &'static str {
        let items = self.items();
        // Out-of-range indices from a misbehaving source wrap around.
        items[source.pick_index(items.len()) % items.len()]
    }
}

/// Two-dimensional shapes served by `/v1/shapes`.
pub const SHAPES: Catalog = Catalog::new(&["Circle", "Rectangle", "Square", "Triangle"]);

/// Three-dimensional forms served by `/v1/forms`.
pub const FORMS: Catalog = Catalog::new(&["Box", "Cone", "Cube", "Sphere"]);


#[cfg(test)]
mod tests {
    use super::testing::{FixedRandom, SequenceRandom};
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogs_hold_the_expected_literals() {
        assert_eq!(SHAPES.items(), ["Circle", "Rectangle", "Square", "Triangle"]);
        assert_eq!(FORMS.items(), ["Box", "Cone", "Cube", "Sphere"]);
    }

    #[test]
    fn pick_uses_the_index_from_the_source() {
        assert_eq!(SHAPES.pick(&FixedRandom(0)), "Circle");
        assert_eq!(SHAPES.pick(&FixedRandom(3)), "Triangle");
        assert_eq!(FORMS.pick(&FixedRandom(2)), "Cube");
    }

    #[test]
    fn out_of_range_index_wraps() {
        assert_eq!(FORMS.pick(&FixedRandom(5)), "Cone");
    }

    #[test]
    fn sequence_source_walks_the_whole_catalog() {
        let source = SequenceRandom::default();
        let picked: Vec<_> = (0..4).map(|_| SHAPES.pick(&source)).collect();
        assert_eq!(picked, SHAPES.items());
    }

    #[test]
    fn thread_random_stays_in_range() {
        for len in 1..10 {
            for _ in 0..100 {
                assert!(ThreadRandom.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn thread_random_covers_every_entry() {
        for catalog in [SHAPES, FORMS] {
            let seen: HashSet<_> = (0..1000).map(|_| catalog.pick(&ThreadRandom)).collect();
            assert_eq!(seen.len(), catalog.items().len());
            assert!(seen.iter().all(|item| catalog.contains(item)));
        }
    }
}
