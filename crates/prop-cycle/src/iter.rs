// SPDX-License-Identifier: MIT
//
// Lazy traversal of a cycle's expression tree.
//
// The cursor mirrors the tree shape. Leaves and flat nodes walk their
// stored sequences directly; a zip cursor advances both children in
// lockstep and unions the pair; a product cursor holds the current outer
// property set and restarts its inner cursor from the subtree each time
// it drains, so position i unions outer set i / inner_len with inner set
// i % inner_len. Nothing is materialized beyond the set being yielded.
//
// Every call to Cycler::iter builds a fresh cursor, so iteration is
// restartable and always reproduces the same sequence. The iterator is
// also Clone, which makes `iter().cycle()` the endless stream a redraw
// loop wants.

use std::iter::FusedIterator;
use std::slice;

use crate::cycle::{Cycler, Node};
use crate::set::PropSet;

/// Iterator over a cycle's property sets, in order.
///
/// Created by [`Cycler::iter`]; yields one owned [`PropSet`] per
/// position, cloning values out of the tree on demand.
#[derive(Clone)]
pub struct Iter<'a, V> {
    cursor: Cursor<'a, V>,
    remaining: usize,
}

#[derive(Clone)]
enum Cursor<'a, V> {
    Leaf {
        key: &'a str,
        values: slice::Iter<'a, V>,
    },
    Flat {
        rows: slice::Iter<'a, PropSet<V>>,
    },
    Zip {
        left: Box<Cursor<'a, V>>,
        right: Box<Cursor<'a, V>>,
    },
    Product {
        outer: Box<Cursor<'a, V>>,
        /// Outer set for the inner traversal in flight; `None` before
        /// the first yield and after each inner drain.
        current: Option<PropSet<V>>,
        /// The inner subtree, kept to restart the inner cursor from.
        inner_tree: &'a Node<V>,
        inner: Box<Cursor<'a, V>>,
    },
}

impl<'a, V: Clone> Cursor<'a, V> {
    fn new(node: &'a Node<V>) -> Self {
        match node {
            Node::Leaf { key, values } => Cursor::Leaf {
                key,
                values: values.iter(),
            },
            Node::Flat { rows, .. } => Cursor::Flat { rows: rows.iter() },
            Node::Zip(left, right) => Cursor::Zip {
                left: Box::new(Self::new(left)),
                right: Box::new(Self::new(right)),
            },
            Node::Product(left, right) => Cursor::Product {
                outer: Box::new(Self::new(left)),
                current: None,
                inner_tree: right,
                inner: Box::new(Self::new(right)),
            },
        }
    }

    fn next(&mut self) -> Option<PropSet<V>> {
        match self {
            Cursor::Leaf { key, values } => values
                .next()
                .map(|value| PropSet::single(*key, value.clone())),
            Cursor::Flat { rows } => rows.next().cloned(),
            Cursor::Zip { left, right } => {
                // Equal lengths are validated at construction, so both
                // sides drain together.
                let left_set = left.next()?;
                let right_set = right.next()?;
                Some(left_set.union(right_set))
            }
            Cursor::Product {
                outer,
                current,
                inner_tree,
                inner,
            } => loop {
                if current.is_none() {
                    *current = Some(outer.next()?);
                }
                if let Some(inner_set) = inner.next() {
                    let outer_set = current.clone()?;
                    return Some(outer_set.union(inner_set));
                }
                // Inner drained: restart it against the next outer set.
                // An empty inner side keeps draining until the outer
                // side runs out, terminating with no yields.
                *current = None;
                **inner = Cursor::new(*inner_tree);
            },
        }
    }
}

impl<'a, V: Clone> Iter<'a, V> {
    pub(crate) fn new(cycler: &'a Cycler<V>) -> Self {
        Self {
            cursor: Cursor::new(&cycler.node),
            remaining: cycler.len(),
        }
    }
}

impl<V: Clone> Iterator for Iter<'_, V> {
    type Item = PropSet<V>;

    fn next(&mut self) -> Option<PropSet<V>> {
        let set = self.cursor.next()?;
        self.remaining -= 1;
        Some(set)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Clone> ExactSizeIterator for Iter<'_, V> {}

impl<V: Clone> FusedIterator for Iter<'_, V> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::cycle::cycle;
    use crate::set::PropSet;

    // ── Restartability ───────────────────────────────────────────────────

    #[test]
    fn reiteration_reproduces_the_sequence() {
        let c = cycle("a", 0..3) * cycle("b", 10..13);
        let first: Vec<PropSet<i32>> = c.iter().collect();
        let second: Vec<PropSet<i32>> = c.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn length_matches_iteration_count() {
        let a = cycle("a", 0..4);
        let b = cycle("b", 10..14);
        let d = cycle("d", 0..3);
        for c in [
            a.clone() + b.clone(),
            a.clone() * d.clone(),
            (a + b) * d,
        ] {
            assert_eq!(c.iter().count(), c.len());
        }
    }

    // ── Product traversal ────────────────────────────────────────────────

    #[test]
    fn product_index_mapping() {
        let c = cycle("outer", 0..3) * cycle("inner", 0..4);
        for (i, set) in c.iter().enumerate() {
            let i = i32::try_from(i).unwrap();
            assert_eq!(set["outer"], i / 4);
            assert_eq!(set["inner"], i % 4);
        }
    }

    #[test]
    fn product_with_empty_inner_yields_nothing() {
        let c = cycle("outer", 0..3) * cycle("inner", Vec::<i32>::new());
        assert_eq!(c.iter().count(), 0);
    }

    #[test]
    fn nested_composition_traverses_in_order() {
        // (a + b) * d: the zipped pair is the outer loop.
        let c = (cycle("a", 0..2) + cycle("b", 10..12)) * cycle("d", 0..2);
        let produced: Vec<PropSet<i32>> = c.iter().collect();
        assert_eq!(produced.len(), 4);
        assert_eq!(produced[0]["a"], 0);
        assert_eq!(produced[0]["b"], 10);
        assert_eq!(produced[0]["d"], 0);
        assert_eq!(produced[1]["d"], 1);
        assert_eq!(produced[2]["a"], 1);
        assert_eq!(produced[2]["b"], 11);
        assert_eq!(produced[2]["d"], 0);
    }

    // ── Iterator contracts ───────────────────────────────────────────────

    #[test]
    fn exact_size_counts_down() {
        let c = cycle("a", 0..2) * cycle("b", 0..3);
        let mut iter = c.iter();
        assert_eq!(iter.len(), 6);
        iter.next();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.size_hint(), (5, Some(5)));
    }

    #[test]
    fn fused_after_the_end() {
        let c = cycle("a", 0..1);
        let mut iter = c.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn clone_allows_endless_cycling() {
        let c = cycle("c", "rg".chars());
        let looped: Vec<char> = c.iter().cycle().take(5).map(|set| set["c"]).collect();
        assert_eq!(looped, ['r', 'g', 'r', 'g', 'r']);
    }
}
