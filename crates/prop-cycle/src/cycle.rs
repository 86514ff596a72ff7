// SPDX-License-Identifier: MIT
//
// Cycler — finite cycles of key → value assignments, composed as values.
//
// A cycle is an immutable expression tree: leaves hold one key and its
// literal value sequence, internal nodes pair two children under a zip
// (position-wise) or product (Cartesian, left-outer) operator. Nothing
// ever mutates a published node — composition wraps existing subtrees in
// a new one — so any cycle can be shared freely for reading.
//
// The operators mirror the arithmetic they behave like: `+` zips two
// equal-length cycles with disjoint keys, `*` crosses two disjoint-key
// cycles, `n * cycle` repeats the sequence n times. Every operator has a
// fallible sibling (`try_zip`, `try_product`) for callers that want the
// error instead of the panic.

use std::collections::BTreeSet;
use std::fmt;
use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::error::CycleError;
use crate::iter::Iter;
use crate::set::PropSet;
use crate::slice::Slice;

// ─── Expression tree ─────────────────────────────────────────────────────────

/// The internal shape of a cycle. Children are exclusively owned, so the
/// tree is acyclic by construction.
#[derive(Clone, Debug)]
pub(crate) enum Node<V> {
    /// One key, one literal value sequence.
    Leaf { key: String, values: Vec<V> },
    /// Materialized rows — the canonical form `simplify` produces.
    Flat {
        keys: Vec<String>,
        rows: Vec<PropSet<V>>,
    },
    /// Position-wise combination of two equal-length children.
    Zip(Box<Node<V>>, Box<Node<V>>),
    /// Cartesian combination: left is the outer loop, right the inner.
    Product(Box<Node<V>>, Box<Node<V>>),
}

impl<V> Node<V> {
    fn len(&self) -> usize {
        match self {
            Node::Leaf { values, .. } => values.len(),
            Node::Flat { rows, .. } => rows.len(),
            // Zip children are validated to equal length at construction.
            Node::Zip(left, _) => left.len(),
            Node::Product(left, right) => left.len() * right.len(),
        }
    }

    /// Append this subtree's keys in declared order: left before right,
    /// outer before inner.
    fn collect_keys<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Leaf { key, .. } => out.push(key),
            Node::Flat { keys, .. } => out.extend(keys.iter().map(String::as_str)),
            Node::Zip(left, right) | Node::Product(left, right) => {
                left.collect_keys(out);
                right.collect_keys(out);
            }
        }
    }
}

// ─── Cycler ──────────────────────────────────────────────────────────────────

/// An immutable, finite, ordered cycle of [`PropSet`]s.
///
/// Built from single-key leaves with [`cycle`] and combined with `+`
/// (zip), `*` (Cartesian product), and `n *` (repetition). Iterating a
/// `Cycler` produces one property set per position; iteration is
/// restartable and always reproduces the same sequence.
///
/// # Examples
///
/// ```
/// use prop_cycle::cycle;
///
/// let color = cycle("c", "rgb".chars());
/// let other = cycle("ec", "xyz".chars());
///
/// let paired = color + other;
/// assert_eq!(paired.len(), 3);
///
/// let second = paired.iter().nth(1).unwrap();
/// assert_eq!(second["c"], 'g');
/// assert_eq!(second["ec"], 'y');
/// ```
#[derive(Clone, Debug)]
pub struct Cycler<V> {
    pub(crate) node: Node<V>,
}

/// Build a single-key cycle from a finite value sequence.
///
/// The values are collected eagerly; the cycle's length is the sequence
/// length (zero is permitted and yields an empty cycle).
///
/// # Examples
///
/// ```
/// use prop_cycle::cycle;
///
/// let color = cycle("c", "rgb".chars());
/// assert_eq!(color.len(), 3);
/// assert_eq!(color.to_string(), "cycle(\"c\", ['r', 'g', 'b'])");
///
/// let width = cycle("lw", 0..3);
/// assert_eq!(width.keys().into_iter().collect::<Vec<_>>(), ["lw"]);
/// ```
pub fn cycle<V>(key: impl Into<String>, values: impl IntoIterator<Item = V>) -> Cycler<V> {
    Cycler {
        node: Node::Leaf {
            key: key.into(),
            values: values.into_iter().collect(),
        },
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Key disjointness, the invariant both composition operators share.
///
/// Walks the right operand's declared keys against the left operand's key
/// set, so a collision is found even when the duplicate key sits deep in
/// a nested composition.
fn check_disjoint<V>(left: &Cycler<V>, right: &Cycler<V>) -> Result<(), CycleError> {
    let left_keys = left.keys();
    for key in right.key_order() {
        if left_keys.contains(key) {
            return Err(CycleError::KeyCollision(key.to_string()));
        }
    }
    Ok(())
}

/// Full zip precondition: disjoint keys, then equal lengths.
fn check_zip<V>(left: &Cycler<V>, right: &Cycler<V>) -> Result<(), CycleError> {
    check_disjoint(left, right)?;
    if left.len() != right.len() {
        return Err(CycleError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

// ─── Construction & composition ──────────────────────────────────────────────

impl<V> Cycler<V> {
    /// Number of property sets the cycle will iterate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node.len()
    }

    /// Whether the cycle produces no property sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The key set, duplicate-free and unordered.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<&str> {
        self.key_order().into_iter().collect()
    }

    /// Keys in declared order: left operand before right, outer loop
    /// before inner. This is the column order renderers use.
    #[must_use]
    pub fn key_order(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.node.collect_keys(&mut out);
        out
    }

}

// ─── Iteration-backed operations ─────────────────────────────────────────────

impl<V: Clone> Cycler<V> {
    /// Combine position-wise: element *i* of the result is the union of
    /// element *i* of `self` and element *i* of `other`.
    ///
    /// Borrows both operands, so a failure leaves them untouched and
    /// usable; `+` is the consuming, panicking form.
    ///
    /// # Errors
    ///
    /// [`CycleError::KeyCollision`] if the operands share a key, and
    /// [`CycleError::LengthMismatch`] if their lengths differ. A failed
    /// zip builds nothing.
    pub fn try_zip(&self, other: &Self) -> Result<Self, CycleError> {
        check_zip(self, other)?;
        Ok(Self {
            node: Node::Zip(Box::new(self.node.clone()), Box::new(other.node.clone())),
        })
    }

    /// Combine as a Cartesian product with `self` as the outer loop:
    /// position `i` of the result unions outer set `i / other.len()`
    /// with inner set `i % other.len()`.
    ///
    /// Borrows both operands; `*` is the consuming, panicking form.
    ///
    /// # Errors
    ///
    /// [`CycleError::KeyCollision`] if the operands share a key.
    pub fn try_product(&self, other: &Self) -> Result<Self, CycleError> {
        check_disjoint(self, other)?;
        Ok(Self {
            node: Node::Product(Box::new(self.node.clone()), Box::new(other.node.clone())),
        })
    }

    /// Iterate the cycle's property sets in order.
    ///
    /// Restartable: every call walks the tree from the start. The
    /// iterator is [`Clone`], so `iter().cycle()` gives the endless
    /// stream a redraw loop wants.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Transposed column view: one `(key, column)` pair per key, in
    /// declared key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_cycle::cycle;
    ///
    /// let c = cycle("a", 0..2) * cycle("b", 10..12);
    /// let columns = c.by_key();
    /// assert_eq!(columns[0], ("a".to_string(), vec![0, 0, 1, 1]));
    /// assert_eq!(columns[1], ("b".to_string(), vec![10, 11, 10, 11]));
    /// ```
    #[must_use]
    pub fn by_key(&self) -> Vec<(String, Vec<V>)> {
        let order: Vec<String> = self.key_order().iter().map(|k| (*k).to_string()).collect();
        let mut columns: Vec<Vec<V>> = order
            .iter()
            .map(|_| Vec::with_capacity(self.len()))
            .collect();
        for set in self {
            for (column, key) in columns.iter_mut().zip(&order) {
                column.push(set[key.as_str()].clone());
            }
        }
        order.into_iter().zip(columns).collect()
    }

    /// Collapse the expression tree into its canonical flat form.
    ///
    /// The result iterates identically to `self` and has the same key
    /// set, but holds the fully materialized rows with no remaining
    /// zip/product structure — repeated iteration no longer re-walks a
    /// tree. A single-key cycle simplifies to a plain leaf.
    #[must_use]
    pub fn simplify(&self) -> Self {
        let (keys, rows) = self.materialize();
        Self::from_rows(keys, rows)
    }

    /// Repeat the whole sequence `n` times (`n = 0` yields an empty
    /// cycle). This is concatenation, not a product: keys are unchanged.
    #[must_use]
    pub fn repeat(&self, n: usize) -> Self {
        let (keys, rows) = self.materialize();
        let repeated = (0..n).flat_map(|_| rows.iter().cloned()).collect();
        Self::from_rows(keys, repeated)
    }

    /// Restrict the cycle to the sub-sequence a [`Slice`] selects,
    /// returning it in simplified form with the key set unchanged.
    ///
    /// Range restriction is the only positional access a cycle offers:
    /// there is deliberately no single-index or index-list lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_cycle::{cycle, Slice};
    ///
    /// let lw = cycle("lw", 0..8);
    /// assert_eq!(lw.slice(Slice::range(1, 5)), cycle("lw", 1..5));
    /// assert_eq!(lw.slice(Slice::reversed()), cycle("lw", (0..8).rev()));
    /// ```
    #[must_use]
    pub fn slice(&self, slice: Slice) -> Self {
        let (keys, rows) = self.materialize();
        let picked = slice
            .indices(rows.len())
            .into_iter()
            .map(|i| rows[i].clone())
            .collect();
        Self::from_rows(keys, picked)
    }

    /// Project a single-keyed cycle's values under a new key.
    ///
    /// The source keeps its own key; the result is a fresh leaf. Giving
    /// the copy a key the source also uses is fine here — composing the
    /// two later is what trips the disjointness invariant.
    ///
    /// # Errors
    ///
    /// [`CycleError::MultiKeyed`] unless the source has exactly one key.
    pub fn relabel(&self, key: impl Into<String>) -> Result<Self, CycleError> {
        let order = self.key_order();
        if order.len() != 1 {
            return Err(CycleError::MultiKeyed(order.len()));
        }
        let source = order[0];
        let values = self.iter().map(|set| set[source].clone()).collect();
        Ok(Self {
            node: Node::Leaf {
                key: key.into(),
                values,
            },
        })
    }

    fn materialize(&self) -> (Vec<String>, Vec<PropSet<V>>) {
        let keys = self.key_order().iter().map(|k| (*k).to_string()).collect();
        (keys, self.iter().collect())
    }

    /// Rebuild from materialized rows: a plain leaf when one key
    /// remains, the flat node otherwise.
    fn from_rows(keys: Vec<String>, rows: Vec<PropSet<V>>) -> Self {
        if let [key] = keys.as_slice() {
            let values = rows.iter().map(|set| set[key.as_str()].clone()).collect();
            Self {
                node: Node::Leaf {
                    key: key.clone(),
                    values,
                },
            }
        } else {
            Self {
                node: Node::Flat { keys, rows },
            }
        }
    }
}

// ─── Operators ───────────────────────────────────────────────────────────────

impl<V> Add for Cycler<V> {
    type Output = Self;

    /// Zip composition.
    ///
    /// # Panics
    ///
    /// On shared keys or unequal lengths; [`Cycler::try_zip`] is the
    /// non-panicking form.
    fn add(self, other: Self) -> Self {
        if let Err(err) = check_zip(&self, &other) {
            panic!("{err}");
        }
        Self {
            node: Node::Zip(Box::new(self.node), Box::new(other.node)),
        }
    }
}

impl<V> AddAssign for Cycler<V> {
    /// Rebind `self` to `self + other`. Validates against the unmoved
    /// operands first, so a panic leaves `self` intact.
    fn add_assign(&mut self, other: Self) {
        if let Err(err) = check_zip(self, &other) {
            panic!("{err}");
        }
        let lhs = mem::take(self);
        self.node = Node::Zip(Box::new(lhs.node), Box::new(other.node));
    }
}

impl<V> Mul for Cycler<V> {
    type Output = Self;

    /// Product composition, `self` as the outer loop.
    ///
    /// # Panics
    ///
    /// On shared keys; [`Cycler::try_product`] is the non-panicking form.
    fn mul(self, other: Self) -> Self {
        if let Err(err) = check_disjoint(&self, &other) {
            panic!("{err}");
        }
        Self {
            node: Node::Product(Box::new(self.node), Box::new(other.node)),
        }
    }
}

impl<V> MulAssign for Cycler<V> {
    /// Rebind `self` to `self * other`.
    fn mul_assign(&mut self, other: Self) {
        if let Err(err) = check_disjoint(self, &other) {
            panic!("{err}");
        }
        let lhs = mem::take(self);
        self.node = Node::Product(Box::new(lhs.node), Box::new(other.node));
    }
}

/// `cycle * n` — the sequence concatenated `n` times.
impl<V: Clone> Mul<usize> for Cycler<V> {
    type Output = Self;

    fn mul(self, n: usize) -> Self {
        self.repeat(n)
    }
}

/// `n * cycle` — same repetition, written the other way around.
impl<V: Clone> Mul<Cycler<V>> for usize {
    type Output = Cycler<V>;

    fn mul(self, cycle: Cycler<V>) -> Cycler<V> {
        cycle.repeat(self)
    }
}

// ─── Value semantics ─────────────────────────────────────────────────────────

/// The empty cycle: no keys, length zero.
impl<V> Default for Cycler<V> {
    fn default() -> Self {
        Self {
            node: Node::Flat {
                keys: Vec::new(),
                rows: Vec::new(),
            },
        }
    }
}

/// Observable equality: same key set, element-for-element equal
/// iteration. Internal tree shape is not compared — a simplified cycle
/// equals the tree it came from.
impl<V: Clone + PartialEq> PartialEq for Cycler<V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys() == other.keys() && self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, V: Clone> IntoIterator for &'a Cycler<V> {
    type Item = PropSet<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

// ─── Representation ──────────────────────────────────────────────────────────

/// Constructor notation: leaves as `cycle("c", ['r', 'g', 'b'])`,
/// compositions parenthesized with their operator between the children.
/// Flat nodes print as the zip of their transposed columns — a different
/// tree shape, but observably the same cycle.
impl<V: fmt::Debug> fmt::Display for Cycler<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(&self.node, f)
    }
}

fn write_leaf<'v, V: fmt::Debug + 'v>(
    key: &str,
    values: impl Iterator<Item = &'v V>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "cycle({key:?}, [")?;
    for (i, value) in values.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value:?}")?;
    }
    write!(f, "])")
}

fn write_node<V: fmt::Debug>(node: &Node<V>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match node {
        Node::Leaf { key, values } => write_leaf(key, values.iter(), f),
        Node::Flat { keys, rows } => {
            if keys.is_empty() {
                return write!(f, "cycle()");
            }
            // Left-nested zip of the columns: ((k0 + k1) + k2).
            for _ in 1..keys.len() {
                write!(f, "(")?;
            }
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    write!(f, " + ")?;
                }
                write_leaf(key, rows.iter().map(|set| &set[key.as_str()]), f)?;
                if i > 0 {
                    write!(f, ")")?;
                }
            }
            Ok(())
        }
        Node::Zip(left, right) => {
            write!(f, "(")?;
            write_node(left, f)?;
            write!(f, " + ")?;
            write_node(right, f)?;
            write!(f, ")")
        }
        Node::Product(left, right) => {
            write!(f, "(")?;
            write_node(left, f)?;
            write!(f, " * ")?;
            write_node(right, f)?;
            write!(f, ")")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
