// SPDX-License-Identifier: MIT

//! # prop-cycle — composable property cycles
//!
//! Finite, ordered cycles of key → value assignments for driving
//! repeated styling decisions: "use color r, g, b in turn while the
//! line width cycles 0, 1, 2". Cycles are immutable values with an
//! arithmetic-flavored algebra — zip two cycles position-wise with `+`,
//! cross them with `*`, repeat one with `n *` — and every composition
//! is validated (disjoint keys, compatible lengths) before it exists.
//!
//! # Architecture
//!
//! ```text
//! cycle(key, values) / relabel       leaf construction
//!     │
//!     ▼
//! cycle.rs:  + (zip) · * (product) · n* (repeat) — validated composition
//!     │
//!     ▼
//! iter.rs:   lazy cursor over the expression tree
//!     │
//!     ▼
//! cycle.rs:  simplify / slice — materialized canonical form
//!     │
//!     ▼
//! table.rs:  constructor notation (Display) and box-drawing table
//! ```
//!
//! # Examples
//!
//! ```
//! use prop_cycle::cycle;
//!
//! let color = cycle("color", "rgb".chars());
//! let edge = cycle("edge", "kkw".chars());
//!
//! // Position-wise pairing: 3 property sets carrying both keys.
//! let zipped = color.clone() + edge;
//! assert_eq!(zipped.len(), 3);
//! let first = zipped.iter().next().unwrap();
//! assert_eq!(first["color"], 'r');
//! assert_eq!(first["edge"], 'k');
//!
//! // Cartesian crossing: color varies slowest.
//! let sizes = cycle("size", vec!['s', 'l']);
//! let crossed = color * sizes;
//! assert_eq!(crossed.len(), 6);
//! ```
//!
//! Cycles that mix value types across keys (a color and a number) use
//! the [`Value`] union; single-typed cycles stay fully generic.

pub mod cycle;
pub mod error;
pub mod iter;
pub mod set;
pub mod slice;
mod table;
pub mod value;

pub use cycle::{Cycler, cycle};
pub use error::CycleError;
pub use iter::Iter;
pub use set::PropSet;
pub use slice::Slice;
pub use value::Value;
