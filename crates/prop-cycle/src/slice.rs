// SPDX-License-Identifier: MIT
//
// Range specifications for restricting a cycle to a sub-sequence.
//
// A Slice is an optional signed start, an optional signed stop, and a
// non-zero signed step. Resolution is forgiving the way sequence ranges
// usually are: negative bounds count from the end, out-of-range bounds
// clamp instead of failing, and a negative step walks backward with its
// defaults flipped (last position down to before the first). The only
// invalid spec is a zero step, refused at construction.
//
// Range restriction is the whole positional surface a cycle offers.
// There is deliberately no single-index lookup: a cycle is consumed in
// turn, not addressed, so handing out position i would promise an
// access pattern the type does not support.

// Bounds are signed (negative indices count from the end) while the
// resolved positions are unsigned; the casts below are range-checked by
// the clamping that precedes them.
#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::error::CycleError;

/// A range specification: optional signed bounds and a non-zero step.
///
/// # Examples
///
/// ```
/// use prop_cycle::Slice;
///
/// assert_eq!(Slice::FULL.indices(4), [0, 1, 2, 3]);
/// assert_eq!(Slice::reversed().indices(4), [3, 2, 1, 0]);
/// assert_eq!(Slice::range(1, 3).indices(4), [1, 2]);
/// assert_eq!(Slice::range(0, 4).with_step(2).unwrap().indices(4), [0, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
}

impl Slice {
    /// The full range: every position, in order.
    pub const FULL: Self = Self {
        start: None,
        stop: None,
        step: 1,
    };

    /// A fully general spec.
    ///
    /// # Errors
    ///
    /// [`CycleError::ZeroStep`] if `step` is zero.
    pub const fn new(
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Result<Self, CycleError> {
        if step == 0 {
            return Err(CycleError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    /// Positions `start..stop` with step 1.
    #[must_use]
    pub const fn range(start: isize, stop: isize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: 1,
        }
    }

    /// The whole range walked backward.
    #[must_use]
    pub const fn reversed() -> Self {
        Self {
            start: None,
            stop: None,
            step: -1,
        }
    }

    /// This spec with a different step.
    ///
    /// # Errors
    ///
    /// [`CycleError::ZeroStep`] if `step` is zero.
    pub const fn with_step(self, step: isize) -> Result<Self, CycleError> {
        if step == 0 {
            return Err(CycleError::ZeroStep);
        }
        Ok(Self {
            start: self.start,
            stop: self.stop,
            step,
        })
    }

    /// Resolve against a sequence of `len` positions, yielding the
    /// selected indices in traversal order.
    #[must_use]
    pub fn indices(&self, len: usize) -> Vec<usize> {
        let len = isize::try_from(len).unwrap_or(isize::MAX);

        // Walking backward, the usable window shifts down by one: the
        // default start is the last position and the default stop is the
        // sentinel just before position 0.
        let (lower, upper) = if self.step < 0 { (-1, len - 1) } else { (0, len) };

        let resolve = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) => {
                let b = if b < 0 { b + len } else { b };
                b.clamp(lower, upper)
            }
        };

        let start = resolve(self.start, if self.step < 0 { upper } else { lower });
        let stop = resolve(self.stop, if self.step < 0 { lower } else { upper });

        let mut out = Vec::new();
        let mut i = start;
        if self.step > 0 {
            while i < stop {
                out.push(i as usize);
                i += self.step;
            }
        } else {
            while i > stop {
                out.push(i as usize);
                i += self.step;
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
