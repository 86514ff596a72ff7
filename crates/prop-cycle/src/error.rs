// SPDX-License-Identifier: MIT
//
// Errors raised by cycle composition, relabeling, and slicing.
//
// Every error is reported synchronously at the point of violation and
// leaves both operands untouched: a composition either returns a fully
// valid cycle or fails before any node is built.

use thiserror::Error;

/// Errors produced when composing, relabeling, or slicing cycles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// Both operands of a composition carry the same key.
    ///
    /// Raised by zip and product alike, including when the duplicate key
    /// is buried in a nested composition on either side.
    #[error("key {0:?} appears on both sides of the composition")]
    KeyCollision(String),

    /// Zip combines its operands position by position, so both must
    /// produce the same number of property sets. No length is implicitly
    /// broadcast, not even 1.
    #[error("zip requires equal lengths, got {left} and {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Relabeling projects values out of exactly one source key.
    #[error("cannot relabel a cycle with {0} keys, exactly one is required")]
    MultiKeyed(usize),

    /// A slice step of zero selects nothing and walks nowhere.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_message_names_the_key() {
        let err = CycleError::KeyCollision("color".to_string());
        assert_eq!(
            err.to_string(),
            "key \"color\" appears on both sides of the composition"
        );
    }

    #[test]
    fn mismatch_message_names_both_lengths() {
        let err = CycleError::LengthMismatch { left: 3, right: 15 };
        assert_eq!(err.to_string(), "zip requires equal lengths, got 3 and 15");
    }

    #[test]
    fn multikey_message_names_the_count() {
        let err = CycleError::MultiKeyed(2);
        assert_eq!(
            err.to_string(),
            "cannot relabel a cycle with 2 keys, exactly one is required"
        );
    }

    #[test]
    fn zero_step_message() {
        assert_eq!(CycleError::ZeroStep.to_string(), "slice step cannot be zero");
    }
}
