// SPDX-License-Identifier: MIT
//
// Value — a tagged style value for cycles that mix types across keys.
//
// The core stays generic: a Cycler<f32> pays nothing for this. Value is
// the opt-in for the common styling case where one key cycles colors
// and another cycles numbers, which a single generic parameter cannot
// express on its own. Debug delegates to the payload so rendered output
// reads like the underlying value, not like an enum.

use std::fmt;

/// A style value: one of the printable, comparable payload types a
/// styling consumer typically cycles.
///
/// # Examples
///
/// ```
/// use prop_cycle::{cycle, Value};
///
/// let color = cycle("c", "rgb".chars().map(Value::from));
/// let width = cycle("lw", (0..3).map(Value::from));
///
/// let paired = color + width;
/// let first = paired.iter().next().unwrap();
/// assert_eq!(first["c"], Value::from('r'));
/// assert_eq!(first["lw"], Value::from(0));
/// ```
#[derive(Clone, PartialEq)]
pub enum Value {
    /// A boolean flag (e.g. marker fill on/off).
    Bool(bool),
    /// An integer quantity (e.g. line width in cells).
    Int(i64),
    /// A floating quantity (e.g. alpha, dash spacing).
    Float(f64),
    /// A single character (e.g. a marker glyph or color letter).
    Char(char),
    /// A string (e.g. a named color or line style).
    Str(String),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b:?}"),
            Value::Int(n) => write!(f, "{n:?}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_matches_the_payload() {
        assert_eq!(format!("{:?}", Value::from('r')), "'r'");
        assert_eq!(format!("{:?}", Value::from(0)), "0");
        assert_eq!(format!("{:?}", Value::from(0.5)), "0.5");
        assert_eq!(format!("{:?}", Value::from("dashed")), "\"dashed\"");
        assert_eq!(format!("{:?}", Value::from(true)), "true");
    }

    #[test]
    fn equality_is_per_variant() {
        assert_eq!(Value::from('r'), Value::from('r'));
        assert_ne!(Value::from('r'), Value::from("r"));
        assert_ne!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn integer_widths_converge() {
        assert_eq!(Value::from(7_i32), Value::from(7_i64));
    }
}
