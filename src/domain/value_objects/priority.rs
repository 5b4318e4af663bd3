//! Priority Value Object
//!
//! A node's sort priority is either absent, a number or a piece of text.
//! Each priority-based sort mode coerces it with its own explicit rule.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Sortable priority attached to a navigation node
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Priority {
    /// No priority assigned
    #[default]
    Absent,
    /// Numeric priority
    Number(f64),
    /// Textual priority
    Text(String),
}

/// Class a priority falls into under native comparison.
///
/// Classes are ordered: absent first, then anything numeric, then free text.
enum NativeKey<'a> {
    Absent,
    Numeric(f64),
    Text(&'a str),
}

impl NativeKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            NativeKey::Absent => 0,
            NativeKey::Numeric(_) => 1,
            NativeKey::Text(_) => 2,
        }
    }
}

impl Priority {
    pub fn is_absent(&self) -> bool {
        matches!(self, Priority::Absent)
    }

    /// Native comparison over the stored type.
    ///
    /// Text that is a complete numeric string compares as a number, so
    /// `10` and `"10"` are equal. The result is a total order.
    pub fn native_cmp(&self, other: &Priority) -> Ordering {
        let (left, right) = (self.native_key(), other.native_key());
        match (&left, &right) {
            (NativeKey::Numeric(a), NativeKey::Numeric(b)) => compare_f64(*a, *b),
            (NativeKey::Text(a), NativeKey::Text(b)) => a.cmp(b),
            _ => left.rank().cmp(&right.rank()),
        }
    }

    /// Numeric comparison after [`Priority::to_number`] coercion.
    pub fn numeric_cmp(&self, other: &Priority) -> Ordering {
        compare_f64(self.to_number(), other.to_number())
    }

    /// Lexical comparison after [`Priority::to_lexical`] coercion.
    pub fn lexical_cmp(&self, other: &Priority) -> Ordering {
        self.to_lexical().cmp(&other.to_lexical())
    }

    /// Coerce to a float. Text contributes its leading numeric prefix;
    /// anything else becomes zero.
    pub fn to_number(&self) -> f64 {
        match self {
            Priority::Absent => 0.0,
            Priority::Number(value) => *value,
            Priority::Text(text) => leading_number(text),
        }
    }

    /// Coerce to lower-cased text.
    pub fn to_lexical(&self) -> String {
        self.to_string().to_lowercase()
    }

    fn native_key(&self) -> NativeKey<'_> {
        match self {
            Priority::Absent => NativeKey::Absent,
            Priority::Number(value) => NativeKey::Numeric(*value),
            Priority::Text(text) => match numeric_value(text) {
                Some(value) => NativeKey::Numeric(value),
                None => NativeKey::Text(text),
            },
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Absent => Ok(()),
            Priority::Number(value) => f.write_str(&format_number(*value)),
            Priority::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Priority::Absent => serializer.serialize_none(),
            Priority::Number(value) => serializer.serialize_f64(*value),
            Priority::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl From<f64> for Priority {
    fn from(value: f64) -> Self {
        Priority::Number(value)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority::Number(f64::from(value))
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority::Number(value as f64)
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Priority::Number(f64::from(value))
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::Text(value.to_string())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::Text(value)
    }
}

impl<T: Into<Priority>> From<Option<T>> for Priority {
    fn from(value: Option<T>) -> Self {
        value.map_or(Priority::Absent, Into::into)
    }
}

/// Total order on floats where `-0.0 == 0.0`.
fn compare_f64(a: f64, b: f64) -> Ordering {
    // Adding 0.0 folds negative zero into positive zero.
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Integral values print without a fraction (`10`, not `10.0`).
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Value of a string that is numeric in its entirety (surrounding
/// whitespace allowed), e.g. `" 12.5"`, `"-3e2"`.
fn numeric_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !well_formed {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Longest numeric prefix of `text`, or zero when there is none.
fn leading_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let integer_digits = digits(end);
    end += integer_digits;

    let mut mantissa_digits = integer_digits;
    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = digits(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
            mantissa_digits += fraction_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}
