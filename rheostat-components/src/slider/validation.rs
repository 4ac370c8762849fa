//! Parsing and clamping of value-box text.
//!
//! The value box accepts anything the user types; validation decides what
//! the text means. Recognition uses a strict floating-point lexical
//! grammar (optional sign, integer/decimal digits, optional exponent)
//! rather than `f64::from_str`, which also accepts `inf`, `nan`, and
//! trailing-dot forms the control must treat as malformed.

use rheostat_foundation::ValueRange;

/// Visual state of the value box after a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indicator {
    /// The entered value was within bounds.
    InRange,
    /// The entered value was below the minimum and clamped up.
    BelowMin,
    /// The entered value was above the maximum and clamped down.
    AboveMax,
    /// The text was not a number; the value reverted to the default.
    Invalid,
}

impl Indicator {
    /// The value-box text color encoding this state.
    pub(crate) fn color(self) -> &'static str {
        match self {
            Indicator::InRange => "#000",
            Indicator::BelowMin => "green",
            Indicator::AboveMax => "blue",
            Indicator::Invalid => "#f00",
        }
    }
}

/// Outcome of validating raw value-box text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Validated {
    /// The committed value after clamping or reversion.
    pub value: f64,
    /// The indicator to show for this commit.
    pub indicator: Indicator,
}

/// Whether `text` matches the accepted floating-point grammar:
/// `[+-]? digits* ('.' digits+)? ([eE] [+-]? digits+)?`, with a non-empty
/// mantissa ending in digits.
pub(crate) fn is_float_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let integer_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let integer_digits = i - integer_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let fraction_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == fraction_start {
            return false;
        }
    } else if integer_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Validates raw text against the range.
///
/// Out-of-range values always correct to the nearer bound, never to the
/// default; only unrecognizable text reverts to `default_value`.
pub(crate) fn validate(raw: &str, range: &ValueRange, default_value: f64) -> Validated {
    if !is_float_literal(raw) {
        return Validated {
            value: default_value,
            indicator: Indicator::Invalid,
        };
    }
    let Ok(parsed) = raw.parse::<f64>() else {
        return Validated {
            value: default_value,
            indicator: Indicator::Invalid,
        };
    };
    if range.contains(parsed) {
        Validated {
            value: parsed,
            indicator: Indicator::InRange,
        }
    } else if parsed < range.min() {
        Validated {
            value: range.min(),
            indicator: Indicator::BelowMin,
        }
    } else {
        Validated {
            value: range.max(),
            indicator: Indicator::AboveMax,
        }
    }
}
