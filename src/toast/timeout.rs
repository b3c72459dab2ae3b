use std::fmt;
use std::time::Duration;

/// Auto-dismiss delay of a toast
///
/// Values are produced by integer-prefix parsing of arbitrary input, so
/// unparseable input is kept as `NotANumber` instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Delay in milliseconds. Negative delays fire immediately.
    Millis(i64),
    /// Input had no leading integer. No timer is scheduled for it.
    NotANumber,
}

impl Timeout {
    /// Coerce any displayable value to a timeout
    ///
    /// `100`, `"100"` and `"100ms"` all give `Millis(100)`; `"soon"` gives
    /// `NotANumber`.
    pub fn from_value<V: fmt::Display>(value: V) -> Self {
        Self::parse(&value.to_string())
    }

    /// Parse the leading integer of `input`
    pub fn parse(input: &str) -> Self {
        match parse_integer_prefix(input) {
            Some(ms) => Timeout::Millis(ms),
            None => Timeout::NotANumber,
        }
    }

    /// Delay to wait before dismissing, `None` when no timer applies
    pub fn delay(&self) -> Option<Duration> {
        match self {
            Timeout::Millis(ms) => Some(Duration::from_millis((*ms).max(0) as u64)),
            Timeout::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Timeout::NotANumber)
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeout::Millis(ms) => write!(f, "{}ms", ms),
            Timeout::NotANumber => write!(f, "NaN"),
        }
    }
}

/// Longest leading integer of `input`, after whitespace and an optional sign.
///
/// A `0x`/`0X` prefix switches to hexadecimal. Trailing characters are
/// ignored and overflow saturates.
fn parse_integer_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();

    let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    let (radix, s) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => (16, rest),
        None => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    // Accumulate with the sign applied so i64::MIN stays representable.
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            let shifted = acc.saturating_mul(radix as i64);
            if negative {
                shifted.saturating_sub(d as i64)
            } else {
                shifted.saturating_add(d as i64)
            }
        });

    Some(value)
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod timeout_tests;
