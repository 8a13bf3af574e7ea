use crate::error::ParseTimeError;

/// One of the three fields of an `HH:MM:SS` time string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    /// Largest value the input layer accepts for this field
    pub fn max(self) -> i64 {
        match self {
            TimeField::Hours => 99,
            TimeField::Minutes | TimeField::Seconds => 59,
        }
    }

    fn index(self) -> usize {
        match self {
            TimeField::Hours => 0,
            TimeField::Minutes => 1,
            TimeField::Seconds => 2,
        }
    }
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Hours => write!(f, "hours"),
            TimeField::Minutes => write!(f, "minutes"),
            TimeField::Seconds => write!(f, "seconds"),
        }
    }
}

/// Format whole seconds as `HH:MM:SS`
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a playback position, dropping the fractional part.
pub fn format_position(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return format_time(0);
    }
    format_time(seconds.floor() as u64)
}

/// Parse `HH:MM:SS` into seconds.
///
/// Fields are read left to right as hours, minutes, seconds; missing
/// trailing fields count as zero and anything after the third field is
/// ignored. Fields are not range-checked, so `"00:99:99"` is accepted.
pub fn parse_time(text: &str) -> Result<i64, ParseTimeError> {
    let mut parts = text.split(':');
    let hours = parse_field(parts.next().unwrap_or("0"), TimeField::Hours)?;
    let minutes = parse_field(parts.next().unwrap_or("0"), TimeField::Minutes)?;
    let seconds = parse_field(parts.next().unwrap_or("0"), TimeField::Seconds)?;

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| ParseTimeError::Overflow(text.to_string()))
}

/// Integer prefix parse: optional whitespace and sign, then at least one
/// digit. Anything after the digits is ignored.
fn parse_field(raw: &str, field: TimeField) -> Result<i64, ParseTimeError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(ParseTimeError::InvalidField {
            field,
            value: raw.to_string(),
        });
    }

    let value: i64 = rest[..digits_len]
        .parse()
        .map_err(|_| ParseTimeError::Overflow(raw.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// A time value edited one field at a time.
///
/// Each field is clamped and zero-padded on every change, so the value is
/// always a well-formed `HH:MM:SS` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInput {
    value: String,
}

impl TimeInput {
    pub fn new() -> Self {
        Self {
            value: format_time(0),
        }
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self {
            value: format_time(seconds),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn component(&self, field: TimeField) -> String {
        self.components()[field.index()].clone()
    }

    fn components(&self) -> [String; 3] {
        let mut parts = self.value.split(':').map(|v| {
            if v.is_empty() {
                "00".to_string()
            } else {
                v.to_string()
            }
        });
        [
            parts.next().unwrap_or_else(|| "00".to_string()),
            parts.next().unwrap_or_else(|| "00".to_string()),
            parts.next().unwrap_or_else(|| "00".to_string()),
        ]
    }

    /// Replace one field with `raw`, clamped to the field's range.
    /// Empty or non-numeric input counts as zero.
    pub fn set_component(&mut self, field: TimeField, raw: &str) {
        let raw = if raw.is_empty() { "0" } else { raw };
        let value = parse_field(raw, field).unwrap_or(0).clamp(0, field.max());

        let mut parts = self.components();
        parts[field.index()] = format!("{:02}", value);
        self.value = parts.join(":");
    }

    /// Type a digit into a field: the field shifts left and the digit
    /// becomes the last one.
    pub fn push_digit(&mut self, field: TimeField, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let current = self.component(field);
        let last = current.chars().last().unwrap_or('0');
        self.set_component(field, &format!("{}{}", last, digit));
    }

    /// Erase the last digit of a field, shifting the rest right.
    pub fn pop_digit(&mut self, field: TimeField) {
        let current = self.component(field);
        let mut chars: Vec<char> = current.chars().collect();
        chars.pop();
        let shifted: String = std::iter::once('0').chain(chars).collect();
        self.set_component(field, &shifted);
    }

    pub fn seconds(&self) -> Result<i64, ParseTimeError> {
        parse_time(&self.value)
    }

    pub fn clear(&mut self) {
        self.value = format_time(0);
    }
}

impl Default for TimeInput {
    fn default() -> Self {
        Self::new()
    }
}
