use tracing::debug;

use super::time::parse_time;
use crate::error::ValidationError;

/// A caption that passed every check, with times in whole seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCaption {
    pub text: String,
    pub start: u64,
    pub end: u64,
}

/// Check a caption form against the video duration.
///
/// Checks run in a fixed order and stop at the first failure:
/// required fields, time format, negative values, start before end,
/// start within duration, end within duration, minimum length.
/// `duration` is `None` until the video metadata is known, in which
/// case the two duration checks are skipped.
pub fn validate_caption(
    text: &str,
    start: &str,
    end: &str,
    duration: Option<f64>,
) -> Result<ValidCaption, ValidationError> {
    if text.is_empty() || start.is_empty() || end.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let (start_secs, end_secs) = match (parse_time(start), parse_time(end)) {
        (Ok(s), Ok(e)) => (s, e),
        (s, e) => {
            debug!(start_err = ?s.err(), end_err = ?e.err(), "Rejected caption times");
            return Err(ValidationError::InvalidTimeFormat);
        }
    };

    if start_secs < 0 || end_secs < 0 {
        return Err(ValidationError::NegativeTime);
    }
    if start_secs >= end_secs {
        return Err(ValidationError::StartNotBeforeEnd);
    }

    if let Some(duration) = duration {
        if start_secs as f64 > duration {
            return Err(ValidationError::StartExceedsDuration);
        }
        if end_secs as f64 > duration {
            return Err(ValidationError::EndExceedsDuration);
        }
    }

    if end_secs - start_secs < 1 {
        return Err(ValidationError::TooShort);
    }

    Ok(ValidCaption {
        text: text.to_string(),
        start: start_secs as u64,
        end: end_secs as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(
        text: &str,
        start: &str,
        end: &str,
        duration: f64,
    ) -> Result<ValidCaption, ValidationError> {
        validate_caption(text, start, end, Some(duration))
    }

    #[test]
    fn test_accepts_valid_caption() {
        let caption = check("hello", "00:00:05", "00:00:10", 100.0).unwrap();
        assert_eq!(
            caption,
            ValidCaption {
                text: "hello".to_string(),
                start: 5,
                end: 10,
            }
        );
    }

    #[test]
    fn test_each_rule_message() {
        assert_eq!(
            check("", "00:00:01", "00:00:02", 100.0).unwrap_err().to_string(),
            "All fields are required."
        );
        assert_eq!(
            check("a", "00:00:01", "xx", 100.0).unwrap_err().to_string(),
            "Invalid time format."
        );
        assert_eq!(
            check("a", "-1:00:00", "00:00:02", 100.0).unwrap_err().to_string(),
            "Time values cannot be negative."
        );
        assert_eq!(
            check("a", "00:00:05", "00:00:05", 100.0).unwrap_err().to_string(),
            "Start time must be less than end time."
        );
        assert_eq!(
            check("a", "00:01:41", "00:01:50", 100.0).unwrap_err().to_string(),
            "Start time exceeds video duration."
        );
        assert_eq!(
            check("a", "00:01:40", "00:01:41", 100.0).unwrap_err().to_string(),
            "End time exceeds video duration."
        );
        // Whole-second times that pass the ordering check are always at
        // least one second apart, so this one is only seen as text.
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Caption duration must be at least 1 second."
        );
    }

    #[test]
    fn test_empty_time_fields_are_missing() {
        assert_eq!(
            check("a", "", "00:00:02", 100.0),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            check("a", "00:00:01", "", 100.0),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_caption("a", "", "", None),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_messages_are_distinct() {
        let all = [
            ValidationError::MissingFields,
            ValidationError::InvalidTimeFormat,
            ValidationError::NegativeTime,
            ValidationError::StartNotBeforeEnd,
            ValidationError::StartExceedsDuration,
            ValidationError::EndExceedsDuration,
            ValidationError::TooShort,
        ];
        let mut messages: Vec<String> = all.iter().map(|e| e.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Empty text and a malformed time: rule 1 reported.
        assert_eq!(
            check("", "bad", "00:00:01", 10.0),
            Err(ValidationError::MissingFields)
        );
        // Malformed end and negative start: rule 2 reported.
        assert_eq!(
            check("a", "-1:00:00", "zz", 10.0),
            Err(ValidationError::InvalidTimeFormat)
        );
        // Negative and reversed: rule 3 reported.
        assert_eq!(
            check("a", "00:00:10", "-1:00:00", 10.0),
            Err(ValidationError::NegativeTime)
        );
        // Reversed and past the duration: rule 4 reported.
        assert_eq!(
            check("a", "00:10:00", "00:09:00", 10.0),
            Err(ValidationError::StartNotBeforeEnd)
        );
        // Both past the duration: rule 5 reported.
        assert_eq!(
            check("a", "00:00:20", "00:00:30", 10.0),
            Err(ValidationError::StartExceedsDuration)
        );
    }

    #[test]
    fn test_duration_boundaries() {
        // 99s parses from the truncated form, so 99 -> 99 is reversed.
        assert_eq!(
            check("a", "00:01:39", "00:01:39", 100.0),
            Err(ValidationError::StartNotBeforeEnd)
        );
        assert!(check("a", "00:01:39", "00:01:40", 100.0).is_ok());
        assert_eq!(
            check("a", "00:01:40", "00:01:41", 100.0),
            Err(ValidationError::EndExceedsDuration)
        );
    }

    #[test]
    fn test_minimum_length_boundary() {
        assert_eq!(
            check("a", "00:00:05", "00:00:05", 100.0),
            Err(ValidationError::StartNotBeforeEnd)
        );
        let caption = check("a", "00:00:05", "00:00:06", 100.0).unwrap();
        assert_eq!(caption.end - caption.start, 1);
    }

    #[test]
    fn test_fractional_duration() {
        assert!(check("a", "00:00:10", "00:00:12", 12.5).is_ok());
        assert_eq!(
            check("a", "00:00:10", "00:00:13", 12.5),
            Err(ValidationError::EndExceedsDuration)
        );
    }

    #[test]
    fn test_unknown_duration_skips_range_checks() {
        assert!(validate_caption("a", "10:00:00", "11:00:00", None).is_ok());
        assert_eq!(
            validate_caption("a", "00:00:05", "00:00:01", None),
            Err(ValidationError::StartNotBeforeEnd)
        );
    }
}
