//! Per-kind validation of raw field values

use thiserror::Error;

use super::field::{FieldValue, RawValue};

/// Validator attached to a field's value slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    /// Any base-10 integer
    Integer,
    /// Integer strictly greater than zero (years, counts)
    PositiveInteger,
    /// Any text, including empty
    FreeText,
    /// A single page number or a strict "start-end" range
    PageRange,
    /// A "day.month.year" date string
    DateText,
}

/// Validation failure; the message is shown to the user verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Not an integer: {0}")]
    NotAnInteger(String),
    #[error("Not a positive number: {0}")]
    NotPositive(i64),
    #[error("Not a text: {0}")]
    NotText(String),
    #[error("Too many '-' symbols: {0}")]
    TooManyHyphens(usize),
    #[error("Bad page: {0}")]
    BadPageRange(String),
    #[error("Start page >= end page: {0}")]
    InvalidRange(i64),
    #[error("Bad date: {0}")]
    BadDate(String),
    #[error("Day out of range: {0}")]
    DayOutOfRange(i64),
    #[error("Month out of range: {0}")]
    MonthOutOfRange(i64),
    #[error("Bad year: {0}")]
    BadYear(i64),
}

/// Validate a raw value against a validator kind.
///
/// `optional` matters only where an empty value is conditionally legal
/// (page ranges and dates); the other kinds ignore it.
pub fn validate(
    kind: ValidatorKind,
    raw: RawValue,
    optional: bool,
) -> Result<FieldValue, ValidationError> {
    match kind {
        ValidatorKind::Integer => parse_integer(raw).map(FieldValue::Number),
        ValidatorKind::PositiveInteger => {
            let number = parse_integer(raw)?;
            if number > 0 {
                Ok(FieldValue::Number(number))
            } else {
                Err(ValidationError::NotPositive(number))
            }
        }
        ValidatorKind::FreeText => match raw {
            RawValue::Text(text) => Ok(FieldValue::Text(text)),
            other => Err(ValidationError::NotText(other.to_string())),
        },
        ValidatorKind::PageRange => validate_pages(raw, optional),
        ValidatorKind::DateText => validate_date(raw, optional),
    }
}

fn parse_integer(raw: RawValue) -> Result<i64, ValidationError> {
    match raw {
        RawValue::Number(number) => Ok(number),
        RawValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger(text)),
        RawValue::Date(date) => Err(ValidationError::NotAnInteger(date)),
    }
}

fn validate_pages(raw: RawValue, optional: bool) -> Result<FieldValue, ValidationError> {
    let text = match raw {
        RawValue::Text(text) => text,
        other => return Err(ValidationError::NotText(other.to_string())),
    };
    if text.is_empty() {
        if optional {
            return Ok(FieldValue::Text(text));
        }
        return Err(ValidationError::BadPageRange(text));
    }
    check_pages(&text)?;
    Ok(FieldValue::Text(text))
}

fn check_pages(text: &str) -> Result<(), ValidationError> {
    let hyphens = text.matches('-').count();
    if hyphens >= 2 {
        return Err(ValidationError::TooManyHyphens(hyphens));
    }
    if hyphens == 1 {
        // split_once cannot fail here, the hyphen was just counted
        let (start, end) = text.split_once('-').unwrap_or((text, ""));
        let (start, end) = match (start.trim().parse::<i64>(), end.trim().parse::<i64>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => return Err(ValidationError::BadPageRange(text.to_string())),
        };
        if start >= end {
            return Err(ValidationError::InvalidRange(start));
        }
        return Ok(());
    }
    if text.trim().parse::<i64>().is_err() {
        return Err(ValidationError::BadPageRange(text.to_string()));
    }
    Ok(())
}

fn validate_date(raw: RawValue, optional: bool) -> Result<FieldValue, ValidationError> {
    let text = match raw {
        RawValue::Text(text) | RawValue::Date(text) => text,
        RawValue::Number(number) => return Err(ValidationError::BadDate(number.to_string())),
    };
    if text.is_empty() {
        if optional {
            return Ok(FieldValue::Date(text));
        }
        return Err(ValidationError::BadDate(text));
    }
    check_date(&text)?;
    Ok(FieldValue::Date(text))
}

fn check_date(text: &str) -> Result<(), ValidationError> {
    let mut parts = text.split('.');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), Some(year), None) => (day, month, year),
        _ => return Err(ValidationError::BadDate(text.to_string())),
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::BadDate(text.to_string()))
    };
    let (day, month, year) = (parse(day)?, parse(month)?, parse(year)?);
    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayOutOfRange(day));
    }
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange(month));
    }
    if year <= 0 {
        return Err(ValidationError::BadYear(year));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> RawValue {
        RawValue::Text(value.to_string())
    }

    mod integers {
        use super::*;

        #[test]
        fn test_number_raw_accepted() {
            let value = validate(ValidatorKind::Integer, RawValue::Number(42), false);
            assert_eq!(value, Ok(FieldValue::Number(42)));
        }

        #[test]
        fn test_text_raw_parsed() {
            let value = validate(ValidatorKind::Integer, text(" 1992 "), false);
            assert_eq!(value, Ok(FieldValue::Number(1992)));
        }

        #[test]
        fn test_garbage_text_rejected() {
            let err = validate(ValidatorKind::Integer, text("abc"), false);
            assert_eq!(err, Err(ValidationError::NotAnInteger("abc".to_string())));
        }

        #[test]
        fn test_negative_allowed_for_plain_integer() {
            let value = validate(ValidatorKind::Integer, RawValue::Number(-5), false);
            assert_eq!(value, Ok(FieldValue::Number(-5)));
        }

        #[test]
        fn test_positive_accepts_year() {
            let value = validate(ValidatorKind::PositiveInteger, RawValue::Number(1992), false);
            assert_eq!(value, Ok(FieldValue::Number(1992)));
        }

        #[test]
        fn test_positive_rejects_zero() {
            let err = validate(ValidatorKind::PositiveInteger, RawValue::Number(0), false);
            assert_eq!(err, Err(ValidationError::NotPositive(0)));
        }

        #[test]
        fn test_positive_rejects_negative() {
            let err = validate(ValidatorKind::PositiveInteger, RawValue::Number(-5), false);
            assert_eq!(err, Err(ValidationError::NotPositive(-5)));
        }

        #[test]
        fn test_positive_rejects_garbage_text() {
            let err = validate(ValidatorKind::PositiveInteger, text("abc"), false);
            assert_eq!(err, Err(ValidationError::NotAnInteger("abc".to_string())));
        }
    }

    mod free_text {
        use super::*;

        #[test]
        fn test_any_text_accepted() {
            let value = validate(ValidatorKind::FreeText, text("Корнелиус Х."), false);
            assert_eq!(value, Ok(FieldValue::Text("Корнелиус Х.".to_string())));
        }

        #[test]
        fn test_empty_text_accepted() {
            let value = validate(ValidatorKind::FreeText, text(""), false);
            assert_eq!(value, Ok(FieldValue::Text(String::new())));
        }

        #[test]
        fn test_number_raw_rejected() {
            let err = validate(ValidatorKind::FreeText, RawValue::Number(7), false);
            assert_eq!(err, Err(ValidationError::NotText("7".to_string())));
        }
    }

    mod page_ranges {
        use super::*;

        #[test]
        fn test_single_page() {
            let value = validate(ValidatorKind::PageRange, text("116"), true);
            assert_eq!(value, Ok(FieldValue::Text("116".to_string())));
        }

        #[test]
        fn test_single_page_with_whitespace() {
            let value = validate(ValidatorKind::PageRange, text(" 116 "), true);
            assert_eq!(value, Ok(FieldValue::Text(" 116 ".to_string())));
        }

        #[test]
        fn test_valid_range() {
            let value = validate(ValidatorKind::PageRange, text("207-228"), true);
            assert_eq!(value, Ok(FieldValue::Text("207-228".to_string())));
        }

        #[test]
        fn test_reversed_range_rejected() {
            let err = validate(ValidatorKind::PageRange, text("228-207"), true);
            assert_eq!(err, Err(ValidationError::InvalidRange(228)));
        }

        #[test]
        fn test_equal_bounds_rejected() {
            let err = validate(ValidatorKind::PageRange, text("207-207"), true);
            assert_eq!(err, Err(ValidationError::InvalidRange(207)));
        }

        #[test]
        fn test_two_hyphens_rejected() {
            let err = validate(ValidatorKind::PageRange, text("1-2-3"), true);
            assert_eq!(err, Err(ValidationError::TooManyHyphens(2)));
        }

        #[test]
        fn test_non_numeric_rejected() {
            let err = validate(ValidatorKind::PageRange, text("abc"), true);
            assert_eq!(err, Err(ValidationError::BadPageRange("abc".to_string())));
        }

        #[test]
        fn test_non_numeric_half_rejected() {
            let err = validate(ValidatorKind::PageRange, text("12-abc"), true);
            assert_eq!(err, Err(ValidationError::BadPageRange("12-abc".to_string())));
        }

        #[test]
        fn test_empty_valid_when_optional() {
            let value = validate(ValidatorKind::PageRange, text(""), true);
            assert_eq!(value, Ok(FieldValue::Text(String::new())));
        }

        #[test]
        fn test_empty_rejected_when_required() {
            let err = validate(ValidatorKind::PageRange, text(""), false);
            assert_eq!(err, Err(ValidationError::BadPageRange(String::new())));
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn test_valid_date() {
            let value = validate(ValidatorKind::DateText, text("05.10.2008"), false);
            assert_eq!(value, Ok(FieldValue::Date("05.10.2008".to_string())));
        }

        #[test]
        fn test_date_raw_accepted() {
            let raw = RawValue::Date("05.10.2008".to_string());
            let value = validate(ValidatorKind::DateText, raw, false);
            assert_eq!(value, Ok(FieldValue::Date("05.10.2008".to_string())));
        }

        #[test]
        fn test_day_out_of_range() {
            let err = validate(ValidatorKind::DateText, text("32.10.2008"), false);
            assert_eq!(err, Err(ValidationError::DayOutOfRange(32)));
        }

        #[test]
        fn test_day_zero_rejected() {
            let err = validate(ValidatorKind::DateText, text("0.10.2008"), false);
            assert_eq!(err, Err(ValidationError::DayOutOfRange(0)));
        }

        #[test]
        fn test_month_out_of_range() {
            let err = validate(ValidatorKind::DateText, text("05.13.2008"), false);
            assert_eq!(err, Err(ValidationError::MonthOutOfRange(13)));
        }

        #[test]
        fn test_year_zero_rejected() {
            let err = validate(ValidatorKind::DateText, text("05.10.0000"), false);
            assert_eq!(err, Err(ValidationError::BadYear(0)));
        }

        #[test]
        fn test_wrong_separator_rejected() {
            let err = validate(ValidatorKind::DateText, text("05-10-2008"), false);
            assert_eq!(
                err,
                Err(ValidationError::BadDate("05-10-2008".to_string()))
            );
        }

        #[test]
        fn test_too_many_separators_rejected() {
            let err = validate(ValidatorKind::DateText, text("05.10.20.08"), false);
            assert_eq!(
                err,
                Err(ValidationError::BadDate("05.10.20.08".to_string()))
            );
        }

        #[test]
        fn test_day_31_in_february_accepted() {
            // Day and month bounds are fixed ranges, not calendar-aware
            let value = validate(ValidatorKind::DateText, text("31.02.2008"), false);
            assert_eq!(value, Ok(FieldValue::Date("31.02.2008".to_string())));
        }

        #[test]
        fn test_empty_valid_when_optional() {
            let value = validate(ValidatorKind::DateText, text(""), true);
            assert_eq!(value, Ok(FieldValue::Date(String::new())));
        }

        #[test]
        fn test_empty_rejected_when_required() {
            let err = validate(ValidatorKind::DateText, text(""), false);
            assert_eq!(err, Err(ValidationError::BadDate(String::new())));
        }
    }
}
