//! Date conversion.
//!
//! Numero exports dates in an RFC 2822-like form such as
//! `"Tue, 14 Sep 2021 18:36:41 GMT"`. Only the day, month name and year
//! are kept.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Formats of the `day month year` triad: abbreviated, then full month name.
const TRIAD_FORMATS: [&str; 2] = ["%d %b %Y", "%d %B %Y"];

/// Converts a Numero date string into a calendar date.
///
/// The string is split on single spaces and the second through fourth
/// fields are parsed as `day month-name year`. The leading field (usually
/// the weekday) and anything after the year are ignored. Full month names
/// are accepted as well as abbreviations. The year must have four digits.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if the string has fewer than four
/// fields, the year is not four digits, or the triad is not a valid date.
///
/// # Examples
///
/// ```
/// use target_ispolitical::transform::convert_date;
/// use chrono::NaiveDate;
///
/// let date = convert_date("Tue, 14 Sep 2021 18:36:41 GMT").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2021, 9, 14).unwrap());
/// ```
pub fn convert_date(raw: &str) -> EngineResult<NaiveDate> {
    let fields: Vec<&str> = raw.split(' ').collect();
    if fields.len() < 4 {
        return Err(EngineError::InvalidDate {
            value: raw.to_string(),
            message: "expected '<weekday> <day> <month> <year> ...'".to_string(),
        });
    }

    let year = fields[3];
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidDate {
            value: raw.to_string(),
            message: format!("year '{}' is not four digits", year),
        });
    }

    let triad = fields[1..4].join(" ");
    let mut last_error = None;
    for format in TRIAD_FORMATS {
        match NaiveDate::parse_from_str(&triad, format) {
            Ok(date) => return Ok(date),
            Err(e) => last_error = Some(e),
        }
    }

    Err(EngineError::InvalidDate {
        value: raw.to_string(),
        message: match last_error {
            Some(e) => format!("'{}' is not a day/month/year triad: {}", triad, e),
            None => format!("'{}' is not a day/month/year triad", triad),
        },
    })
}
