//! Phone number normalization.

use phonenumber::{Mode, country};

use crate::error::{EngineError, EngineResult};

/// Country calling code of the North American Numbering Plan.
const NANP_COUNTRY_CODE: u16 = 1;

/// Converts a raw phone string into the `+1 (XXX) XXX-XXXX` display form.
///
/// Numbers without a leading `+` are read as US numbers.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPhone`] if the string does not parse, is
/// not a valid number, or belongs to a country outside the NANP.
///
/// # Examples
///
/// ```
/// use target_ispolitical::transform::convert_phone_number;
///
/// assert_eq!(
///     convert_phone_number("+1 650-253-0000").unwrap(),
///     "+1 (650) 253-0000"
/// );
/// ```
pub fn convert_phone_number(raw: &str) -> EngineResult<String> {
    let invalid = |message: String| EngineError::InvalidPhone {
        value: raw.to_string(),
        message,
    };

    let number =
        phonenumber::parse(Some(country::Id::US), raw).map_err(|e| invalid(e.to_string()))?;

    if number.code().value() != NANP_COUNTRY_CODE {
        return Err(invalid(format!(
            "country code +{} is not North American",
            number.code().value()
        )));
    }

    if !phonenumber::is_valid(&number) {
        return Err(invalid("not a valid number".to_string()));
    }

    Ok(format!("+1 {}", number.format().mode(Mode::National)))
}
