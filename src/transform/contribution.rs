//! Contribution and refund transformation.
//!
//! This module maps a [`ContributionRecord`] onto the PublicForms contact
//! schema. Individuals become an [`IndividualForm`], organizations a
//! [`CompanyForm`]; both carry exactly one transaction, one email and one
//! phone.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompanyForm, ContactKind, ContributionRecord, Email, EntityType, FormEntityType,
    IndividualForm, Phone, PublicForm, Transaction, TransactionType,
};

use super::{convert_date, convert_phone_number};

/// Transforms one contribution or refund into a PublicForms contact.
///
/// # Arguments
///
/// * `record` - The source record
/// * `transaction_type` - `MonetaryContribution` for contributions,
///   `RefundedContribution` for refunds
///
/// # Errors
///
/// Fails if the record's date or phone number cannot be converted.
///
/// # Examples
///
/// ```
/// use target_ispolitical::models::{ContributionRecord, PublicForm, TransactionType};
/// use target_ispolitical::transform::convert_contribution;
///
/// let record: ContributionRecord = serde_json::from_value(serde_json::json!({
///     "id": "ctb_1",
///     "type": "contribution",
///     "form": "donate",
///     "entity_type": "Organization",
///     "first_name": "Acme PAC",
///     "email": "pac@example.com",
///     "phone": "202-456-1111",
///     "amount": 500,
///     "date": "Wed, 15 Sep 2021 10:00:00 GMT"
/// })).unwrap();
///
/// let form = convert_contribution(&record, TransactionType::MonetaryContribution).unwrap();
/// assert!(matches!(form, PublicForm::Company(_)));
/// ```
pub fn convert_contribution(
    record: &ContributionRecord,
    transaction_type: TransactionType,
) -> EngineResult<PublicForm> {
    let date = convert_date(&record.date)?;
    let phone_number = convert_phone_number(&record.phone)?;
    let emails = vec![Email {
        email_address: record.email.clone(),
    }];

    let form = match record.entity_type {
        EntityType::Individual => PublicForm::Individual(IndividualForm {
            entity_type: FormEntityType::Individual,
            name_prefix: record.title.clone(),
            first_name: record.first_name.clone(),
            middle_name: record.middle_name.clone(),
            last_name: record.last_name.clone(),
            name_suffix: record.suffix.clone(),
            nickname: record.salutation.clone(),
            occupation: record.occupation.clone(),
            employer: record.employer.clone(),
            address_type: ContactKind::Home,
            company: String::new(),
            line1: record.line_1.clone(),
            line2: String::new(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip_code: record.zip.clone(),
            notes: String::new(),
            source: record.source(),
            transactions: vec![Transaction {
                amount: record.amount,
                date,
                note_for_internal: Some(String::new()),
                unique_identifier: record.unique_identifier(),
                transaction_type,
            }],
            emails,
            phones: vec![Phone {
                phone_number,
                phone_type: ContactKind::Home,
            }],
        }),
        EntityType::Organization => PublicForm::Company(CompanyForm {
            entity_type: FormEntityType::Company,
            full_name: record.first_name.clone(),
            occupation: record.occupation.clone(),
            employer: record.employer.clone(),
            address_type: ContactKind::Work,
            company: record.first_name.clone(),
            line1: record.line_1.clone(),
            line2: String::new(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip_code: record.zip.clone(),
            notes: String::new(),
            source: record.source(),
            transactions: vec![Transaction {
                amount: record.amount,
                date,
                note_for_internal: record.source_code.clone(),
                unique_identifier: record.unique_identifier(),
                transaction_type,
            }],
            emails,
            phones: vec![Phone {
                phone_number,
                phone_type: ContactKind::Work,
            }],
        }),
    };

    Ok(form)
}

/// Transforms every record of a contributions or refunds file.
///
/// Stops at the first record that fails to convert and reports it as
/// [`EngineError::ConversionFailed`] with the record's position.
pub fn convert_contributions(
    records: &[ContributionRecord],
    transaction_type: TransactionType,
) -> EngineResult<Vec<PublicForm>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            convert_contribution(record, transaction_type).map_err(|e| {
                EngineError::ConversionFailed {
                    index,
                    source: Box::new(e),
                }
            })
        })
        .collect()
}
