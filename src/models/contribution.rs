//! Contribution and refund records.
//!
//! This module defines the [`ContributionRecord`] struct read from
//! `contributions.json` and `refunds.json`, and the [`EntityType`] that
//! decides which PublicForms contact variant a record becomes.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Whether the contributor is a person or an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EntityType {
    /// A natural person.
    Individual,
    /// A company, committee or other organization.
    Organization,
}

impl FromStr for EntityType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Individual" => Ok(EntityType::Individual),
            "Organization" => Ok(EntityType::Organization),
            other => Err(EngineError::UnknownEntityType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EntityType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single contribution or refund as exported by Numero.
///
/// Only the keys the PublicForms mapping needs are read; any other keys in
/// the source record are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Numero identifier of the transaction.
    pub id: String,
    /// Record kind as reported upstream (e.g. "contribution", "refund").
    #[serde(rename = "type")]
    pub record_type: String,
    /// Numero form the transaction came through.
    pub form: String,
    /// Person or organization.
    pub entity_type: EntityType,
    /// Name prefix such as "Dr.".
    pub title: Option<String>,
    /// Given name, or the organization name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Name suffix such as "Jr.".
    pub suffix: Option<String>,
    /// Preferred salutation.
    pub salutation: Option<String>,
    /// Contributor occupation.
    pub occupation: Option<String>,
    /// Contributor employer.
    pub employer: Option<String>,
    /// First address line.
    pub line_1: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// ZIP code.
    pub zip: Option<String>,
    /// Contact email.
    pub email: String,
    /// Raw phone number.
    pub phone: String,
    /// Transaction amount.
    pub amount: Decimal,
    /// Human-readable transaction date, e.g. `"Tue, 14 Sep 2021 18:36:41 GMT"`.
    pub date: String,
    /// Campaign source code, used as the internal note for organizations.
    pub source_code: Option<String>,
}

impl ContributionRecord {
    /// Returns the transaction identifier, `NUMERO-{TYPE}-{id}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use target_ispolitical::models::ContributionRecord;
    ///
    /// let record: ContributionRecord = serde_json::from_value(serde_json::json!({
    ///     "id": "ctb_42",
    ///     "type": "contribution",
    ///     "form": "donate",
    ///     "entity_type": "Individual",
    ///     "first_name": "Ada",
    ///     "email": "ada@example.com",
    ///     "phone": "+1 650 253 0000",
    ///     "amount": 25,
    ///     "date": "Tue, 14 Sep 2021 18:36:41 GMT"
    /// })).unwrap();
    /// assert_eq!(record.unique_identifier(), "NUMERO-CONTRIBUTION-ctb_42");
    /// ```
    pub fn unique_identifier(&self) -> String {
        format!("NUMERO-{}-{}", self.record_type.to_uppercase(), self.id)
    }

    /// Returns the PublicForms source tag, `NUMERO-{form}`.
    pub fn source(&self) -> String {
        format!("NUMERO-{}", self.form)
    }
}
