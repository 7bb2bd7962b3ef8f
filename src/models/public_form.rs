//! PublicForms output models.
//!
//! This module contains the [`PublicForm`] type and its associated structures,
//! mirroring the JSON body the ISPolitical `PublicForms` endpoint accepts.
//! Keys are serialized in PascalCase and amounts as JSON numbers.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// The `EntityType` value of a submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormEntityType {
    /// A person.
    Individual,
    /// A company or organization.
    Company,
    /// Anything else; used for deposits.
    Other,
}

/// The `TransactionType` of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionType {
    /// A contribution received.
    #[serde(rename = "Monetary Contribution")]
    MonetaryContribution,
    /// A contribution given back.
    #[serde(rename = "Refunded Contribution")]
    RefundedContribution,
    /// A processing-fee expense.
    Expense,
    /// A bank deposit.
    Deposit,
}

/// Address and phone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    /// Personal address or phone.
    Home,
    /// Business address or phone.
    Work,
}

/// A monetary event attached to a form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// Transaction amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Transaction date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Note visible only inside ISPolitical.
    pub note_for_internal: Option<String>,
    /// Synthesized identifier, `NUMERO-{KIND}-{id}`.
    pub unique_identifier: String,
    /// The kind of transaction.
    pub transaction_type: TransactionType,
}

/// An email entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    /// The email address.
    pub email_address: String,
}

/// A phone entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Phone {
    /// Phone number in `+1 (XXX) XXX-XXXX` form.
    pub phone_number: String,
    /// Home or work.
    pub phone_type: ContactKind,
}

/// Contact form for an individual contributor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndividualForm {
    /// Always [`FormEntityType::Individual`].
    pub entity_type: FormEntityType,
    /// Name prefix.
    pub name_prefix: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Name suffix.
    pub name_suffix: Option<String>,
    /// Salutation.
    pub nickname: Option<String>,
    /// Occupation.
    pub occupation: Option<String>,
    /// Employer.
    pub employer: Option<String>,
    /// Always [`ContactKind::Home`].
    pub address_type: ContactKind,
    /// Always empty for individuals.
    pub company: String,
    /// First address line.
    pub line1: Option<String>,
    /// Second address line (never populated).
    pub line2: String,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// ZIP code.
    pub zip_code: Option<String>,
    /// Free-form notes (never populated).
    pub notes: String,
    /// Source tag, `NUMERO-{form}`.
    pub source: String,
    /// The single transaction of this contact.
    pub transactions: Vec<Transaction>,
    /// The contact's email.
    pub emails: Vec<Email>,
    /// The contact's phone.
    pub phones: Vec<Phone>,
}

/// Contact form for an organization contributor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyForm {
    /// Always [`FormEntityType::Company`].
    pub entity_type: FormEntityType,
    /// Organization name.
    pub full_name: String,
    /// Occupation.
    pub occupation: Option<String>,
    /// Employer.
    pub employer: Option<String>,
    /// Always [`ContactKind::Work`].
    pub address_type: ContactKind,
    /// Organization name.
    pub company: String,
    /// First address line.
    pub line1: Option<String>,
    /// Second address line (never populated).
    pub line2: String,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
    /// ZIP code.
    pub zip_code: Option<String>,
    /// Free-form notes (never populated).
    pub notes: String,
    /// Source tag, `NUMERO-{form}`.
    pub source: String,
    /// The single transaction of this contact.
    pub transactions: Vec<Transaction>,
    /// The contact's email.
    pub emails: Vec<Email>,
    /// The contact's phone.
    pub phones: Vec<Phone>,
}

/// Processing-fee expense paid to Numero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeesForm {
    /// Payee name.
    pub company: String,
    /// Always [`FormEntityType::Company`].
    pub entity_type: FormEntityType,
    /// First address line.
    pub line1: String,
    /// Second address line.
    pub line2: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// ZIP code.
    pub zip_code: String,
    /// The fee expense.
    pub transactions: Vec<Transaction>,
}

/// Bank deposit settling a payout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositForm {
    /// Always `"Deposit"`.
    pub company: String,
    /// Always [`FormEntityType::Other`].
    pub entity_type: FormEntityType,
    /// Payout batch label.
    pub notes: Option<String>,
    /// The deposit transaction.
    pub transactions: Vec<Transaction>,
    /// Identifiers of the transactions this deposit settles.
    pub items: Vec<String>,
}

/// Any body accepted by the `PublicForms` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PublicForm {
    /// Individual contributor.
    Individual(IndividualForm),
    /// Organization contributor.
    Company(CompanyForm),
    /// Payout processing fees.
    Fees(FeesForm),
    /// Payout deposit.
    Deposit(DepositForm),
}

impl PublicForm {
    /// Returns the transactions carried by the form.
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            PublicForm::Individual(form) => &form.transactions,
            PublicForm::Company(form) => &form.transactions,
            PublicForm::Fees(form) => &form.transactions,
            PublicForm::Deposit(form) => &form.transactions,
        }
    }

    /// Returns the unique identifier of the form's first transaction.
    pub fn unique_identifier(&self) -> Option<&str> {
        self.transactions()
            .first()
            .map(|t| t.unique_identifier.as_str())
    }
}

impl fmt::Display for PublicForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// The two forms produced for every payout.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutForms {
    /// Processing-fee expense, always submitted first.
    pub fees: PublicForm,
    /// Deposit, submitted only once the fees are accepted.
    pub deposit: PublicForm,
}
