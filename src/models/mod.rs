//! Core data models for the export connector.
//!
//! Input records as exported by Numero, and the PublicForms bodies they are
//! transformed into.

mod contribution;
mod payout;
mod public_form;

pub use contribution::{ContributionRecord, EntityType};
pub use payout::PayoutRecord;
pub use public_form::{
    CompanyForm, ContactKind, DepositForm, Email, FeesForm, FormEntityType, IndividualForm,
    PayoutForms, Phone, PublicForm, Transaction, TransactionType,
};
