//! Payout transformation.
//!
//! Every payout yields two forms: an expense paid to Numero for the
//! processing fees, and a deposit for the net amount that lists the
//! contributions, refunds and fee expense it settles.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DepositForm, FeesForm, FormEntityType, PayoutForms, PayoutRecord, PublicForm, Transaction,
    TransactionType,
};

use super::convert_date;

const FEES_PAYEE: &str = "Numero, Inc.";
const FEES_LINE1: &str = "200 Spectrum Center Drive";
const FEES_LINE2: &str = "Suite 300";
const FEES_CITY: &str = "Irvine";
const FEES_STATE: &str = "CA";
const FEES_ZIP: &str = "92618";
const FEES_NOTE: &str = "Processing Fees";
const DEPOSIT_COMPANY: &str = "Deposit";

/// Transforms a payout into its fees and deposit forms.
///
/// The coverage dates are validated but not submitted.
///
/// # Examples
///
/// ```
/// use target_ispolitical::models::{PayoutRecord, PublicForm};
/// use target_ispolitical::transform::convert_payout;
///
/// let payout: PayoutRecord = serde_json::from_value(serde_json::json!({
///     "id": "po_1",
///     "date": "Fri, 01 Oct 2021 00:00:00 GMT",
///     "coverage_starts_at": "Wed, 01 Sep 2021 00:00:00 GMT",
///     "coverage_ends_at": "Thu, 30 Sep 2021 00:00:00 GMT",
///     "fees_amount": 10,
///     "net_amount": 990,
///     "contribution_ids": ["a"],
///     "refund_ids": []
/// })).unwrap();
///
/// let forms = convert_payout(&payout).unwrap();
/// match forms.deposit {
///     PublicForm::Deposit(deposit) => {
///         assert_eq!(deposit.items, vec!["NUMERO-CONTRIBUTION-a", "NUMERO-FEES-po_1"]);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn convert_payout(record: &PayoutRecord) -> EngineResult<PayoutForms> {
    let date = convert_date(&record.date)?;
    convert_date(&record.coverage_starts_at)?;
    convert_date(&record.coverage_ends_at)?;

    let fees = FeesForm {
        company: FEES_PAYEE.to_string(),
        entity_type: FormEntityType::Company,
        line1: FEES_LINE1.to_string(),
        line2: FEES_LINE2.to_string(),
        city: FEES_CITY.to_string(),
        state: FEES_STATE.to_string(),
        zip_code: FEES_ZIP.to_string(),
        transactions: vec![Transaction {
            amount: record.fees_amount,
            date,
            note_for_internal: Some(FEES_NOTE.to_string()),
            unique_identifier: record.fees_identifier(),
            transaction_type: TransactionType::Expense,
        }],
    };

    let deposit = DepositForm {
        company: DEPOSIT_COMPANY.to_string(),
        entity_type: FormEntityType::Other,
        notes: record.batch.clone(),
        transactions: vec![Transaction {
            amount: record.net_amount,
            date,
            note_for_internal: record.destination.clone(),
            unique_identifier: record.deposit_identifier(),
            transaction_type: TransactionType::Deposit,
        }],
        items: record.deposit_items(),
    };

    Ok(PayoutForms {
        fees: PublicForm::Fees(fees),
        deposit: PublicForm::Deposit(deposit),
    })
}

/// Transforms every payout of a payouts file.
///
/// A failure is reported as [`EngineError::ConversionFailed`] with the
/// position of the payout.
pub fn convert_payouts(records: &[PayoutRecord]) -> EngineResult<Vec<PayoutForms>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            convert_payout(record).map_err(|e| EngineError::ConversionFailed {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}
