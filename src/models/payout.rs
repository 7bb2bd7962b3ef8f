//! Payout model.
//!
//! A payout settles a batch of contributions and refunds, minus processing
//! fees, into a single bank deposit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payout as exported by Numero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRecord {
    /// Numero identifier of the payout.
    pub id: String,
    /// Human-readable payout date.
    pub date: String,
    /// Start of the period the payout covers.
    pub coverage_starts_at: String,
    /// End of the period the payout covers.
    pub coverage_ends_at: String,
    /// Processing fees withheld from the payout.
    pub fees_amount: Decimal,
    /// Amount actually deposited.
    pub net_amount: Decimal,
    /// Contributions settled by this payout.
    #[serde(default)]
    pub contribution_ids: Vec<String>,
    /// Refunds settled by this payout.
    #[serde(default)]
    pub refund_ids: Vec<String>,
    /// Batch label.
    pub batch: Option<String>,
    /// Destination account description.
    pub destination: Option<String>,
}

impl PayoutRecord {
    /// Identifier of the processing-fee expense, `NUMERO-FEES-{id}`.
    pub fn fees_identifier(&self) -> String {
        format!("NUMERO-FEES-{}", self.id)
    }

    /// Identifier of the deposit transaction, `NUMERO-PAYOUT-{id}`.
    pub fn deposit_identifier(&self) -> String {
        format!("NUMERO-PAYOUT-{}", self.id)
    }

    /// Returns the transactions settled by this deposit.
    ///
    /// Contributions come first, then refunds, then the fee expense.
    ///
    /// # Examples
    ///
    /// ```
    /// use target_ispolitical::models::PayoutRecord;
    ///
    /// let payout: PayoutRecord = serde_json::from_value(serde_json::json!({
    ///     "id": "po_1",
    ///     "date": "Fri, 01 Oct 2021 00:00:00 GMT",
    ///     "coverage_starts_at": "Wed, 01 Sep 2021 00:00:00 GMT",
    ///     "coverage_ends_at": "Thu, 30 Sep 2021 00:00:00 GMT",
    ///     "fees_amount": 10,
    ///     "net_amount": 990,
    ///     "contribution_ids": ["a"],
    ///     "refund_ids": ["b"]
    /// })).unwrap();
    /// assert_eq!(
    ///     payout.deposit_items(),
    ///     vec!["NUMERO-CONTRIBUTION-a", "NUMERO-REFUND-b", "NUMERO-FEES-po_1"]
    /// );
    /// ```
    pub fn deposit_items(&self) -> Vec<String> {
        self.contribution_ids
            .iter()
            .map(|id| format!("NUMERO-CONTRIBUTION-{}", id))
            .chain(self.refund_ids.iter().map(|id| format!("NUMERO-REFUND-{}", id)))
            .chain(std::iter::once(self.fees_identifier()))
            .collect()
    }
}
