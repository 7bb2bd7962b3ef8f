//! Sequential submission of transformed forms.

use tracing::{info, warn};

use crate::config::ResponseMode;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayoutForms, PublicForm};

use super::transport::{Transport, TransportResponse};

/// Counts of what happened to the forms of one input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    /// Forms posted.
    pub sent: usize,
    /// Forms answered with a 2xx status.
    pub accepted: usize,
    /// Forms answered with any other status.
    pub rejected: usize,
    /// Payout deposits not posted because their fees were not created.
    pub skipped: usize,
}

/// Posts forms one at a time through a [`Transport`].
///
/// In [`ResponseMode::Lenient`] non-success responses are logged and the
/// upload continues; in [`ResponseMode::Strict`] they abort it with
/// [`EngineError::Rejected`].
#[derive(Debug)]
pub struct Uploader<T: Transport> {
    transport: T,
    mode: ResponseMode,
}

impl<T: Transport> Uploader<T> {
    /// Creates an uploader over `transport`.
    pub fn new(transport: T, mode: ResponseMode) -> Self {
        Self { transport, mode }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts every form, in order, one request per form.
    pub fn upload_forms(&self, forms: &[PublicForm]) -> EngineResult<UploadSummary> {
        let mut summary = UploadSummary::default();
        for form in forms {
            self.submit(form, &mut summary)?;
        }
        Ok(summary)
    }

    /// Posts the fees of a payout and, if they were created, its deposit.
    ///
    /// A fees response other than `201 Created` skips the deposit without
    /// raising an error.
    pub fn upload_payout(
        &self,
        payout: &PayoutForms,
        summary: &mut UploadSummary,
    ) -> EngineResult<()> {
        let fees_response = self.submit(&payout.fees, summary)?;

        if fees_response.is_created() {
            self.submit(&payout.deposit, summary)?;
        } else {
            summary.skipped += 1;
            warn!(
                unique_identifier = payout.deposit.unique_identifier().unwrap_or_default(),
                fees_status = fees_response.status,
                "Fees were not created, skipping deposit"
            );
        }

        Ok(())
    }

    /// Posts every payout, in order.
    pub fn upload_payouts(&self, payouts: &[PayoutForms]) -> EngineResult<UploadSummary> {
        let mut summary = UploadSummary::default();
        for payout in payouts {
            self.upload_payout(payout, &mut summary)?;
        }
        Ok(summary)
    }

    fn submit(
        &self,
        form: &PublicForm,
        summary: &mut UploadSummary,
    ) -> EngineResult<TransportResponse> {
        info!(payload = %form, "Posting form");
        let response = self.transport.post(form)?;
        summary.sent += 1;
        info!(status = response.status, body = %response.body, "Received response");

        if response.is_success() {
            summary.accepted += 1;
            return Ok(response);
        }

        summary.rejected += 1;
        match self.mode {
            ResponseMode::Strict => Err(EngineError::Rejected {
                status: response.status,
                body: response.body,
            }),
            ResponseMode::Lenient => {
                warn!(
                    unique_identifier = form.unique_identifier().unwrap_or_default(),
                    status = response.status,
                    "Form was not accepted"
                );
                Ok(response)
            }
        }
    }
}
