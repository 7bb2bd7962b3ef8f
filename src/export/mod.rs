//! The export run: read, transform, upload.
//!
//! [`Exporter::run`] processes `contributions.json`, `refunds.json` and
//! `payouts.json` strictly in that order. Each file is fully read and
//! transformed before its first form is posted, so a bad record aborts the
//! run without uploading anything from that file.

mod input;

use std::path::PathBuf;

use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::config::ExportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionRecord, PayoutRecord, TransactionType};
use crate::transform::{convert_contributions, convert_payouts};
use crate::upload::{Transport, UploadSummary, Uploader};

pub use input::{InputFile, read_records};

/// Outcome of one export run.
///
/// A `None` summary means the corresponding input file was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Correlation id attached to every log line of the run.
    pub run_id: Uuid,
    /// Contributions upload.
    pub contributions: Option<UploadSummary>,
    /// Refunds upload.
    pub refunds: Option<UploadSummary>,
    /// Payouts upload.
    pub payouts: Option<UploadSummary>,
}

impl ExportReport {
    /// Total number of forms posted across all files.
    pub fn total_sent(&self) -> usize {
        [self.contributions, self.refunds, self.payouts]
            .iter()
            .flatten()
            .map(|s| s.sent)
            .sum()
    }
}

/// Runs the export of one input directory through a transport.
#[derive(Debug)]
pub struct Exporter<T: Transport> {
    input_path: PathBuf,
    uploader: Uploader<T>,
}

impl<T: Transport> Exporter<T> {
    /// Creates an exporter for the configured input directory and response mode.
    pub fn new(config: &ExportConfig, transport: T) -> Self {
        Self {
            input_path: config.input_path.clone(),
            uploader: Uploader::new(transport, config.response_mode()),
        }
    }

    /// Returns the uploader, mainly to inspect the transport.
    pub fn uploader(&self) -> &Uploader<T> {
        &self.uploader
    }

    /// Exports every input file present in the input directory.
    pub fn run(&self) -> EngineResult<ExportReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("export", run_id = %run_id);
        let _guard = span.enter();

        info!(input_path = %self.input_path.display(), "Starting export");

        let contributions =
            self.export_contacts(InputFile::Contributions, TransactionType::MonetaryContribution)?;
        let refunds =
            self.export_contacts(InputFile::Refunds, TransactionType::RefundedContribution)?;
        let payouts = self.export_payouts()?;

        let report = ExportReport {
            run_id,
            contributions,
            refunds,
            payouts,
        };
        info!(sent = report.total_sent(), "Posting process has completed");
        Ok(report)
    }

    fn export_contacts(
        &self,
        file: InputFile,
        transaction_type: TransactionType,
    ) -> EngineResult<Option<UploadSummary>> {
        let Some(records) = read_records::<ContributionRecord>(&self.input_path, file)? else {
            debug!(file = file.file_name(), "Input file not present");
            return Ok(None);
        };
        info!(file = file.file_name(), records = records.len(), "Found input file, uploading");

        let forms = convert_contributions(&records, transaction_type)
            .map_err(|e| locate_in_file(file, e))?;
        let summary = self.uploader.upload_forms(&forms)?;

        log_uploaded(file, &summary);
        Ok(Some(summary))
    }

    fn export_payouts(&self) -> EngineResult<Option<UploadSummary>> {
        let file = InputFile::Payouts;
        let Some(records) = read_records::<PayoutRecord>(&self.input_path, file)? else {
            debug!(file = file.file_name(), "Input file not present");
            return Ok(None);
        };
        info!(file = file.file_name(), records = records.len(), "Found input file, uploading");

        let payouts = convert_payouts(&records).map_err(|e| locate_in_file(file, e))?;
        let summary = self.uploader.upload_payouts(&payouts)?;

        log_uploaded(file, &summary);
        Ok(Some(summary))
    }
}

/// Names the input file in a list conversion failure.
fn locate_in_file(file: InputFile, error: EngineError) -> EngineError {
    match error {
        EngineError::ConversionFailed { index, source } => EngineError::InvalidRecord {
            file: file.file_name().to_string(),
            index,
            message: source.to_string(),
        },
        other => other,
    }
}

fn log_uploaded(file: InputFile, summary: &UploadSummary) {
    info!(
        file = file.file_name(),
        sent = summary.sent,
        accepted = summary.accepted,
        rejected = summary.rejected,
        skipped = summary.skipped,
        "Input file uploaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicForm;
    use crate::upload::TransportResponse;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::fs;

    #[derive(Default)]
    struct RecordingTransport {
        posted: RefCell<Vec<Value>>,
    }

    impl Transport for RecordingTransport {
        fn post(&self, form: &PublicForm) -> EngineResult<TransportResponse> {
            self.posted
                .borrow_mut()
                .push(serde_json::to_value(form).unwrap());
            Ok(TransportResponse {
                status: 201,
                body: String::new(),
            })
        }
    }

    fn contribution(id: &str, record_type: &str) -> Value {
        json!({
            "id": id,
            "type": record_type,
            "form": "general",
            "entity_type": "Individual",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone": "650-253-0000",
            "amount": 25,
            "date": "Tue, 14 Sep 2021 18:36:41 GMT"
        })
    }

    fn config_for(dir: &std::path::Path) -> ExportConfig {
        serde_json::from_value(json!({
            "input_path": dir,
            "client_account_name": "acme",
            "integration_login_name": "numero",
            "password": "hunter2"
        }))
        .unwrap()
    }

    fn write(dir: &std::path::Path, name: &str, value: Value) {
        fs::write(dir.join(name), value.to_string()).unwrap();
    }

    fn posted_ids(exporter: &Exporter<RecordingTransport>) -> Vec<String> {
        exporter
            .uploader()
            .transport()
            .posted
            .borrow()
            .iter()
            .map(|v| v["Transactions"][0]["UniqueIdentifier"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_empty_directory_posts_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(&config_for(dir.path()), RecordingTransport::default());

        let report = exporter.run().unwrap();

        assert_eq!(report.contributions, None);
        assert_eq!(report.refunds, None);
        assert_eq!(report.payouts, None);
        assert_eq!(report.total_sent(), 0);
    }

    #[test]
    fn test_files_are_processed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "payouts.json",
            json!([{
                "id": "po_1",
                "date": "Fri, 01 Oct 2021 00:00:00 GMT",
                "coverage_starts_at": "Wed, 01 Sep 2021 00:00:00 GMT",
                "coverage_ends_at": "Thu, 30 Sep 2021 00:00:00 GMT",
                "fees_amount": 10,
                "net_amount": 990,
                "contribution_ids": ["ctb_1"],
                "refund_ids": ["rfd_1"]
            }]),
        );
        write(dir.path(), "refunds.json", json!([contribution("rfd_1", "refund")]));
        write(
            dir.path(),
            "contributions.json",
            json!([
                contribution("ctb_1", "contribution"),
                contribution("ctb_2", "contribution")
            ]),
        );

        let exporter = Exporter::new(&config_for(dir.path()), RecordingTransport::default());
        let report = exporter.run().unwrap();

        assert_eq!(
            posted_ids(&exporter),
            vec![
                "NUMERO-CONTRIBUTION-ctb_1",
                "NUMERO-CONTRIBUTION-ctb_2",
                "NUMERO-REFUND-rfd_1",
                "NUMERO-FEES-po_1",
                "NUMERO-PAYOUT-po_1",
            ]
        );
        assert_eq!(report.total_sent(), 5);
        assert_eq!(report.refunds.map(|s| s.sent), Some(1));
    }

    #[test]
    fn test_refunds_are_refunded_contributions() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "refunds.json", json!([contribution("rfd_1", "refund")]));

        let exporter = Exporter::new(&config_for(dir.path()), RecordingTransport::default());
        exporter.run().unwrap();

        let posted = exporter.uploader().transport().posted.borrow();
        assert_eq!(
            posted[0]["Transactions"][0]["TransactionType"],
            "Refunded Contribution"
        );
    }

    #[test]
    fn test_bad_record_aborts_before_any_upload_of_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut bad = contribution("ctb_2", "contribution");
        bad["date"] = json!("yesterday");
        write(
            dir.path(),
            "contributions.json",
            json!([contribution("ctb_1", "contribution"), bad]),
        );

        let exporter = Exporter::new(&config_for(dir.path()), RecordingTransport::default());

        match exporter.run() {
            Err(EngineError::InvalidRecord { file, index, message }) => {
                assert_eq!(file, "contributions.json");
                assert_eq!(index, 1);
                assert!(message.contains("yesterday"), "{}", message);
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
        assert!(posted_ids(&exporter).is_empty());
    }

    #[test]
    fn test_bad_payout_is_located_in_payouts_file() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "payouts.json",
            json!([{
                "id": "po_1",
                "date": "someday",
                "coverage_starts_at": "Wed, 01 Sep 2021 00:00:00 GMT",
                "coverage_ends_at": "Thu, 30 Sep 2021 00:00:00 GMT",
                "fees_amount": 10,
                "net_amount": 990,
                "contribution_ids": [],
                "refund_ids": []
            }]),
        );

        let exporter = Exporter::new(&config_for(dir.path()), RecordingTransport::default());

        match exporter.run() {
            Err(EngineError::InvalidRecord { file, index, message }) => {
                assert_eq!(file, "payouts.json");
                assert_eq!(index, 0);
                assert!(message.starts_with("Invalid date 'someday'"), "{}", message);
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
        assert!(posted_ids(&exporter).is_empty());
    }
}
