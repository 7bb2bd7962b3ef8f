//! End-to-end tests for the ISPolitical export connector.
//!
//! Each test writes input files into a temporary directory, points the
//! connector at a local mock of the PublicForms endpoint and checks which
//! requests arrive:
//! - One POST per contribution and refund
//! - Basic auth identity and JSON bodies
//! - Fees → Deposit sequencing for payouts
//! - Lenient vs strict response handling
//! - Error cases

use std::fs;
use std::io::Write;
use std::path::Path;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};

use target_ispolitical::config::{ConfigLoader, ExportConfig};
use target_ispolitical::error::EngineError;
use target_ispolitical::export::Exporter;
use target_ispolitical::upload::HttpTransport;

// =============================================================================
// Test Helpers
// =============================================================================

const AUTHORIZATION: &str = "Basic bnVtZXJvLXRlc3R8aW50ZWdyYXRpb246aHVudGVyMg==";

fn write_config(dir: &Path, endpoint: &str, strict: bool) -> ExportConfig {
    let path = dir.join("config.json");
    let mut file = fs::File::create(&path).unwrap();
    let config = json!({
        "input_path": dir,
        "client_account_name": "numero-test",
        "integration_login_name": "integration",
        "password": "hunter2",
        "endpoint": endpoint,
        "strict": strict,
        "timeout_secs": 5
    });
    file.write_all(config.to_string().as_bytes()).unwrap();

    ConfigLoader::load(&path).unwrap().into_config()
}

fn write_input(dir: &Path, name: &str, records: Value) {
    fs::write(dir.join(name), records.to_string()).unwrap();
}

fn endpoint(server: &ServerGuard) -> String {
    format!("{}/api/PublicForms/", server.url())
}

fn contribution(id: &str, entity_type: &str) -> Value {
    json!({
        "id": id,
        "type": "contribution",
        "form": "general",
        "entity_type": entity_type,
        "title": null,
        "first_name": "Grace",
        "middle_name": "Brewster",
        "last_name": "Hopper",
        "suffix": null,
        "salutation": "Admiral",
        "occupation": "Computer Scientist",
        "employer": "US Navy",
        "line_1": "1600 Pennsylvania Ave NW",
        "city": "Washington",
        "state": "DC",
        "zip": "20500",
        "email": "grace@example.com",
        "phone": "(202) 456-1111",
        "amount": 100,
        "date": "Mon, 04 Oct 2021 09:15:00 GMT",
        "source_code": "web"
    })
}

fn refund(id: &str) -> Value {
    let mut record = contribution(id, "Individual");
    record["type"] = json!("refund");
    record["amount"] = json!(-100);
    record
}

fn payout(id: &str, contribution_ids: &[&str], refund_ids: &[&str]) -> Value {
    json!({
        "id": id,
        "date": "Fri, 15 Oct 2021 00:00:00 GMT",
        "coverage_starts_at": "Fri, 01 Oct 2021 00:00:00 GMT",
        "coverage_ends_at": "Thu, 14 Oct 2021 23:59:59 GMT",
        "fees_amount": 10,
        "net_amount": 990,
        "contribution_ids": contribution_ids,
        "refund_ids": refund_ids,
        "batch": "2021-10-A",
        "destination": "Checking ****6789"
    })
}

fn run(config: &ExportConfig) -> Result<target_ispolitical::export::ExportReport, EngineError> {
    Exporter::new(config, HttpTransport::new(config).unwrap()).run()
}

// =============================================================================
// Contributions and refunds
// =============================================================================

#[test]
fn test_every_contribution_is_posted_once() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "contributions.json",
        json!([
            contribution("ctb_1", "Individual"),
            contribution("ctb_2", "Organization"),
            contribution("ctb_3", "Individual"),
        ]),
    );

    let mock = server
        .mock("POST", "/api/PublicForms/")
        .match_header("authorization", AUTHORIZATION)
        .with_status(201)
        .with_body(r#"{"Success": true}"#)
        .expect(3)
        .create();

    let report = run(&config).unwrap();

    mock.assert();
    let summary = report.contributions.unwrap();
    assert_eq!(summary.sent, 3);
    assert_eq!(summary.accepted, 3);
    assert_eq!(report.refunds, None);
    assert_eq!(report.payouts, None);
}

#[test]
fn test_individual_body_matches_public_forms_schema() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "contributions.json",
        json!([contribution("ctb_1", "Individual")]),
    );

    let mock = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::Json(json!({
            "EntityType": "Individual",
            "NamePrefix": null,
            "FirstName": "Grace",
            "MiddleName": "Brewster",
            "LastName": "Hopper",
            "NameSuffix": null,
            "Nickname": "Admiral",
            "Occupation": "Computer Scientist",
            "Employer": "US Navy",
            "AddressType": "Home",
            "Company": "",
            "Line1": "1600 Pennsylvania Ave NW",
            "Line2": "",
            "City": "Washington",
            "State": "DC",
            "ZipCode": "20500",
            "Notes": "",
            "Source": "NUMERO-general",
            "Transactions": [{
                "Amount": 100.0,
                "Date": "2021-10-04",
                "NoteForInternal": "",
                "UniqueIdentifier": "NUMERO-CONTRIBUTION-ctb_1",
                "TransactionType": "Monetary Contribution"
            }],
            "Emails": [{ "EmailAddress": "grace@example.com" }],
            "Phones": [{ "PhoneNumber": "+1 (202) 456-1111", "PhoneType": "Home" }]
        })))
        .with_status(201)
        .create();

    run(&config).unwrap();

    mock.assert();
}

#[test]
fn test_organization_is_posted_as_company() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "contributions.json",
        json!([contribution("ctb_9", "Organization")]),
    );

    let mock = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::PartialJson(json!({
            "EntityType": "Company",
            "FullName": "Grace",
            "Company": "Grace",
            "AddressType": "Work",
            "Phones": [{ "PhoneNumber": "+1 (202) 456-1111", "PhoneType": "Work" }]
        })))
        .with_status(201)
        .create();

    run(&config).unwrap();

    mock.assert();
}

#[test]
fn test_refunds_file_is_posted_not_contributions_twice() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "contributions.json",
        json!([contribution("ctb_1", "Individual")]),
    );
    write_input(dir.path(), "refunds.json", json!([refund("rfd_1"), refund("rfd_2")]));

    let contributions = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::Regex("NUMERO-CONTRIBUTION-ctb_1".to_string()))
        .with_status(201)
        .expect(1)
        .create();
    let refunds = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::Regex("Refunded Contribution".to_string()))
        .with_status(201)
        .expect(2)
        .create();

    let report = run(&config).unwrap();

    contributions.assert();
    refunds.assert();
    assert_eq!(report.total_sent(), 3);
}

#[test]
fn test_lenient_mode_logs_and_continues() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "contributions.json",
        json!([
            contribution("ctb_1", "Individual"),
            contribution("ctb_2", "Individual")
        ]),
    );

    let mock = server
        .mock("POST", "/api/PublicForms/")
        .with_status(400)
        .with_body(r#"{"Message": "Duplicate UniqueIdentifier"}"#)
        .expect(2)
        .create();

    let report = run(&config).unwrap();

    mock.assert();
    let summary = report.contributions.unwrap();
    assert_eq!(summary.sent, 2);
    assert_eq!(summary.rejected, 2);
}

#[test]
fn test_strict_mode_fails_on_first_rejection() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), true);
    write_input(
        dir.path(),
        "contributions.json",
        json!([
            contribution("ctb_1", "Individual"),
            contribution("ctb_2", "Individual")
        ]),
    );

    let mock = server
        .mock("POST", "/api/PublicForms/")
        .with_status(400)
        .with_body("bad request")
        .expect(1)
        .create();

    match run(&config) {
        Err(EngineError::Rejected { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("Expected Rejected, got {:?}", other),
    }
    mock.assert();
}

// =============================================================================
// Payouts
// =============================================================================

#[test]
fn test_deposit_posted_after_created_fees() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(dir.path(), "payouts.json", json!([payout("po_1", &["a"], &[])]));

    let fees = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::PartialJson(json!({
            "Company": "Numero, Inc.",
            "EntityType": "Company",
            "Transactions": [{
                "Amount": 10.0,
                "Date": "2021-10-15",
                "NoteForInternal": "Processing Fees",
                "TransactionType": "Expense",
                "UniqueIdentifier": "NUMERO-FEES-po_1"
            }]
        })))
        .with_status(201)
        .expect(1)
        .create();
    let deposit = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::PartialJson(json!({
            "Company": "Deposit",
            "EntityType": "Other",
            "Notes": "2021-10-A",
            "Items": ["NUMERO-CONTRIBUTION-a", "NUMERO-FEES-po_1"]
        })))
        .with_status(201)
        .expect(1)
        .create();

    let report = run(&config).unwrap();

    fees.assert();
    deposit.assert();
    let summary = report.payouts.unwrap();
    assert_eq!(summary.sent, 2);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn test_deposit_skipped_when_fees_not_created() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "payouts.json",
        json!([payout("po_1", &["a"], &["b"])]),
    );

    let fees = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::PartialJson(json!({ "Company": "Numero, Inc." })))
        .with_status(200)
        .expect(1)
        .create();
    let deposit = server
        .mock("POST", "/api/PublicForms/")
        .match_body(Matcher::PartialJson(json!({ "Company": "Deposit" })))
        .with_status(201)
        .expect(0)
        .create();

    let report = run(&config).unwrap();

    fees.assert();
    deposit.assert();
    let summary = report.payouts.unwrap();
    assert_eq!(summary.sent, 1);
    assert_eq!(summary.skipped, 1);
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_invalid_phone_aborts_before_uploading_the_file() {
    let mut server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    let mut bad = contribution("ctb_2", "Individual");
    bad["phone"] = json!("12");
    write_input(
        dir.path(),
        "contributions.json",
        json!([contribution("ctb_1", "Individual"), bad]),
    );

    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    match run(&config) {
        Err(EngineError::InvalidRecord { file, index, .. }) => {
            assert_eq!(file, "contributions.json");
            assert_eq!(index, 1);
        }
        other => panic!("Expected InvalidRecord, got {:?}", other),
    }
    mock.assert();
}

#[test]
fn test_unknown_entity_type_is_reported_with_position() {
    let server = Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &endpoint(&server), false);
    write_input(
        dir.path(),
        "contributions.json",
        json!([contribution("ctb_1", "Committee")]),
    );

    match run(&config) {
        Err(EngineError::InvalidRecord { index, message, .. }) => {
            assert_eq!(index, 0);
            assert!(message.contains("Committee"), "{}", message);
        }
        other => panic!("Expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn test_missing_config_file() {
    let result = ConfigLoader::load("/nonexistent/target-ispolitical/config.json");
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}
