use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_malformed_rows_are_skipped() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "orderID, channel, amount").unwrap();
    // Valid payment
    writeln!(csv, "1, debit, 100").unwrap();
    // Non-integer order id
    writeln!(csv, "abc, debit, 100").unwrap();
    // Text in amount field
    writeln!(csv, "1, debit, not_a_number").unwrap();
    // Missing amount
    writeln!(csv, "1, debit,").unwrap();
    // Unknown channel is not malformed; it is rejected by processing
    writeln!(csv, "1, cash, 100").unwrap();

    let mut cmd = Command::new(cargo_bin!("orderpay"));
    cmd.arg(csv.path())
        .arg("--orders")
        .arg("tests/fixtures/orders.json");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment request"))
        .stdout(predicate::str::contains("1,debit,100,confirmed,,"))
        .stdout(predicate::str::contains(
            "1,cash,100,rejected,invalid payment channel,",
        ))
        .stdout(predicate::str::contains("abc").not());
}

#[test]
fn test_malformed_orders_file_fails() {
    let mut orders = tempfile::NamedTempFile::new().unwrap();
    write!(orders, r#"[{{"id": 1, "status": "shipped"}}]"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("orderpay"));
    cmd.arg("tests/fixtures/requests.csv")
        .arg("--orders")
        .arg(orders.path());

    cmd.assert().failure();
}
