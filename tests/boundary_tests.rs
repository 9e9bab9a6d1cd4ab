use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_boundary_order_id() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "orderID, channel, amount").unwrap();
    // u64::MAX = 18446744073709551615
    writeln!(csv, "18446744073709551615, debit, 1000000.0000").unwrap();

    let mut orders = tempfile::NamedTempFile::new().unwrap();
    write!(
        orders,
        r#"[{{"id": 18446744073709551615, "customerID": 1, "merchantID": 1,
             "amount": 1000000, "status": "request_payment",
             "customer": {{"id": 1, "status": "active", "balance": 1000000}},
             "merchant": {{"id": 1, "status": "active"}}}}]"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("orderpay"));
    cmd.arg(csv.path()).arg("--orders").arg(orders.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "18446744073709551615,debit,1000000.0000,confirmed,,",
        ));
}

#[test]
fn test_balance_exactly_equal_to_order_amount() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "orderID, channel, amount").unwrap();
    writeln!(csv, "1, credit, 0.0001").unwrap();
    writeln!(csv, "2, credit, 0.0001").unwrap();

    let mut orders = tempfile::NamedTempFile::new().unwrap();
    write!(
        orders,
        r#"[
            {{"id": 1, "customerID": 1, "merchantID": 1, "amount": "0.0001",
              "status": "request_payment",
              "customer": {{"id": 1, "status": "active", "balance": "0.0001"}},
              "merchant": {{"id": 1, "status": "active"}}}},
            {{"id": 2, "customerID": 2, "merchantID": 1, "amount": "0.0002",
              "status": "request_payment",
              "customer": {{"id": 2, "status": "active", "balance": "0.0001"}},
              "merchant": {{"id": 1, "status": "active"}}}}
        ]"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("orderpay"));
    cmd.arg(csv.path()).arg("--orders").arg(orders.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,credit,0.0001,confirmed,,"))
        .stdout(predicate::str::contains(
            "2,credit,0.0001,rejected,customer amount is not enough,",
        ));
}
