use crate::domain::order::OrderId;
use crate::domain::payment::{PaymentChannel, PaymentRequest};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One CSV row. The amount is parsed from its text so no digits are lost.
#[derive(Debug, Deserialize)]
struct RequestRow {
    #[serde(rename = "orderID")]
    order_id: OrderId,
    channel: PaymentChannel,
    #[serde(deserialize_with = "rust_decimal::serde::str::deserialize")]
    amount: Decimal,
}

impl From<RequestRow> for PaymentRequest {
    fn from(row: RequestRow) -> Self {
        Self {
            order_id: row.order_id,
            channel: row.channel,
            amount: row.amount,
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// Expects an `orderID, channel, amount` header. Whitespace around fields is
/// trimmed. Rows that cannot be decoded are yielded as errors and never reach
/// payment processing; an unknown channel string is not a decoding error.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    /// Creates a new `PaymentRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize::<RequestRow>()
            .map(|result| result.map(PaymentRequest::from).map_err(PaymentError::from))
    }
}
