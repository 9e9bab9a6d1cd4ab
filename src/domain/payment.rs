use super::order::OrderId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The instrument a payment is made with.
///
/// Decoding never fails on an unknown channel string; the value is kept as
/// `Unrecognized` so that payment validation can reject it and record it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentChannel {
    Debit,
    Credit,
    PromptPay,
    QrPayment,
    Unrecognized(String),
}

impl PaymentChannel {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentChannel::Debit => "debit",
            PaymentChannel::Credit => "credit",
            PaymentChannel::PromptPay => "promptpay",
            PaymentChannel::QrPayment => "qrpayment",
            PaymentChannel::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PaymentChannel::Unrecognized(_))
    }
}

impl From<String> for PaymentChannel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "debit" => PaymentChannel::Debit,
            "credit" => PaymentChannel::Credit,
            "promptpay" => PaymentChannel::PromptPay,
            "qrpayment" => PaymentChannel::QrPayment,
            _ => PaymentChannel::Unrecognized(value),
        }
    }
}

impl From<&str> for PaymentChannel {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PaymentChannel> for String {
    fn from(channel: PaymentChannel) -> Self {
        match channel {
            PaymentChannel::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to pay for an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    pub channel: PaymentChannel,
    pub amount: Decimal,
}
