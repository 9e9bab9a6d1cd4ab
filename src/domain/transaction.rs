use super::order::OrderId;
use super::payment::{PaymentChannel, PaymentRequest};
use super::validation::RejectionReason;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Topic every payment notification is published to.
pub const PAYMENT_TRANSACTION_TOPIC: &str = "payment-transaction";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Confirmed,
    Rejected,
}

/// The durable outcome of one payment attempt.
///
/// `reason` is empty exactly when `status` is `Confirmed`. The only way to
/// move a record to `Rejected` is [`TransactionRecord::reject`], which sets
/// both fields together.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    pub channel: PaymentChannel,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Creates a provisional confirmed record for `request`.
    pub fn confirmed(request: &PaymentRequest, recorded_at: DateTime<Utc>) -> Self {
        Self {
            order_id: request.order_id,
            channel: request.channel.clone(),
            amount: request.amount,
            status: TransactionStatus::Confirmed,
            reason: String::new(),
            recorded_at,
        }
    }

    pub fn reject(&mut self, reason: &RejectionReason) {
        self.status = TransactionStatus::Rejected;
        self.reason = reason.to_string();
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == TransactionStatus::Confirmed
    }
}

/// The message emitted to downstream consumers describing a payment outcome.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    #[serde(rename = "orderID")]
    pub order_id: OrderId,
    pub status: TransactionStatus,
    pub amount: Decimal,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl From<&TransactionRecord> for NotificationEvent {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            order_id: record.order_id,
            status: record.status,
            amount: record.amount,
            reason: record.reason.clone(),
            created_at: record.recorded_at,
        }
    }
}

/// A notification addressed to a topic and partition key.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OutboundMessage {
    pub topic: String,
    pub key: String,
    pub payload: NotificationEvent,
}

impl OutboundMessage {
    /// Addresses `event` to the payment topic, keyed by its order id.
    pub fn payment_notification(event: NotificationEvent) -> Self {
        Self {
            topic: PAYMENT_TRANSACTION_TOPIC.to_string(),
            key: event.order_id.to_string(),
            payload: event,
        }
    }
}
