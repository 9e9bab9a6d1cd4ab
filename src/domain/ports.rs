use super::order::{Order, OrderId};
use super::transaction::{OutboundMessage, TransactionRecord};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[async_trait]
pub trait OrderLookup: Send + Sync {
    /// Returns the order with its customer and merchant snapshots, or
    /// `PaymentError::OrderNotFound`.
    async fn get_by_id(&self, id: OrderId) -> Result<Order>;
}

#[async_trait]
pub trait TransactionRecorder: Send + Sync {
    /// Appends a record. Records are never deduplicated.
    async fn save(&self, record: TransactionRecord) -> Result<()>;
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, message: OutboundMessage) -> Result<()>;
}

pub type ClockBox = Box<dyn Clock>;
pub type OrderLookupBox = Box<dyn OrderLookup>;
pub type TransactionRecorderBox = Box<dyn TransactionRecorder>;
pub type EventPublisherBox = Box<dyn EventPublisher>;
