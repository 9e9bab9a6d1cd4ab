use crate::domain::order::{Order, OrderId};
use crate::domain::ports::{EventPublisher, OrderLookup, TransactionRecorder};
use crate::domain::transaction::{OutboundMessage, TransactionRecord};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A thread-safe in-memory store for orders.
///
/// Uses `Arc<RwLock<HashMap<OrderId, Order>>>` so clones share the same data.
/// Seed it with [`InMemoryOrderStore::insert`] before processing payments.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an order.
    pub async fn insert(&self, order: Order) {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
    }
}

#[async_trait]
impl OrderLookup for InMemoryOrderStore {
    async fn get_by_id(&self, id: OrderId) -> Result<Order> {
        let orders = self.orders.read().await;
        orders.get(&id).cloned().ok_or(PaymentError::OrderNotFound(id))
    }
}

/// Appends transaction records to a shared vector.
#[derive(Default, Clone)]
pub struct InMemoryTransactionRecorder {
    records: Arc<RwLock<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record saved so far, oldest first.
    pub async fn records(&self) -> Vec<TransactionRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl TransactionRecorder for InMemoryTransactionRecorder {
    async fn save(&self, record: TransactionRecord) -> Result<()> {
        debug!(order_id = record.order_id, status = ?record.status, "Recording transaction");
        self.records.write().await.push(record);
        Ok(())
    }
}

/// Collects published messages instead of sending them anywhere.
#[derive(Default, Clone)]
pub struct InMemoryEventPublisher {
    messages: Arc<RwLock<Vec<OutboundMessage>>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<OutboundMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, message: OutboundMessage) -> Result<()> {
        debug!(topic = %message.topic, key = %message.key, "Publishing message");
        self.messages.write().await.push(message);
        Ok(())
    }
}
