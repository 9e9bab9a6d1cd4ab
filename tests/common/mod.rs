#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use orderpay::application::processor::PaymentProcessor;
use orderpay::domain::order::{
    CustomerSnapshot, CustomerStatus, MerchantSnapshot, MerchantStatus, Order, OrderStatus,
};
use orderpay::domain::payment::{PaymentChannel, PaymentRequest};
use orderpay::domain::ports::{
    Clock, EventPublisher, EventPublisherBox, TransactionRecorder, TransactionRecorderBox,
};
use orderpay::domain::transaction::{OutboundMessage, TransactionRecord};
use orderpay::error::{PaymentError, Result};
use orderpay::infrastructure::clock::FixedClock;
use orderpay::infrastructure::in_memory::{
    InMemoryEventPublisher, InMemoryOrderStore, InMemoryTransactionRecorder,
};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

/// Order 1: amount 100, active customer with balance 1000, active merchant,
/// awaiting payment.
pub fn payable_order() -> Order {
    Order {
        id: 1,
        customer_id: 1,
        merchant_id: 1,
        amount: dec!(100),
        status: OrderStatus::RequestPayment,
        customer: CustomerSnapshot {
            id: 1,
            status: CustomerStatus::Active,
            balance: dec!(1000),
        },
        merchant: MerchantSnapshot {
            id: 1,
            status: MerchantStatus::Active,
        },
    }
}

pub fn debit_request() -> PaymentRequest {
    PaymentRequest {
        order_id: 1,
        channel: PaymentChannel::Debit,
        amount: dec!(100),
    }
}

/// Moves one second forward every time it is read, starting at `fixed_instant()`.
#[derive(Default, Clone)]
pub struct SteppingClock {
    pub reads: Arc<AtomicUsize>,
}

impl SteppingClock {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let step = self.reads.fetch_add(1, Ordering::SeqCst);
        fixed_instant() + chrono::Duration::seconds(step as i64)
    }
}

/// Counts save calls and fails every one of them.
#[derive(Default, Clone)]
pub struct FailingRecorder {
    pub calls: Arc<AtomicUsize>,
}

impl FailingRecorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionRecorder for FailingRecorder {
    async fn save(&self, _record: TransactionRecord) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PaymentError::StorageError("database is unavailable".into()))
    }
}

/// Counts publish calls and fails every one of them.
#[derive(Default, Clone)]
pub struct FailingPublisher {
    pub calls: Arc<AtomicUsize>,
}

impl FailingPublisher {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _message: OutboundMessage) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PaymentError::PublishError("broker unreachable".into()))
    }
}

/// A processor wired to in-memory adapters, with handles to inspect them.
pub struct Harness {
    pub processor: PaymentProcessor,
    pub recorder: InMemoryTransactionRecorder,
    pub publisher: InMemoryEventPublisher,
}

pub async fn harness_with(orders: Vec<Order>) -> Harness {
    let recorder = InMemoryTransactionRecorder::new();
    let publisher = InMemoryEventPublisher::new();
    let processor = processor_with(
        orders,
        Box::new(recorder.clone()),
        Box::new(publisher.clone()),
    )
    .await;

    Harness {
        processor,
        recorder,
        publisher,
    }
}

pub async fn processor_with(
    orders: Vec<Order>,
    recorder: TransactionRecorderBox,
    publisher: EventPublisherBox,
) -> PaymentProcessor {
    let store = InMemoryOrderStore::new();
    for order in orders {
        store.insert(order).await;
    }
    PaymentProcessor::new(
        Box::new(store),
        recorder,
        publisher,
        Box::new(FixedClock::new(fixed_instant())),
    )
}
