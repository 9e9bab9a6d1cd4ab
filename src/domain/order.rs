use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OrderId = u64;
pub type CustomerId = u64;
pub type MerchantId = u64;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    RequestPayment,
    Confirm,
    Reject,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MerchantStatus {
    Active,
    Suspend,
    Inactive,
}

/// The paying customer as embedded in an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub status: CustomerStatus,
    /// Funds the customer can spend.
    pub balance: Decimal,
}

/// The merchant being paid, as embedded in an order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MerchantSnapshot {
    pub id: MerchantId,
    pub status: MerchantStatus,
}

/// An order together with its customer and merchant snapshots.
///
/// Orders are owned by the storage layer. Payment processing only reads them;
/// `status` is never advanced after a payment attempt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "customerID")]
    pub customer_id: CustomerId,
    #[serde(rename = "merchantID")]
    pub merchant_id: MerchantId,
    pub amount: Decimal,
    pub status: OrderStatus,
    pub customer: CustomerSnapshot,
    pub merchant: MerchantSnapshot,
}
