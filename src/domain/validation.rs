//! Business rules a payment must satisfy before it is confirmed.
//!
//! Rules run in a fixed order and stop at the first failure, so exactly one
//! reason is ever reported for a rejected payment.

use super::order::{CustomerStatus, MerchantStatus, Order, OrderStatus};
use super::payment::PaymentRequest;
use std::fmt;

/// Why a payment was rejected.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RejectionReason {
    InvalidChannel,
    /// The order could not be looked up. Carries the lookup error text as-is.
    OrderLookupFailed(String),
    OrderNotAwaitingPayment,
    CustomerInactive,
    InsufficientBalance,
    MerchantInactive,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectionReason::InvalidChannel => "invalid payment channel",
            RejectionReason::OrderLookupFailed(cause) => cause,
            RejectionReason::OrderNotAwaitingPayment => "order status is not request payment",
            RejectionReason::CustomerInactive => "customer status is not active",
            RejectionReason::InsufficientBalance => "customer amount is not enough",
            RejectionReason::MerchantInactive => "merchant status is not active",
        };
        f.write_str(text)
    }
}

impl std::error::Error for RejectionReason {}

/// Checks that the request uses a recognized payment channel.
///
/// This is the only rule that does not need the order, and it runs before
/// the order is looked up.
pub fn check_channel(request: &PaymentRequest) -> Result<(), RejectionReason> {
    if request.channel.is_recognized() {
        Ok(())
    } else {
        Err(RejectionReason::InvalidChannel)
    }
}

/// Runs every rule against a request and the order it pays for.
pub fn validate(request: &PaymentRequest, order: &Order) -> Result<(), RejectionReason> {
    check_channel(request)?;

    if order.status != OrderStatus::RequestPayment {
        return Err(RejectionReason::OrderNotAwaitingPayment);
    }
    if order.customer.status != CustomerStatus::Active {
        return Err(RejectionReason::CustomerInactive);
    }
    // Balance is checked against the order's amount, not the requested one.
    if order.customer.balance < order.amount {
        return Err(RejectionReason::InsufficientBalance);
    }
    if order.merchant.status != MerchantStatus::Active {
        return Err(RejectionReason::MerchantInactive);
    }

    Ok(())
}
