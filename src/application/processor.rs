use crate::domain::payment::PaymentRequest;
use crate::domain::ports::{ClockBox, EventPublisherBox, OrderLookupBox, TransactionRecorderBox};
use crate::domain::transaction::{NotificationEvent, OutboundMessage, TransactionRecord};
use crate::domain::validation::{self, RejectionReason};
use crate::error::{PaymentError, Result};
use tracing::{error, info, warn};

/// What happened to a payment that made it through persistence and publishing.
#[derive(Debug, PartialEq, Clone)]
pub enum PaymentOutcome {
    Approved {
        record: TransactionRecord,
    },
    Rejected {
        reason: RejectionReason,
        record: TransactionRecord,
    },
}

impl PaymentOutcome {
    /// The transaction record that was persisted for this attempt.
    pub fn record(&self) -> &TransactionRecord {
        match self {
            PaymentOutcome::Approved { record } | PaymentOutcome::Rejected { record, .. } => {
                record
            }
        }
    }

    pub fn into_record(self) -> TransactionRecord {
        match self {
            PaymentOutcome::Approved { record } | PaymentOutcome::Rejected { record, .. } => record,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }

    /// Folds the outcome into a single error channel: a rejection becomes
    /// `PaymentError::Rejected`, whose message is the reason text.
    pub fn into_result(self) -> Result<()> {
        match self {
            PaymentOutcome::Approved { .. } => Ok(()),
            PaymentOutcome::Rejected { reason, .. } => Err(PaymentError::Rejected(reason)),
        }
    }
}

/// Takes payment requests through validation, persistence and notification.
///
/// Each request is handled end to end by the caller's task. The record is
/// always saved before the notification is published, and nothing is published
/// when saving fails. Concurrent payments for the same order are not
/// coordinated.
pub struct PaymentProcessor {
    orders: OrderLookupBox,
    recorder: TransactionRecorderBox,
    publisher: EventPublisherBox,
    clock: ClockBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor`.
    ///
    /// # Arguments
    ///
    /// * `orders` - Looks up orders with their customer and merchant.
    /// * `recorder` - Persists transaction records.
    /// * `publisher` - Delivers payment notifications.
    /// * `clock` - Supplies the timestamp shared by the record and its event.
    pub fn new(
        orders: OrderLookupBox,
        recorder: TransactionRecorderBox,
        publisher: EventPublisherBox,
        clock: ClockBox,
    ) -> Self {
        Self {
            orders,
            recorder,
            publisher,
            clock,
        }
    }

    /// Processes a single payment request.
    ///
    /// Business rejections are returned as `Ok(PaymentOutcome::Rejected)` after
    /// the rejected record has been saved and published. `Err` is reserved for
    /// failures of the recorder or the publisher.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<PaymentOutcome> {
        let now = self.clock.now();
        let mut record = TransactionRecord::confirmed(&request, now);

        let verdict = self.evaluate(&request).await;
        if let Err(reason) = &verdict {
            record.reject(reason);
        }
        let message = OutboundMessage::payment_notification(NotificationEvent::from(&record));

        if let Err(e) = self.recorder.save(record.clone()).await {
            error!(order_id = request.order_id, error = %e, "Failed to save transaction");
            return Err(e);
        }

        if let Err(e) = self.publisher.publish(message).await {
            error!(order_id = request.order_id, error = %e, "Failed to publish payment notification");
            return Err(e);
        }

        match verdict {
            Ok(()) => {
                info!(
                    order_id = request.order_id,
                    channel = %request.channel,
                    amount = %request.amount,
                    "Payment confirmed"
                );
                Ok(PaymentOutcome::Approved { record })
            }
            Err(reason) => {
                warn!(
                    order_id = request.order_id,
                    channel = %request.channel,
                    reason = %reason,
                    "Payment rejected"
                );
                Ok(PaymentOutcome::Rejected { reason, record })
            }
        }
    }

    /// Runs the channel rule, looks the order up and runs the remaining rules.
    ///
    /// A failed lookup is reported as a rejection carrying the lookup error text.
    async fn evaluate(&self, request: &PaymentRequest) -> std::result::Result<(), RejectionReason> {
        validation::check_channel(request)?;

        let order = self
            .orders
            .get_by_id(request.order_id)
            .await
            .map_err(|e| RejectionReason::OrderLookupFailed(e.to_string()))?;

        validation::validate(request, &order)
    }
}
