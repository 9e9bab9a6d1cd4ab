use crate::domain::order::OrderId;
use crate::domain::validation::RejectionReason;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("order {0} not found")]
    OrderNotFound(OrderId),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Publish error: {0}")]
    PublishError(String),
    /// A business rule rejected the payment. Displays as the bare reason text.
    #[error("{0}")]
    Rejected(RejectionReason),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),
}

impl PaymentError {
    /// True for business rejections, which a transport maps to a client error.
    /// Every other variant is an infrastructure failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, PaymentError::Rejected(_))
    }
}

impl From<RejectionReason> for PaymentError {
    fn from(reason: RejectionReason) -> Self {
        PaymentError::Rejected(reason)
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
