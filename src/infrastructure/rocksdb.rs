use crate::domain::order::{Order, OrderId};
use crate::domain::ports::{OrderLookup, TransactionRecorder};
use crate::domain::transaction::TransactionRecord;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Column Family for storing orders with their customer and merchant snapshots.
pub const CF_ORDERS: &str = "orders";
/// Column Family for the append-only transaction log.
pub const CF_TRANSACTIONS: &str = "transactions";

/// A persistent store implementation using RocksDB.
///
/// Orders are keyed by their big-endian id. Transaction records are keyed by a
/// big-endian sequence number, so iteration returns them in the order they
/// were saved and repeated payments for the same order never overwrite each
/// other.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbStore {
    db: Arc<DB>,
    next_seq: Arc<AtomicU64>,
}

impl RocksDbStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families ("orders" and "transactions")
    /// exist and resumes the transaction sequence after the last stored record.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_orders = ColumnFamilyDescriptor::new(CF_ORDERS, Options::default());
        let cf_transactions = ColumnFamilyDescriptor::new(CF_TRANSACTIONS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_orders, cf_transactions])?;

        let next_seq = {
            let cf = column_family(&db, CF_TRANSACTIONS)?;
            match db.iterator_cf(cf, IteratorMode::End).next() {
                Some(item) => decode_seq(&item?.0)? + 1,
                None => 0,
            }
        };

        Ok(Self {
            db: Arc::new(db),
            next_seq: Arc::new(AtomicU64::new(next_seq)),
        })
    }

    /// Inserts or replaces an order.
    pub fn put_order(&self, order: &Order) -> Result<()> {
        let cf = column_family(&self.db, CF_ORDERS)?;
        let value = serde_json::to_vec(order)?;
        self.db.put_cf(&cf, order.id.to_be_bytes(), value)?;
        Ok(())
    }

    /// Returns every stored transaction record in the order they were saved.
    pub fn records(&self) -> Result<Vec<TransactionRecord>> {
        let cf = column_family(&self.db, CF_TRANSACTIONS)?;

        let mut records = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            records.push(serde_json::from_slice(&value)?);
        }
        Ok(records)
    }
}

fn column_family<'a>(db: &'a DB, name: &str) -> Result<&'a ColumnFamily> {
    db.cf_handle(name).ok_or_else(|| {
        PaymentError::InternalError(Box::new(std::io::Error::other(format!(
            "{} column family not found",
            name
        ))))
    })
}

fn decode_seq(key: &[u8]) -> Result<u64> {
    let bytes: [u8; 8] = key.try_into().map_err(|_| {
        PaymentError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Malformed transaction key of {} bytes", key.len()),
        )))
    })?;
    Ok(u64::from_be_bytes(bytes))
}

#[async_trait]
impl OrderLookup for RocksDbStore {
    async fn get_by_id(&self, id: OrderId) -> Result<Order> {
        let cf = column_family(&self.db, CF_ORDERS)?;

        match self.db.get_cf(&cf, id.to_be_bytes())? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Err(PaymentError::OrderNotFound(id)),
        }
    }
}

#[async_trait]
impl TransactionRecorder for RocksDbStore {
    async fn save(&self, record: TransactionRecord) -> Result<()> {
        let cf = column_family(&self.db, CF_TRANSACTIONS)?;

        let value = serde_json::to_vec(&record)?;
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.db.put_cf(&cf, seq.to_be_bytes(), value)?;

        debug!(seq, order_id = record.order_id, "Stored transaction record");
        Ok(())
    }
}
