use clap::Parser;
use miette::{IntoDiagnostic, Result};
use orderpay::application::processor::PaymentProcessor;
use orderpay::domain::order::Order;
use orderpay::domain::ports::{EventPublisherBox, OrderLookupBox, TransactionRecorderBox};
use orderpay::infrastructure::clock::SystemClock;
use orderpay::infrastructure::in_memory::{
    InMemoryEventPublisher, InMemoryOrderStore, InMemoryTransactionRecorder,
};
use orderpay::infrastructure::json_lines::JsonLinesPublisher;
#[cfg(feature = "storage-rocksdb")]
use orderpay::infrastructure::rocksdb::RocksDbStore;
use orderpay::interfaces::csv::request_reader::PaymentRequestReader;
use orderpay::interfaces::csv::transaction_writer::TransactionWriter;
use orderpay::interfaces::json::order_fixture::load_orders;
use orderpay::telemetry;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file (orderID, channel, amount)
    input: PathBuf,

    /// JSON file with the orders to load before processing
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Write published payment notifications to this file as JSON lines
    #[arg(long)]
    events: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let orders = match &cli.orders {
        Some(path) => load_orders(File::open(path).into_diagnostic()?).into_diagnostic()?,
        None => Vec::new(),
    };
    info!(count = orders.len(), "Loaded orders");

    let (order_lookup, recorder) = open_storage(cli.db_path, orders).await?;

    let publisher: EventPublisherBox = match cli.events {
        Some(path) => Box::new(JsonLinesPublisher::new(File::create(path).into_diagnostic()?)),
        None => Box::new(InMemoryEventPublisher::new()),
    };

    let processor = PaymentProcessor::new(order_lookup, recorder, publisher, Box::new(SystemClock));

    // Process payments one at a time, in file order
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = PaymentRequestReader::new(file);
    let mut records = Vec::new();
    for request in reader.requests() {
        match request {
            Ok(request) => match processor.process_payment(request).await {
                Ok(outcome) => records.push(outcome.into_record()),
                Err(e) => error!("Error processing payment: {}", e),
            },
            Err(e) => error!("Error reading payment request: {}", e),
        }
    }

    let stdout = io::stdout();
    let mut writer = TransactionWriter::new(stdout.lock());
    writer.write_records(&records).into_diagnostic()?;

    Ok(())
}

async fn seed_in_memory(orders: Vec<Order>) -> (OrderLookupBox, TransactionRecorderBox) {
    let store = InMemoryOrderStore::new();
    for order in orders {
        store.insert(order).await;
    }
    let order_lookup: OrderLookupBox = Box::new(store);
    let recorder: TransactionRecorderBox = Box::new(InMemoryTransactionRecorder::new());
    (order_lookup, recorder)
}

#[cfg(feature = "storage-rocksdb")]
async fn open_storage(
    db_path: Option<PathBuf>,
    orders: Vec<Order>,
) -> Result<(OrderLookupBox, TransactionRecorderBox)> {
    match db_path {
        Some(path) => {
            let store = RocksDbStore::open(path).into_diagnostic()?;
            for order in &orders {
                store.put_order(order).into_diagnostic()?;
            }
            let order_lookup: OrderLookupBox = Box::new(store.clone());
            let recorder: TransactionRecorderBox = Box::new(store);
            Ok((order_lookup, recorder))
        }
        None => Ok(seed_in_memory(orders).await),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
async fn open_storage(
    db_path: Option<PathBuf>,
    orders: Vec<Order>,
) -> Result<(OrderLookupBox, TransactionRecorderBox)> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(seed_in_memory(orders).await)
}
