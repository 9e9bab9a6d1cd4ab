use crate::domain::order::Order;
use crate::error::Result;
use std::io::Read;

/// Reads a JSON array of orders, each carrying its customer and merchant.
pub fn load_orders<R: Read>(source: R) -> Result<Vec<Order>> {
    Ok(serde_json::from_reader(source)?)
}
