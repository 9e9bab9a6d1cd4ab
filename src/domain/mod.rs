//! Domain types, business rules and the capability ports the core depends on.

pub mod order;
pub mod payment;
pub mod ports;
pub mod transaction;
pub mod validation;
