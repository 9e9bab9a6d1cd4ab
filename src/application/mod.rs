//! Application layer containing the payment orchestration.
//!
//! This module defines the `PaymentProcessor`, the entry point that takes a
//! payment request through validation, persistence and notification. It owns
//! its collaborators as boxed capability ports and awaits them one at a time.

pub mod processor;
