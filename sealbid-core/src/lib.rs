#![warn(missing_docs)]
//! Core types and logic for a sealed-bid collection form.
//!
//! A bid arrives as four raw text fields, is validated against the configured
//! [`BidRules`](models::BidRules), tagged with a random six-digit
//! [`BidToken`](models::BidToken) and handed to a storage backend. The
//! current highest bid can be read back with the bidder's name masked.
//!
//! Storage and the surrounding application are expressed as traits in
//! [`ports`], so the same [`BidService`](service::BidService) runs against
//! SQLite in production and an in-memory store in tests.

/// Domain models for bids and the rules they are checked against.
///
/// These are plain data structures. Validation of raw form input happens in
/// [`BidForm::validate`](models::BidForm::validate); everything downstream of
/// that works with already-checked values.
pub mod models;

/// Interface traits between the bid service and its adapters.
///
/// This module contains the "ports" in the hexagonal architecture pattern:
/// a storage repository and the application handle that bundles a
/// repository with a clock, the acceptance rules and an identifier generator.
pub mod ports;

/// Masking of display names for public disclosure.
pub mod redact;

/// The orchestrator tying validation, identifier generation and storage together.
pub mod service;

/// An in-process repository, useful for unit tests.
#[cfg(any(test, feature = "memory"))]
pub mod memory;
