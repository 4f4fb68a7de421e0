//! Test helper utilities for service-errors unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::catalog::ErrorCode;
use std::fmt;

/// Domain code with a conflict status, as a service module would declare it.
pub const OUT_OF_STOCK: ErrorCode =
    ErrorCode::new("order.out_of_stock", "Item is out of stock", 409);

/// Domain code with a server status.
pub const LEDGER_UNAVAILABLE: ErrorCode =
    ErrorCode::new("billing.ledger_unavailable", "Ledger is unavailable", 503);

/// Error type the core knows nothing about, standing in for a driver failure.
#[derive(Debug)]
pub struct DriverError {
    pub detail: String,
    pub source: Option<Box<DriverError>>,
}

impl DriverError {
    pub fn new(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
            source: None,
        }
    }

    pub fn caused_by(detail: &str, source: DriverError) -> Self {
        Self {
            detail: detail.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}
