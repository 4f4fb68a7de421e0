//! Test helper utilities for service-errors integration tests
//!
//! Provides a small order service that raises errors the way real call sites do,
//! and a stand-in transport boundary that translates and serializes them.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use service_errors::{
    catalog, guard, report, ErrorCode, Raised, StructuredError, Translator, Validate,
    ValidationErrors,
};
use std::collections::HashMap;
use std::fmt;

pub const OUT_OF_STOCK: ErrorCode =
    ErrorCode::new("order.out_of_stock", "Item is out of stock", 409);

/// Failure from a storage driver the core has never heard of.
#[derive(Debug)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

pub struct NewOrder {
    pub email: String,
    pub quantity: u32,
    pub sku: String,
}

impl Validate for NewOrder {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check(self.email.contains('@'), "email", "must be valid")
            .check(self.quantity > 0, "quantity", "must be >= 1");
        errors.into_result()
    }
}

/// In-memory order service with one broken storage path.
pub struct OrderService {
    pub stock: HashMap<String, u32>,
    pub storage_down: bool,
}

impl OrderService {
    pub fn new() -> Self {
        let mut stock = HashMap::new();
        stock.insert("SKU-1".to_string(), 2);
        Self {
            stock,
            storage_down: false,
        }
    }

    pub fn place(&self, order: &NewOrder) -> anyhow::Result<u32> {
        order.validate()?;
        let available = guard::require_some_with(
            self.stock.get(&order.sku).copied(),
            catalog::NOT_FOUND,
            || format!("{} not found", order.sku),
        )?;
        if available < order.quantity {
            return Err(StructuredError::builder(OUT_OF_STOCK)
                .context("sku", order.sku.as_str())
                .context("available", available)
                .build()
                .into());
        }
        if self.storage_down {
            return Err(StorageError("connection refused to 10.0.0.7:5432".to_string()).into());
        }
        Ok(available - order.quantity)
    }
}

/// What the transport would send: status plus serialized body.
pub struct WireResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Stand-in transport boundary: translate once, log once, serialize.
pub fn respond(translator: &Translator, err: anyhow::Error) -> WireResponse {
    let translation = translator.translate(&Raised::from(err));
    report::log_translation(&translation);
    let (status, envelope) = translation.into_parts();
    WireResponse {
        status,
        body: serde_json::to_value(&envelope).expect("envelope serializes"),
    }
}

pub fn valid_order(quantity: u32) -> NewOrder {
    NewOrder {
        email: "buyer@example.com".to_string(),
        quantity,
        sku: "SKU-1".to_string(),
    }
}
