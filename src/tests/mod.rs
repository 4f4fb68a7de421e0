// Test modules for service-errors crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Test helper utilities shared across unit test files
pub mod helpers;

pub mod config;
pub mod violation;
