//! Logging utilities for service-errors
//!
//! Re-exports tracing macros with log_* naming convention for consistency.

pub use tracing::{error as log_error, info as log_info, warn as log_warn};
