//! Logging utilities.
//!
//! Centralizes logger initialization. Only the standard `log` facade is
//! imposed on the rest of the crate; `env_logger` is the backend wired up
//! here.

mod init;

pub use init::{LoggingConfig, init_logging};
