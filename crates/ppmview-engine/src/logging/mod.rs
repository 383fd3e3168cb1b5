//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade; the
//! backend is `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
