//! Logging utilities.
//!
//! Centralizes logger initialization. The crate itself only uses the `log`
//! facade (update diagnostics, triangulation warnings); the backend here is
//! for hosts that do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
