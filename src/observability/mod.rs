//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Library code emits:
//!     → tracing events (route matched / no route matched, config loaded)
//!
//! Binary installs:
//!     → logging.rs (EnvFilter + fmt layer on stderr)
//! ```
//!
//! # Design Decisions
//! - Library never installs a subscriber; only the binary does
//! - Logs go to stderr so stdout stays machine-readable

pub mod logging;

pub use logging::init_logging;
