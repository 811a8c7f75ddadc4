//! Observability for the Gym Service storefront tools.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one run
//! - `LogEntry` - Structured log line in JSON or human form
//! - `StructuredLayer` - `tracing` layer emitting `LogEntry` lines
//! - `init` - Install the layer with an `EnvFilter`

mod layer;
mod logging;
mod session;

pub use layer::*;
pub use logging::*;
pub use session::*;
