//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and list service produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request, item and list counters)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are cheap when no recorder is installed (no-ops)

pub mod logging;
pub mod metrics;
