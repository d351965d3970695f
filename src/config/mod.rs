//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → command-line / environment overrides
//!     → validation.rs (semantic checks)
//!     → TodoConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so no file is needed to start
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, SecurityConfig, StoreConfig, TimeoutConfig,
    TodoConfig,
};
pub use validation::{validate_config, ValidationError};
