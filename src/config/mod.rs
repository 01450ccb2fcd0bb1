//! Session configuration for the payroll console.
//!
//! The console binary always runs with [`SessionConfig::default`]. Embedders
//! can load an alternative from YAML.
//!
//! # Example
//!
//! ```no_run
//! use payroll_console::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./session.yaml").unwrap();
//! println!("Retry policy: {:?}", config.retry_policy);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RetryPolicy, SessionConfig};
