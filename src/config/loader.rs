//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading a
//! [`SessionConfig`] from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::SessionConfig;

/// Loads session configuration from YAML.
///
/// Every field is optional; omitted fields keep their defaults. An empty
/// document yields [`SessionConfig::default`].
///
/// ```text
/// retry_policy: abort_to_menu
/// require_non_empty_name: true
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for a session config (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_console::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("./session.yaml")?;
    /// # Ok::<(), payroll_console::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<SessionConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        debug!(path = %path_str, "Loading session configuration");
        Self::parse(&content, path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_console::config::{ConfigLoader, RetryPolicy};
    ///
    /// let config = ConfigLoader::from_yaml_str("retry_policy: abort_to_menu").unwrap();
    /// assert_eq!(config.retry_policy, RetryPolicy::AbortToMenu);
    /// ```
    pub fn from_yaml_str(content: &str) -> PayrollResult<SessionConfig> {
        Self::parse(content, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> PayrollResult<SessionConfig> {
        if content.trim().is_empty() {
            return Ok(SessionConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path,
            message: e.to_string(),
        })
    }
}
