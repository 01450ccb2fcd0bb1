//! Configuration types for the payroll session.

use serde::Deserialize;

/// What the add-employee flow does when a field is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Ask for the same field again until it is valid.
    #[default]
    Reprompt,
    /// Abandon the employee being added and show the menu again.
    AbortToMenu,
}

/// Settings for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Handling of malformed field input. Duplicate ids always re-prompt.
    pub retry_policy: RetryPolicy,
    /// Reject blank employee names.
    pub require_non_empty_name: bool,
}
