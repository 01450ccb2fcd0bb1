//! Payroll report rendering.

use crate::registry::Registry;

use super::messages::NO_EMPLOYEES;

/// Renders the report body: every employee's details in insertion order,
/// each followed by a blank line, or the empty notice.
pub fn render_report(registry: &Registry) -> String {
    if registry.is_empty() {
        return format!("{}\n", NO_EMPLOYEES);
    }

    registry
        .all_employees()
        .iter()
        .map(|employee| format!("{}\n", employee.describe()))
        .collect()
}
