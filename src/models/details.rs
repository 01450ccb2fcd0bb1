//! Display-ready employee details.
//!
//! [`EmployeeDetails`] carries the data for one payroll report entry; its
//! `Display` impl renders the labelled lines.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Renders an amount as dollars with exactly two decimals.
///
/// # Examples
///
/// ```
/// use payroll_console::models::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(155, 1)), "$15.50");
/// assert_eq!(format_amount(Decimal::new(10005, 3)), "$10.01");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("${}", rounded)
}

/// One scheme-specific line in an employee's details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetailLine {
    /// A monetary input, shown with a `$` prefix.
    Amount {
        /// Line label.
        label: &'static str,
        /// The amount.
        value: Decimal,
    },
    /// A whole-number input such as hours or projects.
    Count {
        /// Line label.
        label: &'static str,
        /// The count.
        value: u32,
    },
}

impl DetailLine {
    /// Creates a monetary line.
    pub fn amount(label: &'static str, value: Decimal) -> Self {
        Self::Amount { label, value }
    }

    /// Creates a count line.
    pub fn count(label: &'static str, value: u32) -> Self {
        Self::Count { label, value }
    }

    /// Returns the line label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Amount { label, .. } | Self::Count { label, .. } => label,
        }
    }
}

impl fmt::Display for DetailLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount { label, value } => write!(f, "{}: {}", label, format_amount(*value)),
            Self::Count { label, value } => write!(f, "{}: {}", label, value),
        }
    }
}

/// Everything the payroll report shows for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDetails {
    /// Employee id.
    pub id: u32,
    /// Employee name.
    pub name: String,
    /// Scheme inputs, in scheme order.
    pub attributes: Vec<DetailLine>,
    /// Computed pay.
    pub total_pay: Decimal,
}

impl fmt::Display for EmployeeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        for line in &self.attributes {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "Total Salary: {}", format_amount(self.total_pay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(dec("3000")), "$3000.00");
        assert_eq!(format_amount(dec("620.0")), "$620.00");
        assert_eq!(format_amount(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec("0.125")), "$0.13");
        assert_eq!(format_amount(dec("0.124")), "$0.12");
    }

    #[test]
    fn test_detail_line_display() {
        assert_eq!(
            DetailLine::amount("Hourly Wage", dec("15.5")).to_string(),
            "Hourly Wage: $15.50"
        );
        assert_eq!(
            DetailLine::count("Hours Worked", 40).to_string(),
            "Hours Worked: 40"
        );
        assert_eq!(DetailLine::count("Projects Completed", 4).label(), "Projects Completed");
    }

    #[test]
    fn test_details_render_in_field_order() {
        let details = EmployeeDetails {
            id: 2,
            name: "Bo".to_string(),
            attributes: vec![
                DetailLine::amount("Hourly Wage", dec("10")),
                DetailLine::count("Hours Worked", 20),
            ],
            total_pay: dec("200"),
        };

        assert_eq!(
            details.to_string(),
            "Employee ID: 2\nName: Bo\nHourly Wage: $10.00\nHours Worked: 20\nTotal Salary: $200.00\n"
        );
    }

    #[test]
    fn test_details_serialize_as_structured_fields() {
        let details = EmployeeDetails {
            id: 1,
            name: "Ann".to_string(),
            attributes: vec![DetailLine::amount("Fixed Monthly Salary", dec("3000"))],
            total_pay: dec("3000"),
        };
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["attributes"][0]["type"], "amount");
        assert_eq!(json["attributes"][0]["label"], "Fixed Monthly Salary");
        assert_eq!(json["total_pay"], "3000");
    }
}
