//! Employee model and related types.
//!
//! This module defines the [`Employee`] record and the closed set of
//! [`Compensation`] schemes used to compute its pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::validation::{checked_total, max_amount};

use super::details::{DetailLine, EmployeeDetails};

/// The kind of employment, one per compensation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid a fixed monthly salary.
    FullTime,
    /// Paid an hourly wage for hours worked.
    PartTime,
    /// Paid a fixed amount per completed project.
    Contractual,
}

impl EmployeeKind {
    /// All kinds in menu order.
    pub const ALL: [EmployeeKind; 3] = [Self::FullTime, Self::PartTime, Self::Contractual];

    /// The label shown for this kind in the menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time Employee",
            Self::PartTime => "Part-time Employee",
            Self::Contractual => "Contractual Employee",
        }
    }
}

/// How an employee is paid, with the inputs each scheme needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Compensation {
    /// A fixed monthly salary.
    FixedSalary {
        /// Salary paid per month.
        monthly_salary: Decimal,
    },
    /// An hourly wage multiplied by hours worked.
    Hourly {
        /// Wage per hour.
        hourly_wage: Decimal,
        /// Whole hours worked.
        hours_worked: u32,
    },
    /// A per-project payment multiplied by completed projects.
    Contract {
        /// Payment for each completed project.
        payment_per_project: Decimal,
        /// Number of projects completed.
        projects_completed: u32,
    },
}

impl Compensation {
    /// Returns the employment kind this scheme belongs to.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            Self::FixedSalary { .. } => EmployeeKind::FullTime,
            Self::Hourly { .. } => EmployeeKind::PartTime,
            Self::Contract { .. } => EmployeeKind::Contractual,
        }
    }

    /// Computes the pay for this scheme, rejecting totals above
    /// [`max_amount`] with [`crate::error::PayrollError::InvalidFormat`].
    pub fn checked_pay(&self) -> PayrollResult<Decimal> {
        match *self {
            Self::FixedSalary { monthly_salary } => checked_total(monthly_salary, 1),
            Self::Hourly {
                hourly_wage,
                hours_worked,
            } => checked_total(hourly_wage, hours_worked),
            Self::Contract {
                payment_per_project,
                projects_completed,
            } => checked_total(payment_per_project, projects_completed),
        }
    }

    /// Computes the pay for this scheme.
    ///
    /// The registry only admits compensation whose [`checked_pay`] succeeds,
    /// so for registered employees this is exact. Out-of-range inputs clamp
    /// to [`max_amount`].
    ///
    /// [`checked_pay`]: Self::checked_pay
    pub fn compute_pay(&self) -> Decimal {
        self.checked_pay().unwrap_or_else(|_| max_amount())
    }

    fn detail_lines(&self) -> Vec<DetailLine> {
        match *self {
            Self::FixedSalary { monthly_salary } => {
                vec![DetailLine::amount("Fixed Monthly Salary", monthly_salary)]
            }
            Self::Hourly {
                hourly_wage,
                hours_worked,
            } => vec![
                DetailLine::amount("Hourly Wage", hourly_wage),
                DetailLine::count("Hours Worked", hours_worked),
            ],
            Self::Contract {
                payment_per_project,
                projects_completed,
            } => vec![
                DetailLine::amount("Contract Payment Per Project", payment_per_project),
                DetailLine::count("Projects Completed", projects_completed),
            ],
        }
    }
}

/// An employee on the payroll.
///
/// Fields are expected to be validated before construction; the model does
/// not re-check them.
///
/// # Examples
///
/// ```
/// use payroll_console::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::hourly(2, "Bo", Decimal::new(10, 0), 20);
/// assert_eq!(employee.compute_pay(), Decimal::new(200, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, positive identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// How the employee is paid.
    pub compensation: Compensation,
}

impl Employee {
    /// Creates an employee with the given compensation scheme.
    pub fn new(id: u32, name: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            id,
            name: name.into(),
            compensation,
        }
    }

    /// Creates a full-time employee on a fixed monthly salary.
    pub fn fixed_salary(id: u32, name: impl Into<String>, monthly_salary: Decimal) -> Self {
        Self::new(id, name, Compensation::FixedSalary { monthly_salary })
    }

    /// Creates a part-time employee paid by the hour.
    pub fn hourly(id: u32, name: impl Into<String>, hourly_wage: Decimal, hours_worked: u32) -> Self {
        Self::new(
            id,
            name,
            Compensation::Hourly {
                hourly_wage,
                hours_worked,
            },
        )
    }

    /// Creates a contractual employee paid per project.
    pub fn contract(
        id: u32,
        name: impl Into<String>,
        payment_per_project: Decimal,
        projects_completed: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            Compensation::Contract {
                payment_per_project,
                projects_completed,
            },
        )
    }

    /// Returns the employment kind.
    pub fn kind(&self) -> EmployeeKind {
        self.compensation.kind()
    }

    /// Computes this employee's pay, failing if it does not fit.
    pub fn checked_pay(&self) -> PayrollResult<Decimal> {
        self.compensation.checked_pay()
    }

    /// Computes this employee's pay.
    pub fn compute_pay(&self) -> Decimal {
        self.compensation.compute_pay()
    }

    /// Returns the fields shown for this employee in the payroll report:
    /// id, name, scheme inputs in scheme order, then total pay.
    pub fn describe(&self) -> EmployeeDetails {
        EmployeeDetails {
            id: self.id,
            name: self.name.clone(),
            attributes: self.compensation.detail_lines(),
            total_pay: self.compute_pay(),
        }
    }
}
