//! Core data models for the payroll console.
//!
//! This module contains the employee record, its compensation variants and
//! the display-ready details each employee exposes for the payroll report.

mod details;
mod employee;

pub use details::{DetailLine, EmployeeDetails, format_amount};
pub use employee::{Compensation, Employee, EmployeeKind};
