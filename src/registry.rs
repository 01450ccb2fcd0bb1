//! The in-memory employee registry.
//!
//! Employees are kept in insertion order alongside an id index. The two are
//! only ever updated together, so every registered id appears exactly once
//! in each.

use std::collections::HashSet;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// Insertion-ordered employees plus the set of ids already in use.
#[derive(Debug, Default)]
pub struct Registry {
    employees: Vec<Employee>,
    ids: HashSet<u32>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an employee with this id is registered.
    pub fn id_exists(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Appends an employee, reserving its id.
    ///
    /// Fails and leaves the registry untouched if the id is already taken
    /// ([`PayrollError::DuplicateId`]) or the pay does not fit
    /// ([`PayrollError::InvalidFormat`]).
    pub fn add_employee(&mut self, employee: Employee) -> PayrollResult<()> {
        if self.id_exists(employee.id) {
            return Err(PayrollError::DuplicateId { id: employee.id });
        }
        let pay = employee.checked_pay()?;

        self.ids.insert(employee.id);
        info!(
            employee_id = employee.id,
            kind = ?employee.kind(),
            pay = %pay,
            "Employee registered"
        );
        self.employees.push(employee);
        Ok(())
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// All employees in insertion order.
    pub fn all_employees(&self) -> &[Employee] {
        &self.employees
    }
}
