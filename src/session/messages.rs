//! Fixed console text: prompts and user-facing messages.

pub const PROMPT_ID: &str = "Enter Employee ID: ";
pub const PROMPT_NAME: &str = "Enter Name: ";
pub const PROMPT_FIXED_SALARY: &str = "Enter Fixed Salary: ";
pub const PROMPT_HOURLY_WAGE: &str = "Enter Hourly Wage: ";
pub const PROMPT_HOURS_WORKED: &str = "Enter Hours Worked: ";
pub const PROMPT_PAYMENT_PER_PROJECT: &str = "Enter Contract Payment Per Project: ";
pub const PROMPT_PROJECTS: &str = "Enter Number of Projects: ";
pub const PROMPT_CHOICE: &str = "Enter choice: ";

pub const MENU_HEADER: &str = "----- Menu -----";
pub const REPORT_HEADER: &str = "------ Employee Payroll Report ------";

pub const INVALID_CHOICE: &str = "Invalid choice! Please enter a number between 1 and 5.";
pub const DUPLICATE_ID: &str = "Duplicate ID! Enter a unique ID.";
pub const INVALID_INTEGER: &str = "Invalid input! Please enter a valid positive number.";
pub const INVALID_AMOUNT: &str = "Invalid input! Please enter a valid positive amount.";
pub const INVALID_NAME: &str = "Invalid input! Name cannot be empty.";
pub const RETURNING_TO_MENU: &str = "Invalid input! Returning to menu...";
pub const EMPLOYEE_ADDED: &str = "Employee added successfully!";
pub const NO_EMPLOYEES: &str = "No employees to display.";
pub const FAREWELL: &str = "Exiting program...";
pub const TOTAL_TOO_LARGE: &str = "Invalid input! Total pay is too large.";
