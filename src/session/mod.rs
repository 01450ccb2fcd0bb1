//! The interactive payroll session.
//!
//! A [`Session`] owns the [`Registry`] and drives a small state machine over
//! a line-oriented reader and a writer:
//!
//! ```text
//! MenuPrompt ──1..3──► CollectId ──► CollectName ──► CollectVariantFields ─┐
//!     ▲  │                                                                 │
//!     │  ├──4──► Report ───────────────────────────────────────────────────┤
//!     │  └──5──► Exit                                                       │
//!     └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed input never ends the session. End of input at any prompt ends
//! it cleanly with [`SessionOutcome::InputClosed`].

mod menu;
mod messages;
mod report;

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{RetryPolicy, SessionConfig};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, Employee, EmployeeKind};
use crate::registry::Registry;
use crate::validation::{
    INTEGER_FIELD, TOTAL_PAY_FIELD, checked_total, parse_non_negative_decimal,
    parse_positive_integer,
};

pub use menu::{MenuChoice, render_menu};
pub use report::render_report;

use messages::*;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose Exit from the menu.
    Exited,
    /// The input stream ended before Exit was chosen.
    InputClosed,
}

#[derive(Debug)]
enum State {
    MenuPrompt,
    CollectId(EmployeeKind),
    CollectName(EmployeeKind, u32),
    CollectVariantFields(EmployeeKind, u32, String),
    Report,
    Exit,
    Closed,
}

/// Why a field prompt ended without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// The retry policy gave up; back to the menu.
    Abort,
    /// Input ended.
    Closed,
}

impl From<Stop> for State {
    fn from(stop: Stop) -> Self {
        match stop {
            Stop::Abort => State::MenuPrompt,
            Stop::Closed => State::Closed,
        }
    }
}

/// An interactive payroll session over a reader and a writer.
///
/// # Example
///
/// ```
/// use payroll_console::config::SessionConfig;
/// use payroll_console::session::{Session, SessionOutcome};
///
/// let input = "1\n7\nAnn\n3000\n5\n";
/// let mut output: Vec<u8> = Vec::new();
/// let mut session = Session::new(input.as_bytes(), &mut output, SessionConfig::default());
///
/// assert_eq!(session.run().unwrap(), SessionOutcome::Exited);
/// assert_eq!(session.registry().len(), 1);
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: Registry,
    config: SessionConfig,
    session_id: Uuid,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty registry.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            registry: Registry::new(),
            config,
            session_id: Uuid::new_v4(),
        }
    }

    /// The employees registered so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    ///
    /// Only terminal I/O failures are returned as errors.
    pub fn run(&mut self) -> PayrollResult<SessionOutcome> {
        info!(
            session_id = %self.session_id,
            retry_policy = ?self.config.retry_policy,
            "Payroll session started"
        );

        let mut state = State::MenuPrompt;
        loop {
            state = match state {
                State::MenuPrompt => self.menu_prompt()?,
                State::CollectId(kind) => self.collect_id(kind)?,
                State::CollectName(kind, id) => self.collect_name(kind, id)?,
                State::CollectVariantFields(kind, id, name) => {
                    self.collect_variant_fields(kind, id, name)?
                }
                State::Report => self.report()?,
                State::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    self.output.flush()?;
                    info!(
                        session_id = %self.session_id,
                        employees = self.registry.len(),
                        "Payroll session ended"
                    );
                    return Ok(SessionOutcome::Exited);
                }
                State::Closed => {
                    self.output.flush()?;
                    info!(
                        session_id = %self.session_id,
                        employees = self.registry.len(),
                        "Input closed, ending payroll session"
                    );
                    return Ok(SessionOutcome::InputClosed);
                }
            };
        }
    }

    fn menu_prompt(&mut self) -> PayrollResult<State> {
        write!(self.output, "{}", render_menu())?;
        let Some(line) = self.read_line()? else {
            return Ok(State::Closed);
        };

        match MenuChoice::parse(line.trim()) {
            Ok(MenuChoice::Add(kind)) => Ok(State::CollectId(kind)),
            Ok(MenuChoice::Report) => Ok(State::Report),
            Ok(MenuChoice::Exit) => Ok(State::Exit),
            Err(err) => {
                debug!(session_id = %self.session_id, error = %err, "Rejected menu choice");
                writeln!(self.output, "{}", INVALID_CHOICE)?;
                Ok(State::MenuPrompt)
            }
        }
    }

    fn collect_id(&mut self, kind: EmployeeKind) -> PayrollResult<State> {
        loop {
            match self.prompt_field(PROMPT_ID, INVALID_INTEGER, parse_employee_id)? {
                Ok(id) if self.registry.id_exists(id) => {
                    debug!(session_id = %self.session_id, employee_id = id, "Duplicate employee id");
                    writeln!(self.output, "{}", DUPLICATE_ID)?;
                }
                Ok(id) => return Ok(State::CollectName(kind, id)),
                Err(stop) => return Ok(stop.into()),
            }
        }
    }

    fn collect_name(&mut self, kind: EmployeeKind, id: u32) -> PayrollResult<State> {
        loop {
            self.prompt(PROMPT_NAME)?;
            let Some(line) = self.read_line()? else {
                return Ok(State::Closed);
            };

            let name = line.trim();
            if name.is_empty() && self.config.require_non_empty_name {
                debug!(session_id = %self.session_id, employee_id = id, "Rejected blank name");
                match self.config.retry_policy {
                    RetryPolicy::Reprompt => {
                        writeln!(self.output, "{}", INVALID_NAME)?;
                        continue;
                    }
                    RetryPolicy::AbortToMenu => {
                        writeln!(self.output, "{}", RETURNING_TO_MENU)?;
                        return Ok(State::MenuPrompt);
                    }
                }
            }

            return Ok(State::CollectVariantFields(kind, id, name.to_string()));
        }
    }

    fn collect_variant_fields(
        &mut self,
        kind: EmployeeKind,
        id: u32,
        name: String,
    ) -> PayrollResult<State> {
        let compensation = match kind {
            EmployeeKind::FullTime => {
                let monthly_salary = match self.prompt_amount(PROMPT_FIXED_SALARY)? {
                    Ok(v) => v,
                    Err(stop) => return Ok(stop.into()),
                };
                Compensation::FixedSalary { monthly_salary }
            }
            EmployeeKind::PartTime => {
                let hourly_wage = match self.prompt_amount(PROMPT_HOURLY_WAGE)? {
                    Ok(v) => v,
                    Err(stop) => return Ok(stop.into()),
                };
                let hours_worked = match self.prompt_count(PROMPT_HOURS_WORKED, hourly_wage)? {
                    Ok(v) => v,
                    Err(stop) => return Ok(stop.into()),
                };
                Compensation::Hourly {
                    hourly_wage,
                    hours_worked,
                }
            }
            EmployeeKind::Contractual => {
                let payment_per_project =
                    match self.prompt_amount(PROMPT_PAYMENT_PER_PROJECT)? {
                        Ok(v) => v,
                        Err(stop) => return Ok(stop.into()),
                    };
                let projects_completed =
                    match self.prompt_count(PROMPT_PROJECTS, payment_per_project)? {
                        Ok(v) => v,
                        Err(stop) => return Ok(stop.into()),
                    };
                Compensation::Contract {
                    payment_per_project,
                    projects_completed,
                }
            }
        };

        // The id and the pay were both checked while prompting; a rejection
        // here still leaves the registry unchanged and returns to the menu.
        if let Err(err) = self.registry.add_employee(Employee::new(id, name, compensation)) {
            debug!(session_id = %self.session_id, error = %err, "Employee not added");
            writeln!(self.output, "{}", RETURNING_TO_MENU)?;
            return Ok(State::MenuPrompt);
        }
        writeln!(self.output, "{}", EMPLOYEE_ADDED)?;
        Ok(State::MenuPrompt)
    }

    fn report(&mut self) -> PayrollResult<State> {
        writeln!(self.output, "\n{}", REPORT_HEADER)?;
        write!(self.output, "{}", render_report(&self.registry))?;
        debug!(
            session_id = %self.session_id,
            employees = self.registry.len(),
            "Payroll report displayed"
        );
        Ok(State::MenuPrompt)
    }

    fn prompt_amount(&mut self, prompt: &str) -> PayrollResult<Result<Decimal, Stop>> {
        self.prompt_field(prompt, INVALID_AMOUNT, parse_non_negative_decimal)
    }

    /// Asks for the count multiplied by `amount`; a count whose total does
    /// not fit is rejected like malformed text.
    fn prompt_count(&mut self, prompt: &str, amount: Decimal) -> PayrollResult<Result<u32, Stop>> {
        self.prompt_field(prompt, INVALID_INTEGER, |text| {
            let count = parse_positive_integer(text)?;
            checked_total(amount, count)?;
            Ok(count)
        })
    }

    /// Asks for one field until it parses, or until the retry policy gives up.
    ///
    /// Parse failures are always recoverable; only I/O errors are returned.
    fn prompt_field<T>(
        &mut self,
        prompt: &str,
        reprompt_message: &str,
        parse: impl Fn(&str) -> PayrollResult<T>,
    ) -> PayrollResult<Result<T, Stop>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(Err(Stop::Closed));
            };

            let err = match parse(line.trim()) {
                Ok(value) => return Ok(Ok(value)),
                Err(err) => err,
            };
            debug!(
                session_id = %self.session_id,
                prompt = prompt.trim_end(),
                error = %err,
                "Rejected field input"
            );

            match self.config.retry_policy {
                RetryPolicy::Reprompt => {
                    let message = match &err {
                        PayrollError::InvalidFormat { field, .. } if field == TOTAL_PAY_FIELD => {
                            TOTAL_TOO_LARGE
                        }
                        _ => reprompt_message,
                    };
                    writeln!(self.output, "{}", message)?;
                }
                RetryPolicy::AbortToMenu => {
                    writeln!(self.output, "{}", RETURNING_TO_MENU)?;
                    return Ok(Err(Stop::Abort));
                }
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> PayrollResult<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, which no parser accepts, so
    /// they take the usual invalid-input path.
    fn read_line(&mut self) -> PayrollResult<Option<String>> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Employee ids are positive: `0` is malformed.
fn parse_employee_id(text: &str) -> PayrollResult<u32> {
    match parse_positive_integer(text)? {
        0 => Err(PayrollError::invalid_format(INTEGER_FIELD, text)),
        id => Ok(id),
    }
}
