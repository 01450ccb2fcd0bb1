//! Main menu rendering and choice parsing.

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeKind;
use crate::validation::parse_positive_integer;

use super::messages::{MENU_HEADER, PROMPT_CHOICE};

/// A valid main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Options 1-3: add an employee of this kind.
    Add(EmployeeKind),
    /// Option 4: print the payroll report.
    Report,
    /// Option 5: end the session.
    Exit,
}

impl MenuChoice {
    /// Parses a menu line.
    ///
    /// Anything that is not an integer in `1..=5` is
    /// [`PayrollError::InvalidChoice`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_console::models::EmployeeKind;
    /// use payroll_console::session::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse("2").unwrap(), MenuChoice::Add(EmployeeKind::PartTime));
    /// assert!(MenuChoice::parse("6").is_err());
    /// ```
    pub fn parse(text: &str) -> PayrollResult<Self> {
        let invalid = || PayrollError::InvalidChoice {
            input: text.to_string(),
        };

        match parse_positive_integer(text).map_err(|_| invalid())? {
            1 => Ok(Self::Add(EmployeeKind::FullTime)),
            2 => Ok(Self::Add(EmployeeKind::PartTime)),
            3 => Ok(Self::Add(EmployeeKind::Contractual)),
            4 => Ok(Self::Report),
            5 => Ok(Self::Exit),
            _ => Err(invalid()),
        }
    }
}

/// Renders the menu, including the leading blank line and the trailing
/// choice prompt (no newline after it).
pub fn render_menu() -> String {
    let mut menu = format!("\n{}\n", MENU_HEADER);
    for (number, kind) in (1..).zip(EmployeeKind::ALL) {
        menu.push_str(&format!("{} - {}\n", number, kind.menu_label()));
    }
    menu.push_str("4 - Display Payroll Report\n");
    menu.push_str("5 - Exit\n");
    menu.push_str(PROMPT_CHOICE);
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_every_option() {
        assert_eq!(
            MenuChoice::parse("1").unwrap(),
            MenuChoice::Add(EmployeeKind::FullTime)
        );
        assert_eq!(
            MenuChoice::parse("3").unwrap(),
            MenuChoice::Add(EmployeeKind::Contractual)
        );
        assert_eq!(MenuChoice::parse("4").unwrap(), MenuChoice::Report);
        assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_accepts_leading_zeros() {
        assert_eq!(MenuChoice::parse("05").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_text() {
        for text in ["0", "6", "", "abc", "-1", "1.0", "99999999999"] {
            match MenuChoice::parse(text) {
                Err(PayrollError::InvalidChoice { input }) => assert_eq!(input, text),
                other => panic!("Expected InvalidChoice for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_render_menu_matches_console_layout() {
        assert_eq!(
            render_menu(),
            "\n----- Menu -----\n\
             1 - Full-time Employee\n\
             2 - Part-time Employee\n\
             3 - Contractual Employee\n\
             4 - Display Payroll Report\n\
             5 - Exit\n\
             Enter choice: "
        );
    }
}
