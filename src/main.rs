use std::io;
use std::process::ExitCode;

use tracing::{Level, error};

use payroll_console::config::SessionConfig;
use payroll_console::session::Session;

fn main() -> ExitCode {
    // Diagnostics go to stderr so the console transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SessionConfig::default());

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Payroll session failed");
            ExitCode::FAILURE
        }
    }
}
