//! Binary entrypoint that launches the memoline server.

use std::process::ExitCode;

use memoline::startup;

/// Read configuration from the environment and serve until shutdown.
fn main() -> ExitCode {
    startup::run()
}
