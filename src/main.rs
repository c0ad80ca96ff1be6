//! Console entry point.

use std::io;
use std::process::ExitCode;

use monty_hall::{ConsolePresenter, FileHistory, Session, SessionConfig};
use tracing::Level;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::default();
    let history = FileHistory::new(config.history_path.clone());
    let presenter = ConsolePresenter::new(io::stdin().lock(), io::stdout());

    let mut session = Session::new(config, presenter, history);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Session aborted");
            ExitCode::FAILURE
        }
    }
}
