use std::process::ExitCode;
use std::time::Instant;

use tracing::error;
use viselitsa::ui::app::App;
use viselitsa::ui::failure;

fn main() -> ExitCode {
    init_tracing();

    let terminal = ratatui::init();
    let result = App::new(Instant::now()).run(terminal);
    ratatui::restore();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = ?err, "unhandled failure in the main loop");
            failure::show_failure_screen(&err);
            ExitCode::FAILURE
        }
    }
}

// The TUI owns the screen, so the subscriber only goes in when RUST_LOG is
// set; redirect stderr to a file to collect it.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}
