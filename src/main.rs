use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tudu::commands::Cli;
use tudu::libs::messages::{macros::is_debug_mode, Message};
use tudu::msg_error;

fn main() -> ExitCode {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tudu=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            msg_error!(Message::CommandFailed(format!("{:#}", error)));
            ExitCode::FAILURE
        }
    }
}
