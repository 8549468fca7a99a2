use sfcli::client::ClientError;
use sfcli::commands::create_cli_commands;
use sfcli::exit_codes::CliExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{execute_command, CliError};

/// Main entry point for the program
#[tokio::main]
async fn main() {
    // Initialize the logging subsystem
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse and execute the CLI command
    let matches = create_cli_commands();
    match execute_command(matches).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ::std::process::exit(exit_code(&e));
        }
    }
}

fn exit_code(error: &CliError) -> i32 {
    match error {
        CliError::UnsupportedSubcommand(_) => exitcode::USAGE,
        CliError::ConfigurationError(_) => exitcode::CONFIG,
        CliError::FormattingError(_) => exitcode::DATAERR,
        CliError::ClientError(client_error) => match client_error {
            ClientError::HttpError(_) => CliExitCode::NetworkError.code(),
            ClientError::UnexpectedResponse { .. } => CliExitCode::ApiError.code(),
            ClientError::TokenError(_) => CliExitCode::AuthError.code(),
            ClientError::JsonError(_) => CliExitCode::DataError.code(),
        },
    }
}
