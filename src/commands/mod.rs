//! CLI command definitions and argument parsing.
//!
//! This module defines the command-line interface for the SyncFlow CLI using
//! the clap builder API. Subcommands are flat: each one maps onto exactly one
//! client method. Connection parameters are global and fall back to the
//! `SYNCFLOW_*` environment variables.

use clap::{ArgMatches, Command};

pub mod device;
pub mod params;
pub mod project;
pub mod session;

pub use params::{
    COMMAND_CREATE_SESSION, COMMAND_DELETE_DEVICE, COMMAND_DELETE_PROJECT, COMMAND_DETAILS,
    COMMAND_DEVICE, COMMAND_DEVICES, COMMAND_GENERATE_TOKEN, COMMAND_LIVEKIT_INFO,
    COMMAND_PARTICIPANTS, COMMAND_REGISTER_DEVICE, COMMAND_SESSION, COMMAND_SESSIONS,
    COMMAND_STOP_SESSION, COMMAND_SUMMARY, PARAMETER_API_KEY, PARAMETER_API_SECRET,
    PARAMETER_JSON, PARAMETER_PRETTY, PARAMETER_PROJECT_ID, PARAMETER_SERVER_URL,
};

/// Build the root command with all subcommands attached.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::server_url_parameter())
        .arg(params::project_id_parameter())
        .arg(params::api_key_parameter())
        .arg(params::api_secret_parameter())
        .subcommand(project::details_command())
        .subcommand(project::summary_command())
        .subcommand(project::delete_project_command())
        .subcommand(session::sessions_command())
        .subcommand(session::session_command())
        .subcommand(session::create_session_command())
        .subcommand(session::stop_session_command())
        .subcommand(session::participants_command())
        .subcommand(session::generate_token_command())
        .subcommand(session::livekit_info_command())
        .subcommand(device::register_device_command())
        .subcommand(device::devices_command())
        .subcommand(device::device_command())
        .subcommand(device::delete_device_command())
}

/// Parse the process arguments against the CLI definition.
pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn sessions_accepts_json_flag() {
        let matches = build_cli()
            .try_get_matches_from(vec!["sfcli", "sessions", "--json"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, COMMAND_SESSIONS);
        assert!(sub.get_flag(PARAMETER_JSON));
    }

    #[test]
    fn pretty_requires_json() {
        let result = build_cli().try_get_matches_from(vec!["sfcli", "sessions", "--pretty"]);
        assert!(result.is_err());
    }

    #[test]
    fn generate_token_requires_identity() {
        let result = build_cli().try_get_matches_from(vec!["sfcli", "generate-token", "s1"]);
        assert!(result.is_err());
    }
}
