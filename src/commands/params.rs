//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter names used across the
//! command modules, plus common argument constructors.

use clap::{Arg, ArgAction};

// Project commands
pub const COMMAND_DETAILS: &str = "details";
pub const COMMAND_SUMMARY: &str = "summary";
pub const COMMAND_DELETE_PROJECT: &str = "delete-project";

// Session commands
pub const COMMAND_SESSIONS: &str = "sessions";
pub const COMMAND_SESSION: &str = "session";
pub const COMMAND_CREATE_SESSION: &str = "create-session";
pub const COMMAND_STOP_SESSION: &str = "stop-session";
pub const COMMAND_PARTICIPANTS: &str = "participants";
pub const COMMAND_GENERATE_TOKEN: &str = "generate-token";
pub const COMMAND_LIVEKIT_INFO: &str = "livekit-info";

// Device commands
pub const COMMAND_REGISTER_DEVICE: &str = "register-device";
pub const COMMAND_DEVICES: &str = "devices";
pub const COMMAND_DEVICE: &str = "device";
pub const COMMAND_DELETE_DEVICE: &str = "delete-device";

// Connection parameters (global, with environment fallbacks)
pub const PARAMETER_SERVER_URL: &str = "server-url";
pub const PARAMETER_PROJECT_ID: &str = "project-id";
pub const PARAMETER_API_KEY: &str = "api-key";
pub const PARAMETER_API_SECRET: &str = "api-secret";

// Output parameters
pub const PARAMETER_JSON: &str = "json";
pub const PARAMETER_PRETTY: &str = "pretty";

// Entity parameters
pub const PARAMETER_SESSION_ID: &str = "SESSION_ID";
pub const PARAMETER_DEVICE_ID: &str = "DEVICE_ID";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_COMMENTS: &str = "comments";
pub const PARAMETER_GROUP: &str = "group";
pub const PARAMETER_EMPTY_TIMEOUT: &str = "empty-timeout";
pub const PARAMETER_MAX_PARTICIPANTS: &str = "max-participants";
pub const PARAMETER_AUTO_RECORDING: &str = "auto-recording";
pub const PARAMETER_DEVICE_GROUP: &str = "device-group";
pub const PARAMETER_IDENTITY: &str = "identity";

// Token grant flags
pub const PARAMETER_CAN_PUBLISH: &str = "can-publish";
pub const PARAMETER_CAN_SUBSCRIBE: &str = "can-subscribe";
pub const PARAMETER_CAN_PUBLISH_DATA: &str = "can-publish-data";
pub const PARAMETER_HIDDEN: &str = "hidden";
pub const PARAMETER_RECORDER: &str = "recorder";
pub const PARAMETER_ROOM_JOIN: &str = "room-join";
pub const PARAMETER_ROOM_ADMIN: &str = "room-admin";
pub const PARAMETER_ROOM_RECORD: &str = "room-record";

/// Create the `--json` output flag. Default output is plain text.
pub fn json_parameter() -> Arg {
    Arg::new(PARAMETER_JSON)
        .long(PARAMETER_JSON)
        .action(ArgAction::SetTrue)
        .help("Print the result as JSON instead of plain text")
}

/// Create the `--pretty` flag controlling JSON pretty-printing.
pub fn pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .requires(PARAMETER_JSON)
        .help("Pretty-print JSON output")
}

/// Positional session identifier.
pub fn session_id_parameter() -> Arg {
    Arg::new(PARAMETER_SESSION_ID)
        .required(true)
        .help("Identifier of the session")
}

/// Positional device identifier.
pub fn device_id_parameter() -> Arg {
    Arg::new(PARAMETER_DEVICE_ID)
        .required(true)
        .help("Identifier of the device")
}

pub fn server_url_parameter() -> Arg {
    Arg::new(PARAMETER_SERVER_URL)
        .long(PARAMETER_SERVER_URL)
        .global(true)
        .env(crate::configuration::ENV_API_URL)
        .help("Base URL of the SyncFlow API server")
}

pub fn project_id_parameter() -> Arg {
    Arg::new(PARAMETER_PROJECT_ID)
        .long(PARAMETER_PROJECT_ID)
        .global(true)
        .env(crate::configuration::ENV_PROJECT_ID)
        .help("Identifier of the project to operate on")
}

pub fn api_key_parameter() -> Arg {
    Arg::new(PARAMETER_API_KEY)
        .long(PARAMETER_API_KEY)
        .global(true)
        .env(crate::configuration::ENV_API_KEY)
        .help("API key used as the token issuer")
}

pub fn api_secret_parameter() -> Arg {
    Arg::new(PARAMETER_API_SECRET)
        .long(PARAMETER_API_SECRET)
        .global(true)
        .env(crate::configuration::ENV_API_SECRET)
        .hide_env_values(true)
        .help("API secret used to sign tokens")
}
