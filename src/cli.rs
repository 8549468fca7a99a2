//! Binary-side command dispatch.
//!
//! Resolves the connection configuration from the parsed arguments, builds a
//! [`ProjectClient`], and maps each subcommand onto one client call. Client
//! errors are not caught here; they bubble up to `main`, which exits with a
//! non-zero status.

use clap::ArgMatches;
use sfcli::client::{ClientError, ProjectClient};
use sfcli::commands::params::{
    PARAMETER_API_KEY, PARAMETER_API_SECRET, PARAMETER_AUTO_RECORDING, PARAMETER_CAN_PUBLISH,
    PARAMETER_CAN_PUBLISH_DATA, PARAMETER_CAN_SUBSCRIBE, PARAMETER_COMMENTS,
    PARAMETER_DEVICE_GROUP, PARAMETER_DEVICE_ID, PARAMETER_EMPTY_TIMEOUT, PARAMETER_GROUP,
    PARAMETER_HIDDEN, PARAMETER_IDENTITY, PARAMETER_JSON, PARAMETER_MAX_PARTICIPANTS,
    PARAMETER_NAME, PARAMETER_PRETTY, PARAMETER_PROJECT_ID, PARAMETER_RECORDER,
    PARAMETER_ROOM_ADMIN, PARAMETER_ROOM_JOIN, PARAMETER_ROOM_RECORD, PARAMETER_SERVER_URL,
    PARAMETER_SESSION_ID,
};
use sfcli::commands::{
    COMMAND_CREATE_SESSION, COMMAND_DELETE_DEVICE, COMMAND_DELETE_PROJECT, COMMAND_DETAILS,
    COMMAND_DEVICE, COMMAND_DEVICES, COMMAND_GENERATE_TOKEN, COMMAND_LIVEKIT_INFO,
    COMMAND_PARTICIPANTS, COMMAND_REGISTER_DEVICE, COMMAND_SESSION, COMMAND_SESSIONS,
    COMMAND_STOP_SESSION, COMMAND_SUMMARY,
};
use sfcli::configuration::{Configuration, ConfigurationError};
use sfcli::format::{Formattable, FormattingError, OutputFormat, OutputFormatOptions};
use sfcli::model::{CreateSessionRequest, RegisterDeviceRequest, TokenRequest, VideoGrants};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("undefined or unsupported subcommand {0:?}")]
    UnsupportedSubcommand(String),
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error(transparent)]
    FormattingError(#[from] FormattingError),
}

pub async fn execute_command(matches: ArgMatches) -> Result<(), CliError> {
    let configuration = resolve_configuration(&matches)?;
    let client = ProjectClient::new(&configuration)?;

    match matches.subcommand() {
        Some((COMMAND_DETAILS, sub_matches)) => {
            print_payload(&client.get_project_details().await?, sub_matches)
        }
        Some((COMMAND_SUMMARY, sub_matches)) => {
            print_payload(&client.summarize_project().await?, sub_matches)
        }
        Some((COMMAND_DELETE_PROJECT, sub_matches)) => {
            print_payload(&client.delete_project().await?, sub_matches)
        }
        Some((COMMAND_SESSIONS, sub_matches)) => {
            print_payload(&client.list_sessions().await?, sub_matches)
        }
        Some((COMMAND_SESSION, sub_matches)) => {
            let session_id = required(sub_matches, PARAMETER_SESSION_ID);
            print_payload(&client.list_session(session_id).await?, sub_matches)
        }
        Some((COMMAND_CREATE_SESSION, sub_matches)) => {
            let request = create_session_request(sub_matches);
            print_payload(&client.create_session(&request).await?, sub_matches)
        }
        Some((COMMAND_STOP_SESSION, sub_matches)) => {
            let session_id = required(sub_matches, PARAMETER_SESSION_ID);
            print_payload(&client.stop_session(session_id).await?, sub_matches)
        }
        Some((COMMAND_PARTICIPANTS, sub_matches)) => {
            let session_id = required(sub_matches, PARAMETER_SESSION_ID);
            print_payload(&client.list_participants(session_id).await?, sub_matches)
        }
        Some((COMMAND_GENERATE_TOKEN, sub_matches)) => {
            let session_id = required(sub_matches, PARAMETER_SESSION_ID);
            let request = token_request(sub_matches);
            print_payload(
                &client.generate_session_token(session_id, &request).await?,
                sub_matches,
            )
        }
        Some((COMMAND_LIVEKIT_INFO, sub_matches)) => {
            let session_id = required(sub_matches, PARAMETER_SESSION_ID);
            print_payload(&client.get_livekit_session_info(session_id).await?, sub_matches)
        }
        Some((COMMAND_REGISTER_DEVICE, sub_matches)) => {
            let request = RegisterDeviceRequest {
                name: required(sub_matches, PARAMETER_NAME).to_string(),
                group: required(sub_matches, PARAMETER_GROUP).to_string(),
                comments: optional(sub_matches, PARAMETER_COMMENTS),
            };
            print_payload(&client.register_device(&request).await?, sub_matches)
        }
        Some((COMMAND_DEVICES, sub_matches)) => {
            print_payload(&client.list_devices().await?, sub_matches)
        }
        Some((COMMAND_DEVICE, sub_matches)) => {
            let device_id = required(sub_matches, PARAMETER_DEVICE_ID);
            print_payload(&client.list_device(device_id).await?, sub_matches)
        }
        Some((COMMAND_DELETE_DEVICE, sub_matches)) => {
            let device_id = required(sub_matches, PARAMETER_DEVICE_ID);
            print_payload(&client.delete_device(device_id).await?, sub_matches)
        }
        Some((other, _)) => Err(CliError::UnsupportedSubcommand(other.to_string())),
        None => Err(CliError::UnsupportedSubcommand(String::from("unknown"))),
    }
}

/// Build the configuration from the global connection arguments. Clap has
/// already merged in the `SYNCFLOW_*` environment fallbacks at parse time.
fn resolve_configuration(matches: &ArgMatches) -> Result<Configuration, ConfigurationError> {
    let server_url = connection_parameter(matches, PARAMETER_SERVER_URL)?;
    let server_url = Url::parse(&server_url)?;

    Configuration::builder()
        .server_url(server_url)
        .project_id(connection_parameter(matches, PARAMETER_PROJECT_ID)?)
        .api_key(connection_parameter(matches, PARAMETER_API_KEY)?)
        .api_secret(connection_parameter(matches, PARAMETER_API_SECRET)?)
        .build()
}

fn connection_parameter(matches: &ArgMatches, name: &str) -> Result<String, ConfigurationError> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| ConfigurationError::MissingRequiredPropertyValue {
            name: name.to_string(),
        })
}

fn create_session_request(sub_matches: &ArgMatches) -> CreateSessionRequest {
    CreateSessionRequest {
        name: optional(sub_matches, PARAMETER_NAME),
        comments: optional(sub_matches, PARAMETER_COMMENTS),
        empty_timeout: sub_matches.get_one::<i64>(PARAMETER_EMPTY_TIMEOUT).copied(),
        max_participants: sub_matches.get_one::<i64>(PARAMETER_MAX_PARTICIPANTS).copied(),
        auto_recording: flag(sub_matches, PARAMETER_AUTO_RECORDING),
        device_groups: sub_matches
            .get_many::<String>(PARAMETER_DEVICE_GROUP)
            .map(|groups| groups.cloned().collect()),
    }
}

fn token_request(sub_matches: &ArgMatches) -> TokenRequest {
    let video_grants = VideoGrants {
        can_publish: flag(sub_matches, PARAMETER_CAN_PUBLISH),
        can_subscribe: flag(sub_matches, PARAMETER_CAN_SUBSCRIBE),
        can_publish_data: flag(sub_matches, PARAMETER_CAN_PUBLISH_DATA),
        hidden: flag(sub_matches, PARAMETER_HIDDEN),
        recorder: flag(sub_matches, PARAMETER_RECORDER),
        room_join: flag(sub_matches, PARAMETER_ROOM_JOIN),
        room_admin: flag(sub_matches, PARAMETER_ROOM_ADMIN),
        room_record: flag(sub_matches, PARAMETER_ROOM_RECORD),
        ..Default::default()
    };

    TokenRequest {
        identity: required(sub_matches, PARAMETER_IDENTITY).to_string(),
        name: optional(sub_matches, PARAMETER_NAME),
        video_grants: Some(video_grants),
    }
}

// unwraps on required arguments are safe; clap rejects the command line first
fn required<'a>(sub_matches: &'a ArgMatches, name: &str) -> &'a str {
    sub_matches.get_one::<String>(name).unwrap().as_str()
}

fn optional(sub_matches: &ArgMatches, name: &str) -> Option<String> {
    sub_matches.get_one::<String>(name).cloned()
}

/// A grant flag left unset stays absent from the payload so the server keeps
/// its own default.
fn flag(sub_matches: &ArgMatches, name: &str) -> Option<bool> {
    if sub_matches.get_flag(name) {
        Some(true)
    } else {
        None
    }
}

fn print_payload<T: Formattable>(payload: &T, sub_matches: &ArgMatches) -> Result<(), CliError> {
    let format = output_format(sub_matches);
    println!("{}", payload.format(&format)?.trim_end());
    Ok(())
}

fn output_format(sub_matches: &ArgMatches) -> OutputFormat {
    if sub_matches.get_flag(PARAMETER_JSON) {
        OutputFormat::Json(OutputFormatOptions {
            pretty: sub_matches.get_flag(PARAMETER_PRETTY),
        })
    } else {
        OutputFormat::Text
    }
}
