//! Session command definitions.
//!
//! Commands for creating, inspecting, and stopping sessions, and for minting
//! per-session participant tokens.

use crate::commands::params::{
    json_parameter, pretty_parameter, session_id_parameter, COMMAND_CREATE_SESSION,
    COMMAND_GENERATE_TOKEN, COMMAND_LIVEKIT_INFO, COMMAND_PARTICIPANTS, COMMAND_SESSION,
    COMMAND_SESSIONS, COMMAND_STOP_SESSION, PARAMETER_AUTO_RECORDING, PARAMETER_CAN_PUBLISH,
    PARAMETER_CAN_PUBLISH_DATA, PARAMETER_CAN_SUBSCRIBE, PARAMETER_COMMENTS,
    PARAMETER_DEVICE_GROUP, PARAMETER_EMPTY_TIMEOUT, PARAMETER_HIDDEN, PARAMETER_IDENTITY,
    PARAMETER_MAX_PARTICIPANTS, PARAMETER_NAME, PARAMETER_RECORDER, PARAMETER_ROOM_ADMIN,
    PARAMETER_ROOM_JOIN, PARAMETER_ROOM_RECORD,
};
use clap::{Arg, ArgAction, Command};

pub fn sessions_command() -> Command {
    Command::new(COMMAND_SESSIONS)
        .about("List all sessions in the project")
        .visible_alias("ls")
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn session_command() -> Command {
    Command::new(COMMAND_SESSION)
        .about("Show a single session")
        .arg(session_id_parameter())
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn create_session_command() -> Command {
    Command::new(COMMAND_CREATE_SESSION)
        .about("Create a new session")
        .arg(
            Arg::new(PARAMETER_NAME)
                .long(PARAMETER_NAME)
                .help("Name of the session"),
        )
        .arg(
            Arg::new(PARAMETER_COMMENTS)
                .long(PARAMETER_COMMENTS)
                .help("Comments attached to the session"),
        )
        .arg(
            Arg::new(PARAMETER_EMPTY_TIMEOUT)
                .long(PARAMETER_EMPTY_TIMEOUT)
                .value_parser(clap::value_parser!(i64))
                .help("Seconds an empty room stays alive"),
        )
        .arg(
            Arg::new(PARAMETER_MAX_PARTICIPANTS)
                .long(PARAMETER_MAX_PARTICIPANTS)
                .value_parser(clap::value_parser!(i64))
                .help("Maximum number of participants"),
        )
        .arg(
            Arg::new(PARAMETER_AUTO_RECORDING)
                .long(PARAMETER_AUTO_RECORDING)
                .action(ArgAction::SetTrue)
                .help("Start recording as soon as the session begins"),
        )
        .arg(
            Arg::new(PARAMETER_DEVICE_GROUP)
                .long(PARAMETER_DEVICE_GROUP)
                .action(ArgAction::Append)
                .help("Device group to attach (repeatable)"),
        )
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn stop_session_command() -> Command {
    Command::new(COMMAND_STOP_SESSION)
        .about("Stop a running session")
        .arg(session_id_parameter())
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn participants_command() -> Command {
    Command::new(COMMAND_PARTICIPANTS)
        .about("List the live participants of a session")
        .arg(session_id_parameter())
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn generate_token_command() -> Command {
    Command::new(COMMAND_GENERATE_TOKEN)
        .about("Generate a participant access token for a session")
        .arg(session_id_parameter())
        .arg(
            Arg::new(PARAMETER_IDENTITY)
                .long(PARAMETER_IDENTITY)
                .required(true)
                .help("Participant identity the token is issued for"),
        )
        .arg(
            Arg::new(PARAMETER_NAME)
                .long(PARAMETER_NAME)
                .help("Display name of the participant"),
        )
        .arg(grant_flag(PARAMETER_CAN_PUBLISH, "Allow publishing media"))
        .arg(grant_flag(PARAMETER_CAN_SUBSCRIBE, "Allow subscribing to media"))
        .arg(grant_flag(PARAMETER_CAN_PUBLISH_DATA, "Allow publishing data messages"))
        .arg(grant_flag(PARAMETER_HIDDEN, "Hide the participant from others"))
        .arg(grant_flag(PARAMETER_RECORDER, "Mark the participant as a recorder"))
        .arg(grant_flag(PARAMETER_ROOM_JOIN, "Allow joining the room"))
        .arg(grant_flag(PARAMETER_ROOM_ADMIN, "Grant room administration rights"))
        .arg(grant_flag(PARAMETER_ROOM_RECORD, "Allow recording the room"))
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn livekit_info_command() -> Command {
    Command::new(COMMAND_LIVEKIT_INFO)
        .about("Dump the raw LiveKit session info")
        .arg(session_id_parameter())
        .arg(json_parameter())
        .arg(pretty_parameter())
}

fn grant_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).action(ArgAction::SetTrue).help(help)
}
