//! Device command definitions.
//!
//! Commands for registering, listing, and removing project devices.

use crate::commands::params::{
    device_id_parameter, json_parameter, pretty_parameter, COMMAND_DELETE_DEVICE, COMMAND_DEVICE,
    COMMAND_DEVICES, COMMAND_REGISTER_DEVICE, PARAMETER_COMMENTS, PARAMETER_GROUP, PARAMETER_NAME,
};
use clap::{Arg, Command};

pub fn register_device_command() -> Command {
    Command::new(COMMAND_REGISTER_DEVICE)
        .about("Register a device with the project")
        .arg(
            Arg::new(PARAMETER_NAME)
                .long(PARAMETER_NAME)
                .required(true)
                .help("Name of the device"),
        )
        .arg(
            Arg::new(PARAMETER_GROUP)
                .long(PARAMETER_GROUP)
                .required(true)
                .help("Group the device belongs to"),
        )
        .arg(
            Arg::new(PARAMETER_COMMENTS)
                .long(PARAMETER_COMMENTS)
                .help("Comments about the device"),
        )
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn devices_command() -> Command {
    Command::new(COMMAND_DEVICES)
        .about("List all registered devices")
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn device_command() -> Command {
    Command::new(COMMAND_DEVICE)
        .about("Show a single device")
        .arg(device_id_parameter())
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn delete_device_command() -> Command {
    Command::new(COMMAND_DELETE_DEVICE)
        .about("Delete a registered device")
        .arg(device_id_parameter())
        .arg(json_parameter())
        .arg(pretty_parameter())
}
