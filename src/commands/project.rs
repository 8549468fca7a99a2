//! Project command definitions.
//!
//! Commands operating on the project itself: details, summary, deletion.

use crate::commands::params::{
    json_parameter, pretty_parameter, COMMAND_DELETE_PROJECT, COMMAND_DETAILS, COMMAND_SUMMARY,
};
use clap::Command;

pub fn details_command() -> Command {
    Command::new(COMMAND_DETAILS)
        .about("Show the project details")
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn summary_command() -> Command {
    Command::new(COMMAND_SUMMARY)
        .about("Show aggregated project counters")
        .arg(json_parameter())
        .arg(pretty_parameter())
}

pub fn delete_project_command() -> Command {
    Command::new(COMMAND_DELETE_PROJECT)
        .about("Delete the project")
        .arg(json_parameter())
        .arg(pretty_parameter())
}
