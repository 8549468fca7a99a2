//! The SyncFlow client library.
//!
//! This crate provides a typed client SDK for the SyncFlow project API
//! (sessions, participants, devices, tokens, project metadata) and the
//! command definitions for the `sfcli` binary built on top of it.
//!
//! # Modules
//!
//! - `client`: authenticated HTTP client over the project endpoints
//! - `commands`: CLI command parsing definitions
//! - `configuration`: connection configuration (flags or environment)
//! - `exit_codes`: process exit codes for the CLI
//! - `format`: JSON/text output formatting
//! - `model`: data models for SyncFlow entities (sessions, devices, tokens)
//! - `token`: self-issued HMAC-SHA256 API token handling

pub mod client;
pub mod commands;
pub mod configuration;
pub mod exit_codes;
pub mod format;
pub mod model;
pub mod token;
