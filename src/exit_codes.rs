//! Custom exit codes for the SyncFlow CLI
//!
//! This module defines specific exit codes for different error conditions
//! to make scripting and automation easier.

/// Custom exit codes for the SyncFlow CLI
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// Data format error (65) - Response data was malformed
    DataError = 65,

    /// Configuration error (78) - Missing or invalid connection settings
    ConfigError = 78,

    /// Authentication error (100) - Token issuance or verification failure
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error status
    ApiError = 102,
}

impl CliExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Get descriptive message for the exit code
    pub fn message(&self) -> &'static str {
        match self {
            CliExitCode::Success => "Success",
            CliExitCode::UsageError => "Command line usage error",
            CliExitCode::DataError => "Data format error",
            CliExitCode::ConfigError => "Configuration error",
            CliExitCode::AuthError => "Authentication error",
            CliExitCode::NetworkError => "Network communication error",
            CliExitCode::ApiError => "Remote API error",
        }
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code.code()
    }
}
