//! CLI-level errors (wraps application and client errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::ClientError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error("{0}")]
    Usage(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Clap(e) => e.exit_code(),
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) => exitcode::DATAERR,
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::ConfigRead { .. }
                | ApplicationError::ConfigWrite { .. }
                | ApplicationError::OperationFailed { .. } => exitcode::IOERR,
            },
            CliError::Client(e) => match e {
                ClientError::MissingApiHost
                | ClientError::MissingAuth
                | ClientError::InvalidApiHost(_) => exitcode::CONFIG,
                ClientError::NotDeletable(_) | ClientError::InvalidEntityName(_) => {
                    exitcode::USAGE
                }
                ClientError::Transport { .. } => exitcode::UNAVAILABLE,
                ClientError::Status { status: 401 | 403, .. } => exitcode::NOPERM,
                ClientError::Status { status: 404, .. } => exitcode::NOINPUT,
                ClientError::Status { .. } => exitcode::UNAVAILABLE,
                ClientError::Decode { .. } => exitcode::DATAERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_auth_rejected_when_mapping_exit_code_then_noperm() {
        let err = CliError::Client(ClientError::Status {
            url: "https://example.test/api/v1/namespaces".into(),
            status: 401,
            message: "The supplied authentication is invalid".into(),
        });
        assert_eq!(err.exit_code(), exitcode::NOPERM);
    }

    #[test]
    fn given_missing_auth_when_mapping_exit_code_then_config() {
        assert_eq!(
            CliError::Client(ClientError::MissingAuth).exit_code(),
            exitcode::CONFIG
        );
    }

    #[test]
    fn given_invalid_key_when_converting_domain_error_then_dataerr() {
        let err: CliError = DomainError::InvalidKey("A B".into()).into();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }
}
