use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] profitgrid_core::ValidationError),

    #[error(transparent)]
    Session(#[from] profitgrid_core::SessionError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Session(_) => 10,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
