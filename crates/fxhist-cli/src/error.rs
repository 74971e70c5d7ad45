use fxhist_core::LoadError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] fxhist_core::ValidationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Load(error) => match error {
                LoadError::UnresolvedInstrument { .. } => 3,
                LoadError::Transport { .. } => 4,
                LoadError::Parse { .. } => 5,
            },
            Self::Serialization(_) | Self::Csv(_) | Self::Io(_) => 10,
        }
    }
}
