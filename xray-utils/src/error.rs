use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Could not read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    // The path is kept for logging only, users get the generic message.
    #[error("Incorrect structure of the Xray configuration file")]
    Structure { path: String },
    #[error("Incorrect structure of the Xray configuration file: missing address")]
    MissingAddress,
    #[error("Could not read interactive input: {0}")]
    Prompt(#[from] io::Error),
    #[error("Interactive input closed before a value was entered")]
    PromptClosed,
}

impl ExtractError {
    /// Errors caused by the document itself, as opposed to the terminal.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structure { .. } | Self::MissingAddress)
    }
}
