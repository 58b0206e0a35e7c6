use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(duck_assets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(duck_assets::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
