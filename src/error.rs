use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectPhotoError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("No image files found under: {0}")]
    NoImagesFound(String),

    #[error("Cannot compute statistics over an empty file list")]
    EmptyFileList,

    #[error("Invalid designator rule: {0}")]
    InvalidRule(String),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectPhotoError>;
