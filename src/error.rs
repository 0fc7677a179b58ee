use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read tags: {0}")]
    Tags(#[from] lofty::error::LoftyError),

    #[error("Failed to decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("Duration unknown: {0}")]
    UnknownDuration(String),

    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
