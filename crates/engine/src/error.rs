use crate::chunk::ByteRange;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed measurement '{value}' at byte {offset} (chunk {chunk})")]
    MalformedNumber {
        value: String,
        offset: u64,
        chunk: ByteRange,
    },

    #[error("Record at byte {offset} has no ';' delimiter (chunk {chunk})")]
    MissingDelimiter { offset: u64, chunk: ByteRange },

    #[error("No line terminator within {window} bytes before offset {offset}; increase the scan window")]
    ChunkBoundary { offset: u64, window: u64 },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
