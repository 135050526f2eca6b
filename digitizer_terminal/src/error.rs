use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("input closed")]
    InputClosed,
    #[error("image error: {0}")]
    Image(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TerminalError>;
