use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Potentially malicious content detected: {0}")]
    MaliciousContent(String),

    #[error("HTML parse produced no fragment root")]
    MissingFragmentRoot,
}

pub type Result<T> = std::result::Result<T, ScrubError>;
