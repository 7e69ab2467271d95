use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    #[error("Digest is not valid base64url: {0}")]
    InvalidEncoding(String),

    #[error("Digest decodes to {found} bytes, expected {expected}")]
    InvalidLength { expected: usize, found: usize },
}
