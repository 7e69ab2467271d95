use thiserror::Error;

use vmc_digest::DigestError;

use crate::bundle::DanglingReference;

#[derive(Error, Debug)]
pub enum VmcError {
    #[error("Malformed identifier, expected `namespace:accession`: {0}")]
    MalformedIdentifier(String),

    #[error("Unknown identifier prefix: {0}")]
    UnknownPrefix(String),

    #[error("Unknown completeness `{0}`, expected UNKNOWN, PARTIAL or COMPLETE")]
    UnknownCompleteness(String),

    #[error("Identifier does not match content: expected {expected}, found {found}")]
    IdentifierMismatch { expected: String, found: String },

    #[error("Bundle has {} dangling reference(s)", .0.len())]
    DanglingReferences(Vec<DanglingReference>),

    #[error(transparent)]
    Digest(#[from] DigestError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type VmcResult<T> = std::result::Result<T, VmcError>;
