//! # sha512t24u digests for VMC identifiers
//!
//! Every content-derived identifier in the VMC model ends in a sha512t24u digest:
//! the SHA-512 hash of the entity's canonical string, truncated to its first 24
//! bytes and encoded with URL-safe base64 without padding.
//!
//! ```rust
//! use vmc_digest::sha512t24u;
//!
//! let digest = sha512t24u("<Interval:44908683:44908684>");
//! assert_eq!(digest.len(), vmc_digest::ENCODED_DIGEST_LEN);
//! ```
//!
//! The hash primitive is linked in at build time, so there is no runtime
//! "algorithm unavailable" failure and no fallback digest.

pub mod errors;

use sha2::{Digest, Sha512};

pub use errors::DigestError;

/// Number of SHA-512 bytes kept by the truncated digest.
pub const DIGEST_BYTES: usize = 24;

/// Length of the base64url text of a truncated digest (24 bytes, no padding).
pub const ENCODED_DIGEST_LEN: usize = 32;

/// Processes a given input to compute its sha512t24u digest.
///
/// The input is hashed in chunks; callers are expected to pass the ASCII bytes of a
/// canonical string. Non-ASCII input is hashed as-is and is a caller bug, not
/// something this function checks.
///
/// # Arguments
///
/// * `input` - The input to be processed, as a string slice or byte slice.
///
/// # Returns
///
/// The 32 character base64url encoding of the first 24 bytes of SHA-512.
pub fn sha512t24u<T: AsRef<[u8]>>(input: T) -> String {
    let mut hasher = Sha512::new();
    for chunk in input.as_ref().chunks(1024) {
        hasher.update(chunk);
    }
    base64_url::encode(&hasher.finalize()[..DIGEST_BYTES])
}

/// Decode a sha512t24u digest back into its 24 raw bytes.
///
/// Fails if `encoded` is not valid base64url or does not decode to exactly
/// [`DIGEST_BYTES`] bytes.
pub fn decode_sha512t24u(encoded: &str) -> Result<[u8; DIGEST_BYTES], DigestError> {
    let bytes = base64_url::decode(encoded)
        .map_err(|e| DigestError::InvalidEncoding(format!("{encoded}: {e}")))?;
    let found = bytes.len();
    bytes.try_into().map_err(|_| DigestError::InvalidLength {
        expected: DIGEST_BYTES,
        found,
    })
}
