/*!
Error handling for IPsec transform descriptors.
*/

use thiserror::Error;

/// Result type for descriptor validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Error type for descriptor construction
///
/// Each constraint violation is reported as its own variant so callers
/// (and tests) can tell the failure kinds apart. Validation never
/// partially constructs a descriptor: the first failed check wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Algorithm name is not in the recognized universe
    #[error("unrecognized algorithm name: {0:?}")]
    InvalidName(String),

    /// Auth or AEAD algorithm constructed without a truncation length
    #[error("{0} requires a truncation length")]
    MissingTruncationLength(&'static str),

    /// Key bit-length is not in the permitted set for the algorithm
    #[error("invalid key length {key_len_bits} bits for {algorithm}")]
    InvalidKeyLength {
        /// Algorithm name
        algorithm: &'static str,
        /// Supplied key length in bits
        key_len_bits: u32,
    },

    /// Truncation length is outside the permitted range for the algorithm
    #[error(
        "invalid truncation length {truncation_len_bits} bits for {algorithm} \
         (permitted range {min}..={max})"
    )]
    InvalidTruncationLength {
        /// Algorithm name
        algorithm: &'static str,
        /// Supplied truncation length in bits
        truncation_len_bits: u32,
        /// Minimum permitted truncation length in bits
        min: u32,
        /// Maximum permitted truncation length in bits
        max: u32,
    },
}

/// Error type for wire-form decoding
///
/// Decoding trusts the semantic content of a well-formed encoding (key and
/// truncation bounds are not re-checked) but rejects anything structurally
/// inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Leading format version byte is not one this build understands
    #[error("unsupported wire format version: {0:#04x}")]
    UnsupportedVersion(u8),

    /// Encoding is truncated or internally inconsistent
    #[error("malformed encoding: {0}")]
    Malformed(&'static str),
}
