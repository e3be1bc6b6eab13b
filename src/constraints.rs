/*!
Per-algorithm cryptographic constraints.

Key-length sets and truncation-length bounds for every recognized
algorithm. Both lookups are total over [`AlgorithmId`], so an out-of-table
query cannot be expressed: the enum is the recognized universe.
*/

use crate::algorithm::AlgorithmId;

/// Permitted key bit-lengths for one algorithm
///
/// Membership is exact; no rounding or range interpretation. For AES-CTR,
/// AES-GCM and ChaCha20-Poly1305 the listed lengths include the trailing
/// 32-bit nonce/salt carried inside the key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyConstraint {
    allowed_bits: &'static [u32],
}

impl KeyConstraint {
    /// The discrete set of permitted key lengths, in bits
    pub fn allowed_bits(&self) -> &'static [u32] {
        self.allowed_bits
    }

    /// Check whether a key bit-length is permitted
    pub fn permits(&self, key_len_bits: u32) -> bool {
        self.allowed_bits.contains(&key_len_bits)
    }
}

/// Permitted truncation-length range for an auth or AEAD algorithm,
/// inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationConstraint {
    min_bits: u32,
    max_bits: u32,
}

impl TruncationConstraint {
    /// Minimum permitted truncation length in bits
    pub fn min_bits(&self) -> u32 {
        self.min_bits
    }

    /// Maximum permitted truncation length in bits
    pub fn max_bits(&self) -> u32 {
        self.max_bits
    }

    /// Check whether a truncation bit-length is within bounds
    pub fn permits(&self, truncation_len_bits: u32) -> bool {
        (self.min_bits..=self.max_bits).contains(&truncation_len_bits)
    }
}

/// Get the key-length constraint for an algorithm
pub fn key_constraint(id: AlgorithmId) -> KeyConstraint {
    let allowed_bits: &'static [u32] = match id {
        AlgorithmId::CryptAesCbc => &[128, 192, 256],
        AlgorithmId::CryptAesCtr => &[160, 224, 288],
        AlgorithmId::AuthHmacMd5 => &[128],
        AlgorithmId::AuthHmacSha1 => &[160],
        AlgorithmId::AuthHmacSha256 => &[256],
        AlgorithmId::AuthHmacSha384 => &[384],
        AlgorithmId::AuthHmacSha512 => &[512],
        AlgorithmId::AuthAesXcbc => &[128],
        AlgorithmId::AuthAesCmac => &[128],
        AlgorithmId::AuthCryptAesGcm => &[160, 224, 288],
        AlgorithmId::AuthCryptChaCha20Poly1305 => &[288],
    };
    KeyConstraint { allowed_bits }
}

/// Get the truncation-length constraint for an algorithm
///
/// `None` exactly for encryption-only algorithms, which take no truncation
/// length.
pub fn truncation_constraint(id: AlgorithmId) -> Option<TruncationConstraint> {
    let (min_bits, max_bits) = match id {
        AlgorithmId::CryptAesCbc | AlgorithmId::CryptAesCtr => return None,
        AlgorithmId::AuthHmacMd5 => (96, 128),
        AlgorithmId::AuthHmacSha1 => (96, 160),
        AlgorithmId::AuthHmacSha256 => (96, 256),
        AlgorithmId::AuthHmacSha384 => (192, 384),
        AlgorithmId::AuthHmacSha512 => (256, 512),
        AlgorithmId::AuthAesXcbc => (96, 96),
        AlgorithmId::AuthAesCmac => (96, 96),
        AlgorithmId::AuthCryptAesGcm => (64, 128),
        AlgorithmId::AuthCryptChaCha20Poly1305 => (128, 128),
    };
    Some(TruncationConstraint { min_bits, max_bits })
}
