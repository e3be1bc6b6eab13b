/*!
Algorithm identifier definitions.

This module defines the closed set of IPsec transform algorithms the crate
recognizes and the class partition (encryption-only, authentication,
combined AEAD) that drives validation.
*/

/// Supported IPsec transform algorithms
///
/// The wire names are the Linux xfrm algorithm names used when configuring
/// a security association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmId {
    /// AES-CBC encryption
    CryptAesCbc,
    /// AES-CTR encryption (keyed with a trailing 32-bit nonce)
    CryptAesCtr,
    /// HMAC-MD5 authentication
    AuthHmacMd5,
    /// HMAC-SHA1 authentication
    AuthHmacSha1,
    /// HMAC-SHA256 authentication
    AuthHmacSha256,
    /// HMAC-SHA384 authentication
    AuthHmacSha384,
    /// HMAC-SHA512 authentication
    AuthHmacSha512,
    /// AES-XCBC authentication
    AuthAesXcbc,
    /// AES-CMAC authentication
    AuthAesCmac,
    /// AES-GCM combined mode (keyed with a trailing 32-bit salt)
    AuthCryptAesGcm,
    /// ChaCha20-Poly1305 combined mode (keyed with a trailing 32-bit salt)
    AuthCryptChaCha20Poly1305,
}

/// Class of an algorithm, determining whether a truncation length is required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmClass {
    /// Encryption-only; takes no truncation length
    Crypt,
    /// Authentication/integrity; requires a truncation length
    Auth,
    /// Combined AEAD; requires a truncation length
    AuthCrypt,
}

impl AlgorithmId {
    /// Every recognized algorithm, in declaration order
    pub const ALL: [AlgorithmId; 11] = [
        AlgorithmId::CryptAesCbc,
        AlgorithmId::CryptAesCtr,
        AlgorithmId::AuthHmacMd5,
        AlgorithmId::AuthHmacSha1,
        AlgorithmId::AuthHmacSha256,
        AlgorithmId::AuthHmacSha384,
        AlgorithmId::AuthHmacSha512,
        AlgorithmId::AuthAesXcbc,
        AlgorithmId::AuthAesCmac,
        AlgorithmId::AuthCryptAesGcm,
        AlgorithmId::AuthCryptChaCha20Poly1305,
    ];

    /// Get the xfrm name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmId::CryptAesCbc => "cbc(aes)",
            AlgorithmId::CryptAesCtr => "rfc3686(ctr(aes))",
            AlgorithmId::AuthHmacMd5 => "hmac(md5)",
            AlgorithmId::AuthHmacSha1 => "hmac(sha1)",
            AlgorithmId::AuthHmacSha256 => "hmac(sha256)",
            AlgorithmId::AuthHmacSha384 => "hmac(sha384)",
            AlgorithmId::AuthHmacSha512 => "hmac(sha512)",
            AlgorithmId::AuthAesXcbc => "xcbc(aes)",
            AlgorithmId::AuthAesCmac => "cmac(aes)",
            AlgorithmId::AuthCryptAesGcm => "rfc4106(gcm(aes))",
            AlgorithmId::AuthCryptChaCha20Poly1305 => "rfc7539esp(chacha20,poly1305)",
        }
    }

    /// Resolve an xfrm name to an algorithm identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Get the class of the algorithm
    pub fn class(&self) -> AlgorithmClass {
        match self {
            AlgorithmId::CryptAesCbc | AlgorithmId::CryptAesCtr => AlgorithmClass::Crypt,
            AlgorithmId::AuthHmacMd5
            | AlgorithmId::AuthHmacSha1
            | AlgorithmId::AuthHmacSha256
            | AlgorithmId::AuthHmacSha384
            | AlgorithmId::AuthHmacSha512
            | AlgorithmId::AuthAesXcbc
            | AlgorithmId::AuthAesCmac => AlgorithmClass::Auth,
            AlgorithmId::AuthCryptAesGcm | AlgorithmId::AuthCryptChaCha20Poly1305 => {
                AlgorithmClass::AuthCrypt
            }
        }
    }

    /// Whether this algorithm needs a truncation length to be usable
    pub fn requires_truncation_len(&self) -> bool {
        matches!(self.class(), AlgorithmClass::Auth | AlgorithmClass::AuthCrypt)
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for id in AlgorithmId::ALL {
            assert_eq!(AlgorithmId::from_name(id.name()), Some(id));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(AlgorithmId::from_name("rot13"), None);
        assert_eq!(AlgorithmId::from_name(""), None);
        assert_eq!(AlgorithmId::from_name("CBC(AES)"), None);
    }

    #[test]
    fn test_class_partition() {
        let crypt = AlgorithmId::ALL
            .iter()
            .filter(|id| id.class() == AlgorithmClass::Crypt)
            .count();
        let auth = AlgorithmId::ALL
            .iter()
            .filter(|id| id.class() == AlgorithmClass::Auth)
            .count();
        let aead = AlgorithmId::ALL
            .iter()
            .filter(|id| id.class() == AlgorithmClass::AuthCrypt)
            .count();
        assert_eq!(crypt + auth + aead, AlgorithmId::ALL.len());
        assert_eq!(crypt, 2);
        assert_eq!(auth, 7);
        assert_eq!(aead, 2);
    }

    #[test]
    fn test_truncation_required_matches_class() {
        for id in AlgorithmId::ALL {
            assert_eq!(
                id.requires_truncation_len(),
                id.class() != AlgorithmClass::Crypt,
                "{id}"
            );
        }
    }
}
