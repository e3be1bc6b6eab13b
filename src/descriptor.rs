/*!
The validated transform descriptor.
*/

use std::fmt;

use crate::algorithm::AlgorithmId;
use crate::error::Result;
use crate::validation;

/// A validated IPsec transform descriptor
///
/// Holds everything needed to configure one transform on a security
/// association: the algorithm, its key material, and (for auth and AEAD
/// algorithms) the integrity-check truncation length. Instances exist only
/// after passing constraint validation and are immutable afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct IpSecAlgorithm {
    id: AlgorithmId,
    key: Vec<u8>,
    truncation_len_bits: Option<u32>,
}

impl IpSecAlgorithm {
    /// Create a descriptor, validating the name, key length, and truncation
    /// length against the per-algorithm constraint tables
    ///
    /// Encryption-only algorithms ignore `truncation_len_bits`; auth and
    /// AEAD algorithms require it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipsec_transform::IpSecAlgorithm;
    ///
    /// let crypt = IpSecAlgorithm::new("cbc(aes)", &[0u8; 32], None)?;
    /// assert_eq!(crypt.truncation_len_bits(), None);
    ///
    /// let auth = IpSecAlgorithm::new("hmac(sha512)", &[0u8; 64], Some(256))?;
    /// assert_eq!(auth.truncation_len_bits(), Some(256));
    /// # Ok::<(), ipsec_transform::ValidationError>(())
    /// ```
    pub fn new(name: &str, key: &[u8], truncation_len_bits: Option<u32>) -> Result<Self> {
        validation::validate(name, key, truncation_len_bits)
    }

    /// Assemble a descriptor from already-checked parts
    pub(crate) fn from_parts(
        id: AlgorithmId,
        key: Vec<u8>,
        truncation_len_bits: Option<u32>,
    ) -> Self {
        Self {
            id,
            key,
            truncation_len_bits,
        }
    }

    /// The algorithm identifier
    pub fn id(&self) -> AlgorithmId {
        self.id
    }

    /// The xfrm name of the algorithm
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// The key material
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The truncation length in bits, absent for encryption-only algorithms
    pub fn truncation_len_bits(&self) -> Option<u32> {
        self.truncation_len_bits
    }
}

// Key material stays out of debug output.
impl fmt::Debug for IpSecAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IpSecAlgorithm")
            .field("id", &self.id)
            .field("key_len_bits", &(self.key.len() * 8))
            .field("truncation_len_bits", &self.truncation_len_bits)
            .finish()
    }
}
