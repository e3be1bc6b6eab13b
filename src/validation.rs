/*!
Constraint validation for candidate descriptors.

The checks run in a fixed order and short-circuit on the first failure:
name resolution, truncation-length requirement, key length, truncation
bounds. Validation is deterministic and side-effect-free; nothing is
silently corrected.
*/

use crate::algorithm::AlgorithmId;
use crate::constraints;
use crate::descriptor::IpSecAlgorithm;
use crate::error::{Result, ValidationError};

/// Validate a candidate (name, key, truncation length) triple and build the
/// descriptor
pub fn validate(
    name: &str,
    key: &[u8],
    truncation_len_bits: Option<u32>,
) -> Result<IpSecAlgorithm> {
    let id = AlgorithmId::from_name(name)
        .ok_or_else(|| ValidationError::InvalidName(name.to_string()))?;

    // Crypt-only algorithms take no truncation length; a supplied value is
    // ignored rather than rejected.
    let bounds = constraints::truncation_constraint(id);
    let truncation_len_bits = match bounds {
        None => None,
        Some(_) if truncation_len_bits.is_none() => {
            return Err(ValidationError::MissingTruncationLength(id.name()));
        }
        Some(_) => truncation_len_bits,
    };

    let key_len_bits = key.len() as u32 * 8;
    if !constraints::key_constraint(id).permits(key_len_bits) {
        return Err(ValidationError::InvalidKeyLength {
            algorithm: id.name(),
            key_len_bits,
        });
    }

    if let (Some(bounds), Some(bits)) = (bounds, truncation_len_bits) {
        if !bounds.permits(bits) {
            return Err(ValidationError::InvalidTruncationLength {
                algorithm: id.name(),
                truncation_len_bits: bits,
                min: bounds.min_bits(),
                max: bounds.max_bits(),
            });
        }
    }

    Ok(IpSecAlgorithm::from_parts(
        id,
        key.to_vec(),
        truncation_len_bits,
    ))
}
