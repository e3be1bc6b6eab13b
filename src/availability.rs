/*!
Platform availability of IPsec transform algorithms.

Every algorithm carries the minimum vendor API level at which a platform
build must support it. Below that level the algorithm is optional and only
becomes available when the platform's configuration allow-lists it. All
computations here are pure functions of the caller-supplied API level and
allow-list over the static tables; reading the underlying system property
and configuration resource belongs to the injected collaborators.
*/

use std::collections::HashSet;

use crate::algorithm::AlgorithmId;
use crate::constants::{LATEST_VENDOR_API_LEVEL, api_levels};

/// Source of the platform's vendor API level
///
/// Models the `ro.vendor.api_level` system property. A single-method seam
/// so the capability query stays testable without a real platform; no
/// caching happens on this side of the boundary.
pub trait VendorApiLevelSource {
    /// The vendor API level of the running build
    fn vendor_api_level(&self) -> i32;
}

/// A platform reporting no explicit vendor API level, treated as "latest"
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestVendorApiLevel;

impl VendorApiLevelSource for LatestVendorApiLevel {
    fn vendor_api_level(&self) -> i32 {
        LATEST_VENDOR_API_LEVEL
    }
}

/// Source of the platform's optional-algorithm allow-list
///
/// Models the `config_optionalIpSecAlgorithms` string-array resource.
pub trait OptionalAlgorithmSource {
    /// Raw algorithm names the platform explicitly enables below their
    /// mandatory API level
    fn optional_ipsec_algorithms(&self) -> Vec<String>;
}

/// Minimum vendor API level at which an algorithm is mandatory-supported
pub fn required_first_api_level(id: AlgorithmId) -> i32 {
    match id {
        AlgorithmId::CryptAesCbc
        | AlgorithmId::AuthHmacMd5
        | AlgorithmId::AuthHmacSha1
        | AlgorithmId::AuthHmacSha256
        | AlgorithmId::AuthHmacSha384
        | AlgorithmId::AuthHmacSha512
        | AlgorithmId::AuthCryptAesGcm => api_levels::BASE_SET,
        AlgorithmId::CryptAesCtr
        | AlgorithmId::AuthAesXcbc
        | AlgorithmId::AuthAesCmac
        | AlgorithmId::AuthCryptChaCha20Poly1305 => api_levels::EXTENDED_SET,
    }
}

/// Algorithms a build at the given vendor API level must support
pub fn mandatory_set(vendor_api_level: i32) -> HashSet<AlgorithmId> {
    AlgorithmId::ALL
        .iter()
        .copied()
        .filter(|&id| required_first_api_level(id) <= vendor_api_level)
        .collect()
}

/// Algorithms that are optional at the given vendor API level
///
/// The complement of [`mandatory_set`] within the recognized universe.
pub fn optional_candidates(vendor_api_level: i32) -> HashSet<AlgorithmId> {
    AlgorithmId::ALL
        .iter()
        .copied()
        .filter(|&id| required_first_api_level(id) > vendor_api_level)
        .collect()
}

/// Algorithms supported at the given vendor API level with the given
/// allow-list: the mandatory set plus every allow-listed optional candidate
///
/// Allow-list names outside the recognized universe are dropped; the
/// result can never grow beyond [`AlgorithmId::ALL`].
pub fn supported_set(
    vendor_api_level: i32,
    optional_allow_list: &HashSet<String>,
) -> HashSet<AlgorithmId> {
    let mut supported = mandatory_set(vendor_api_level);
    for name in optional_allow_list {
        match AlgorithmId::from_name(name) {
            Some(id) => {
                supported.insert(id);
            }
            None => {
                tracing::debug!(name = %name, "ignoring unrecognized optional algorithm");
            }
        }
    }
    supported
}

/// Read the optional-algorithm allow-list from the configuration
/// collaborator and compute the supported algorithm names for the given
/// vendor API level
pub fn load_algos(
    config: &impl OptionalAlgorithmSource,
    vendor_api_level: i32,
) -> HashSet<String> {
    let allow_list: HashSet<String> = config.optional_ipsec_algorithms().into_iter().collect();
    supported_set(vendor_api_level, &allow_list)
        .into_iter()
        .map(|id| id.name().to_string())
        .collect()
}

/// Compute the supported algorithm names for the build described by the
/// given collaborators
///
/// Recomputed on every call; nothing is cached between calls.
pub fn get_supported_algorithms(
    props: &impl VendorApiLevelSource,
    config: &impl OptionalAlgorithmSource,
) -> HashSet<String> {
    load_algos(config, props.vendor_api_level())
}
