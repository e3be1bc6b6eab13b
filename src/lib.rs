/*!
# ipsec-transform

Validated descriptors for IPsec security-association transforms.

## Overview

This library covers the configuration side of IPsec transforms:

- A closed registry of encryption, authentication, and combined AEAD
  algorithms with their per-algorithm key-length sets and
  truncation-length bounds
- A validating constructor that only ever yields descriptors satisfying
  those constraints
- Platform capability tracking: which algorithms are mandatory at a given
  vendor API level, and reconciliation with a configured
  optional-algorithm allow-list
- A deterministic binary wire form for handing descriptors across a
  process boundary

It deliberately performs no cryptography: computing ciphers and MACs,
generating keys, and managing security-association lifecycles belong to
the kernel or peer process receiving the descriptor.

## Example

```
use ipsec_transform::{codec, IpSecAlgorithm};

let algo = IpSecAlgorithm::new("rfc4106(gcm(aes))", &[0u8; 28], Some(128))?;
let wire = codec::encode(&algo);
assert_eq!(codec::decode(&wire).unwrap(), algo);
# Ok::<(), ipsec_transform::ValidationError>(())
```
*/

// Algorithm identity and class partition
pub mod algorithm;

// Platform availability gating
pub mod availability;

// Binary wire form
pub mod codec;

// Library-wide constants
pub mod constants;

// Per-algorithm key and truncation constraints
pub mod constraints;

// The validated descriptor value
pub mod descriptor;

// Error types
pub mod error;

// The validation pipeline behind the descriptor constructor
mod validation;

// Re-export commonly used types for convenience
pub use algorithm::{AlgorithmClass, AlgorithmId};
pub use availability::{
    LatestVendorApiLevel, OptionalAlgorithmSource, VendorApiLevelSource, get_supported_algorithms,
    load_algos,
};
pub use constants::{LATEST_VENDOR_API_LEVEL, WIRE_VERSION};
pub use constraints::{KeyConstraint, TruncationConstraint};
pub use descriptor::IpSecAlgorithm;
pub use error::{DecodeError, Result, ValidationError};
