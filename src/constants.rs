/*!
Constants for the IPsec transform descriptor library.
*/

/// Wire format version for encoded descriptors
pub const WIRE_VERSION: u8 = 0x01;

/// Vendor API level reported when the platform does not publish one,
/// meaning "latest": every algorithm is mandatory-supported.
pub const LATEST_VENDOR_API_LEVEL: i32 = 10000;

/// Platform milestones at which algorithm groups became mandatory
pub mod api_levels {
    /// First level with the base IPsec algorithm set (AES-CBC, the HMAC
    /// family, AES-GCM)
    pub const BASE_SET: i32 = 28;

    /// First level with the extended set (AES-CTR, AES-XCBC, AES-CMAC,
    /// ChaCha20-Poly1305)
    pub const EXTENDED_SET: i32 = 31;
}
