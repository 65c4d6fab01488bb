//! Constants for BLS12-381 and BLS signatures

/// Size of a field element of the base field Fq in bytes
pub const BLS12_381_FIELD_SIZE: usize = 48;

/// Size of a scalar (element of Fr) in bytes
pub const BLS12_381_SCALAR_SIZE: usize = 32;

/// Size of a compressed G1 point in bytes
pub const G1_COMPRESSED_SIZE: usize = 48;

/// Size of an uncompressed G1 point in bytes
pub const G1_UNCOMPRESSED_SIZE: usize = 96;

/// Size of a compressed G2 point in bytes
pub const G2_COMPRESSED_SIZE: usize = 96;

/// Size of an uncompressed G2 point in bytes
pub const G2_UNCOMPRESSED_SIZE: usize = 192;

/// Size of a BLS public key (compressed G1) in bytes
pub const BLS_PUBLIC_KEY_SIZE: usize = G1_COMPRESSED_SIZE;

/// Size of a BLS signature (compressed G2) in bytes
pub const BLS_SIGNATURE_SIZE: usize = G2_COMPRESSED_SIZE;

/// Maximum size of a serialized secret key in bytes
///
/// Keys are reduced modulo the base field prime, so they fit in one
/// field element.
pub const BLS_SECRET_KEY_SIZE: usize = BLS12_381_FIELD_SIZE;

/// Size of a freshly generated secret key in bytes
pub const BLS_GENERATED_SECRET_KEY_SIZE: usize = BLS12_381_SCALAR_SIZE;

/// Bit length of the base field modulus
pub const G1_MAX_SCALAR_BITS: usize = 381;

/// Bit length of P² − 1, the order bound of the G2 coordinate field
pub const G2_MAX_SCALAR_BITS: usize = 762;

/// Window width used when a multiplication table is built implicitly
pub const DEFAULT_PRECOMPUTE_WINDOW: usize = 8;

/// Default domain separation tag for signatures (basic scheme, G2 signatures)
pub const DEFAULT_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Random-oracle hash-to-curve suite for G2
pub const G2_RO_SUITE: &str = "BLS12381G2_XMD:SHA-256_SSWU_RO_";

/// Non-uniform encode-to-curve suite for G2
pub const G2_NU_SUITE: &str = "BLS12381G2_XMD:SHA-256_SSWU_NU_";

/// Bytes drawn from the expander per field element (ceil((381 + 128) / 8))
pub const HASH_TO_FIELD_L: usize = 64;

/// Prefix used when hashing an oversized domain separation tag
pub const OVERSIZE_DST_PREFIX: &[u8] = b"H2C-OVERSIZE-DST-";

/// Largest domain separation tag accepted verbatim
pub const MAX_DST_LENGTH: usize = 255;
