//! SHA-256 digests of generations.
//!
//! A digest covers the step values only, one byte per cell in row-major
//! order. Dimensions and tick are not hashed; compare those separately.

use firefly_arena::GenerationAccess;
use sha2::{Digest as _, Sha256};

/// A SHA-256 digest.
pub type Digest = [u8; 32];

/// Digest of raw row-major step bytes.
pub fn digest_bytes(bytes: &[u8]) -> Digest {
    Sha256::digest(bytes).into()
}

/// Digest of a generation's row-major step bytes.
pub fn generation_digest(generation: &dyn GenerationAccess) -> Digest {
    digest_bytes(&generation.to_bytes())
}

/// Lower-case hexadecimal rendering of a digest.
pub fn hex(digest: &Digest) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
