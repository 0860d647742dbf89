//! Truncating hash used for log content and log commitments.

use sha2::{Digest, Sha256};

/// Width of every digest in this crate.
pub const DIGEST_LENGTH: usize = 32;

/// SHA-256 with the leading byte cleared.
///
/// The circuits consume digests as field elements, so the output is reduced
/// to 248 bits to fit the field-element domain. Clearing the first byte of
/// the big-endian digest is the exact truncation the circuits apply; both
/// sides must agree bit-for-bit.
pub fn sha256_trunc(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut digest: [u8; DIGEST_LENGTH] = Sha256::digest(data).into();
    digest[0] = 0;
    digest
}
