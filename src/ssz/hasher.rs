use sha2::{Digest, Sha256};

use crate::types::Root;

/// Computes the SHA-256 digest of an arbitrary byte buffer.
///
/// Used only for single-shot hashing; tree nodes always go through
/// [`hash_pair`] so the two-chunk framing stays uniform.
pub fn hash(data: &[u8]) -> Root {
    let digest: [u8; 32] = Sha256::digest(data).into();
    Root::from_bytes(digest)
}

/// Hashes the ordered concatenation of two 32-byte values.
///
/// This is the only node-combining rule in the tree: parents are always
/// `SHA-256(left || right)`.
pub fn hash_pair(a: &Root, b: &Root) -> Root {
    let mut hasher = Sha256::new();
    hasher.update(a.as_bytes());
    hasher.update(b.as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    Root::from_bytes(digest)
}
