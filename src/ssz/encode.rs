use crate::types::Root;

use super::merkleize::merkleize;

/// Encodes a 64-bit scalar as a leaf chunk: little-endian bytes in the low
/// eight positions, the remaining 24 bytes zero.
pub fn chunk_of(value: u64) -> Root {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&value.to_le_bytes());
    Root::from_bytes(bytes)
}

/// Hash-tree-root of a fixed-length byte blob.
///
/// Blobs of at most 32 bytes are zero-padded into a single chunk and
/// returned directly, with no hashing pass; longer blobs are split into
/// 32-byte chunks (last chunk zero-padded) and Merkleized with pure
/// power-of-two padding. The identity rule for short blobs is part of the
/// bit-exactness contract and must not be "fixed" into a hash.
pub fn bytes_root(data: &[u8]) -> Root {
    if data.len() <= 32 {
        let mut chunk = [0u8; 32];
        chunk[..data.len()].copy_from_slice(data);
        return Root::from_bytes(chunk);
    }
    let chunks: Vec<Root> = data
        .chunks(32)
        .map(|piece| {
            let mut chunk = [0u8; 32];
            chunk[..piece.len()].copy_from_slice(piece);
            Root::from_bytes(chunk)
        })
        .collect();
    merkleize(&chunks, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_chunk_is_little_endian() {
        let chunk = chunk_of(100);
        let mut expected = [0u8; 32];
        expected[0] = 100;
        assert_eq!(chunk.as_bytes(), &expected);

        let chunk = chunk_of(0x0102_0304_0506_0708);
        assert_eq!(&chunk.as_bytes()[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(chunk.as_bytes()[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn short_blob_is_identity_padded() {
        let root = bytes_root(&[1, 2, 3, 4]);
        let mut expected = [0u8; 32];
        expected[..4].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(root.as_bytes(), &expected);
    }

    #[test]
    fn exactly_32_bytes_is_identity() {
        let data = [0xAAu8; 32];
        assert_eq!(bytes_root(&data).into_bytes(), data);
    }

    #[test]
    fn long_blob_is_merkleized() {
        let data: Vec<u8> = (0u8..64).collect();
        let mut left = [0u8; 32];
        left.copy_from_slice(&data[..32]);
        let mut right = [0u8; 32];
        right.copy_from_slice(&data[32..]);
        assert_eq!(
            bytes_root(&data),
            merkleize(&[Root::from_bytes(left), Root::from_bytes(right)], None)
        );
    }

    #[test]
    fn trailing_chunk_is_zero_padded() {
        // 33 bytes: the second chunk holds one byte and 31 zeros.
        let mut data = vec![0x11u8; 33];
        data[32] = 0x22;
        let mut right = [0u8; 32];
        right[0] = 0x22;
        assert_eq!(
            bytes_root(&data),
            merkleize(
                &[Root::from_bytes([0x11; 32]), Root::from_bytes(right)],
                None
            )
        );
    }
}
