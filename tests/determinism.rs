//! Property tests for the primitive merkleization layer.

use lean_ssz::{bytes_root, chunk_of, list_root, merkleize, mix_in_length, Root};
use proptest::prelude::*;

fn chunk_vec(max_len: usize) -> impl Strategy<Value = Vec<Root>> {
    prop::collection::vec(any::<[u8; 32]>().prop_map(Root::from_bytes), 0..max_len)
}

proptest! {
    #[test]
    fn merkleize_is_deterministic(chunks in chunk_vec(33)) {
        prop_assert_eq!(merkleize(&chunks, None), merkleize(&chunks, None));
    }

    #[test]
    fn limit_padding_matches_materialised_zeros(
        chunks in chunk_vec(17),
        extra in 0usize..16,
    ) {
        let limit = chunks.len() + extra;
        let width = limit.max(1).next_power_of_two();
        let mut padded = chunks.clone();
        padded.resize(width, Root::ZERO);
        prop_assert_eq!(
            merkleize(&chunks, Some(limit)),
            merkleize(&padded, None)
        );
    }

    #[test]
    fn list_root_separates_lengths(
        chunks in chunk_vec(16),
    ) {
        prop_assume!(!chunks.is_empty());
        let shorter = &chunks[..chunks.len() - 1];
        prop_assert_ne!(
            list_root(&chunks, 64),
            list_root(shorter, 64)
        );
    }

    #[test]
    fn mix_in_length_never_fixes_the_root(root in any::<[u8; 32]>(), length in any::<u64>()) {
        let root = Root::from_bytes(root);
        prop_assert_ne!(mix_in_length(&root, length), root);
    }

    #[test]
    fn short_blobs_commit_as_identity(data in prop::collection::vec(any::<u8>(), 0..=32)) {
        let root = bytes_root(&data);
        prop_assert_eq!(&root.as_bytes()[..data.len()], data.as_slice());
        prop_assert!(root.as_bytes()[data.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn long_blobs_are_chunk_equivalent(data in prop::collection::vec(any::<u8>(), 33..200)) {
        let mut padded = data.clone();
        padded.resize(data.len().div_ceil(32) * 32, 0);
        let chunks: Vec<Root> = padded
            .chunks_exact(32)
            .map(|chunk| {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(chunk);
                Root::from_bytes(bytes)
            })
            .collect();
        prop_assert_eq!(bytes_root(&data), merkleize(&chunks, None));
    }

    #[test]
    fn scalar_chunks_are_little_endian(value in any::<u64>()) {
        let chunk = chunk_of(value);
        let mut le = [0u8; 8];
        le.copy_from_slice(&chunk.as_bytes()[..8]);
        prop_assert_eq!(u64::from_le_bytes(le), value);
        prop_assert!(chunk.as_bytes()[8..].iter().all(|&b| b == 0));
    }
}
