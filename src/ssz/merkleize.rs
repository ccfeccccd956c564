use crate::types::Root;

use super::encode::chunk_of;
use super::hasher::hash_pair;

/// Reduces a chunk sequence to a single root by padded pairwise hashing.
///
/// * Empty input with no (or a zero) limit yields the zero root.
/// * Empty input with a positive limit yields the root of a virtual all-zero
///   tree of width `next_power_of_two(limit)`, computed by repeated
///   self-hashing instead of materialising padding chunks.
/// * A width-1 tree returns its sole leaf unhashed.
/// * Otherwise chunks are right-padded with zero chunks to the tree width
///   and adjacent siblings are hashed bottom-up until one root remains.
///
/// # Panics
///
/// Passing more chunks than a positive `limit` is a caller contract
/// violation and aborts; silently widening the tree would corrupt the
/// commitment.
pub fn merkleize(chunks: &[Root], limit: Option<usize>) -> Root {
    let n = chunks.len();
    if n == 0 {
        return match limit {
            None | Some(0) => Root::ZERO,
            Some(limit) => zero_subtree_root(next_power_of_two(limit)),
        };
    }

    let width = match limit {
        Some(limit) if limit > 0 => {
            assert!(
                n <= limit,
                "merkleize: {n} chunks exceed declared limit {limit}"
            );
            next_power_of_two(limit)
        }
        _ => next_power_of_two(n),
    };

    if width == 1 {
        return chunks[0];
    }

    let mut level = Vec::with_capacity(width);
    level.extend_from_slice(chunks);
    level.resize(width, Root::ZERO);
    while level.len() > 1 {
        level = reduce_level(&level);
    }
    level[0]
}

/// Binds a collection commitment to its logical element count.
///
/// Two different-length sequences can Merkleize to the same padded-tree
/// root (identical prefix, trailing zero padding); mixing in the length
/// keeps them distinct.
pub fn mix_in_length(root: &Root, length: u64) -> Root {
    hash_pair(root, &chunk_of(length))
}

/// Packs `len` logical bits into chunk-aligned bytes.
///
/// Bit `i` lands in byte `i / 8` at position `i % 8`, least-significant bit
/// first. The byte buffer is zero-padded to a whole number of 32-byte
/// chunks; zero bits yield no chunks at all.
pub fn pack_bits<F>(len: usize, get: F) -> Vec<Root>
where
    F: Fn(usize) -> bool,
{
    if len == 0 {
        return Vec::new();
    }
    let byte_len = len.div_ceil(8);
    let mut data = vec![0u8; byte_len.div_ceil(32) * 32];
    for i in 0..len {
        if get(i) {
            data[i / 8] |= 1 << (i % 8);
        }
    }
    data.chunks_exact(32)
        .map(|chunk| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(chunk);
            Root::from_bytes(bytes)
        })
        .collect()
}

/// Hashes one tree level into the next.
///
/// Sibling hashes within a level are independent, so the pass may run in
/// parallel; results are positional and bit-identical either way.
fn reduce_level(level: &[Root]) -> Vec<Root> {
    let next_len = level.len() / 2;
    #[cfg(feature = "parallel")]
    if crate::utils::parallelism_enabled() {
        use rayon::prelude::*;
        let chunk = crate::utils::preferred_chunk_size(next_len);
        return (0..next_len)
            .into_par_iter()
            .with_min_len(chunk)
            .with_max_len(chunk)
            .map(|index| hash_pair(&level[index * 2], &level[index * 2 + 1]))
            .collect();
    }
    (0..next_len)
        .map(|index| hash_pair(&level[index * 2], &level[index * 2 + 1]))
        .collect()
}

fn next_power_of_two(x: usize) -> usize {
    if x <= 1 {
        1
    } else {
        x.next_power_of_two()
    }
}

/// Root of an all-zero tree of the given power-of-two width, computed by
/// `log2(width)` rounds of self-hashing.
fn zero_subtree_root(width: usize) -> Root {
    let mut node = Root::ZERO;
    let mut remaining = width;
    while remaining > 1 {
        node = hash_pair(&node, &node);
        remaining /= 2;
    }
    node
}
