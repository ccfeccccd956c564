//! Per-type root functions for the domain schema.
//!
//! Every function here is a pure composition of the primitive layer:
//! collect the record's field roots in schema order, then Merkleize them as
//! a container, or Merkleize element roots up to a capacity limit and mix
//! in the length. Nothing is cached and nothing is mutated; each call is
//! independently reproducible.

use crate::params::SszLimits;
use crate::types::{
    AggregatedAttestation, Attestation, AttestationData, Bitlist, Bitvector, Block, BlockBody,
    BlockHeader, BlockWithAttestation, Checkpoint, Config, Epoch, Pubkey, Root, Signature,
    SignedBlockWithAttestation, Slot, State, Validator, ValidatorIndex,
};

use super::encode::{bytes_root, chunk_of};
use super::merkleize::{merkleize, mix_in_length, pack_bits};

/// Hash-tree-root for types whose commitment is fully determined by their
/// own value (including any limit they carry internally).
pub trait HashTreeRoot {
    /// Computes the canonical 32-byte root of this value.
    fn hash_tree_root(&self) -> Root;
}

/// Hash-tree-root for types with list-shaped fields whose capacity limits
/// are protocol configuration supplied by the caller.
pub trait HashTreeRootBounded {
    /// Computes the canonical 32-byte root of this value under the given
    /// capacity limits.
    fn hash_tree_root(&self, limits: &SszLimits) -> Root;
}

/// Merkleizes an ordered sequence of field roots as a container.
///
/// Zero fields yield the zero root and a single field passes through
/// unhashed, both per the general width rules of the merkleization engine.
pub fn container_root(field_roots: &[Root]) -> Root {
    merkleize(field_roots, None)
}

/// Root of a bounded list given its element roots: Merkleize up to the
/// capacity limit, then mix in the element count.
pub fn list_root(element_roots: &[Root], limit: usize) -> Root {
    mix_in_length(&merkleize(element_roots, Some(limit)), element_roots.len() as u64)
}

impl HashTreeRoot for Root {
    fn hash_tree_root(&self) -> Root {
        *self
    }
}

impl HashTreeRoot for u64 {
    fn hash_tree_root(&self) -> Root {
        chunk_of(*self)
    }
}

impl HashTreeRoot for Slot {
    fn hash_tree_root(&self) -> Root {
        chunk_of(self.0)
    }
}

impl HashTreeRoot for ValidatorIndex {
    fn hash_tree_root(&self) -> Root {
        chunk_of(self.0)
    }
}

impl HashTreeRoot for Epoch {
    fn hash_tree_root(&self) -> Root {
        chunk_of(self.0)
    }
}

impl HashTreeRoot for Pubkey {
    fn hash_tree_root(&self) -> Root {
        bytes_root(self.as_bytes())
    }
}

impl HashTreeRoot for Signature {
    fn hash_tree_root(&self) -> Root {
        bytes_root(self.as_bytes())
    }
}

impl HashTreeRoot for Bitvector {
    fn hash_tree_root(&self) -> Root {
        let chunks = pack_bits(self.len(), |i| self.get(i));
        merkleize(&chunks, Some(self.len().div_ceil(256)))
    }
}

impl HashTreeRoot for Bitlist {
    fn hash_tree_root(&self) -> Root {
        let chunks = pack_bits(self.len(), |i| self.get(i));
        let root = merkleize(&chunks, Some(self.limit().div_ceil(256)));
        mix_in_length(&root, self.len() as u64)
    }
}

impl HashTreeRoot for Checkpoint {
    fn hash_tree_root(&self) -> Root {
        container_root(&[self.root, self.slot.hash_tree_root()])
    }
}

impl HashTreeRoot for Validator {
    fn hash_tree_root(&self) -> Root {
        container_root(&[self.pubkey.hash_tree_root(), self.index.hash_tree_root()])
    }
}

impl HashTreeRoot for AttestationData {
    fn hash_tree_root(&self) -> Root {
        container_root(&[
            self.slot.hash_tree_root(),
            self.head.hash_tree_root(),
            self.target.hash_tree_root(),
            self.source.hash_tree_root(),
        ])
    }
}

impl HashTreeRoot for Attestation {
    fn hash_tree_root(&self) -> Root {
        container_root(&[
            self.validator_id.hash_tree_root(),
            self.data.hash_tree_root(),
        ])
    }
}

impl HashTreeRoot for AggregatedAttestation {
    fn hash_tree_root(&self) -> Root {
        // The only bounded field is the bitlist, which carries its own
        // declared limit.
        container_root(&[
            self.aggregation_bits.hash_tree_root(),
            self.data.hash_tree_root(),
        ])
    }
}

impl HashTreeRoot for BlockHeader {
    fn hash_tree_root(&self) -> Root {
        container_root(&[
            self.slot.hash_tree_root(),
            self.proposer_index.hash_tree_root(),
            self.parent_root,
            self.state_root,
            self.body_root,
        ])
    }
}

impl HashTreeRoot for Config {
    fn hash_tree_root(&self) -> Root {
        container_root(&[self.genesis_time.hash_tree_root()])
    }
}

impl HashTreeRootBounded for BlockBody {
    fn hash_tree_root(&self, limits: &SszLimits) -> Root {
        let attestation_roots: Vec<Root> = self
            .attestations
            .iter()
            .map(|attestation| attestation.hash_tree_root())
            .collect();
        container_root(&[list_root(&attestation_roots, limits.attestation_limit)])
    }
}

impl HashTreeRootBounded for Block {
    fn hash_tree_root(&self, limits: &SszLimits) -> Root {
        container_root(&[
            self.slot.hash_tree_root(),
            self.proposer_index.hash_tree_root(),
            self.parent_root,
            self.state_root,
            self.body.hash_tree_root(limits),
        ])
    }
}

impl HashTreeRootBounded for BlockWithAttestation {
    fn hash_tree_root(&self, limits: &SszLimits) -> Root {
        container_root(&[
            self.block.hash_tree_root(limits),
            self.proposer_attestation.hash_tree_root(),
        ])
    }
}

impl HashTreeRootBounded for SignedBlockWithAttestation {
    fn hash_tree_root(&self, limits: &SszLimits) -> Root {
        let signature_roots: Vec<Root> = self
            .signatures
            .iter()
            .map(|signature| signature.hash_tree_root())
            .collect();
        container_root(&[
            self.message.hash_tree_root(limits),
            list_root(&signature_roots, limits.validator_registry_limit),
        ])
    }
}

impl HashTreeRootBounded for State {
    fn hash_tree_root(&self, limits: &SszLimits) -> Root {
        let validator_roots: Vec<Root> = self
            .validators
            .iter()
            .map(|validator| validator.hash_tree_root())
            .collect();
        container_root(&[
            self.config.hash_tree_root(),
            self.slot.hash_tree_root(),
            self.latest_block_header.hash_tree_root(),
            self.latest_justified.hash_tree_root(),
            self.latest_finalized.hash_tree_root(),
            list_root(&self.historical_roots, limits.historical_roots_limit),
            self.justified_slots.hash_tree_root(),
            list_root(&validator_roots, limits.validator_registry_limit),
            list_root(&self.justification_roots, limits.historical_roots_limit),
            self.justification_votes.hash_tree_root(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssz::hasher::hash_pair;

    #[test]
    fn empty_container_is_zero_root() {
        assert_eq!(container_root(&[]), Root::ZERO);
    }

    #[test]
    fn single_field_container_is_the_field() {
        let field = Root::from_bytes([9u8; 32]);
        assert_eq!(container_root(&[field]), field);
    }

    #[test]
    fn two_field_container_is_one_pair_hash() {
        let a = Root::from_bytes([1u8; 32]);
        let b = Root::from_bytes([2u8; 32]);
        assert_eq!(container_root(&[a, b]), hash_pair(&a, &b));
    }

    #[test]
    fn scalar_roots_share_one_encoding() {
        assert_eq!(Slot(42).hash_tree_root(), 42u64.hash_tree_root());
        assert_eq!(ValidatorIndex(42).hash_tree_root(), 42u64.hash_tree_root());
        assert_eq!(Epoch(42).hash_tree_root(), 42u64.hash_tree_root());
    }

    #[test]
    fn root_commits_to_itself() {
        let root = Root::from_bytes([0x5A; 32]);
        assert_eq!(root.hash_tree_root(), root);
    }

    #[test]
    fn list_root_differs_from_bare_container() {
        let element = Root::from_bytes([3u8; 32]);
        assert_ne!(list_root(&[element], 4), container_root(&[element]));
    }
}
