#![forbid(unsafe_code)]

//! Canonical hash-tree-root engine for the lean consensus containers.
//!
//! This crate computes deterministic Merkle commitments over the
//! fixed-schema records of a proof-of-stake protocol: blocks,
//! attestations, validators, checkpoints and the full chain state. It is
//! the binary-commitment layer the rest of the protocol hangs off:
//! block signing, state-root verification and light-client proofs all
//! require bit-identical roots across independent implementations, so
//! every padding, ordering and encoding rule here is frozen.
//!
//! Two layers, leaves first:
//!
//! * the primitive layer in [`ssz`]: SHA-256 pair hashing, padded
//!   pairwise Merkleization up to optional capacity limits, virtual
//!   zero-subtree padding, length mixing, LSB-first bit packing and
//!   little-endian scalar chunks;
//! * the schema layer, also in [`ssz`]: one root function per domain
//!   type from [`types`], each a pure ordered composition of field roots.
//!
//! Capacity limits for bounded lists are protocol configuration, carried
//! in [`params::SszLimits`] and threaded explicitly into every bounded
//! computation. All calls are synchronous, allocation-transient and free
//! of shared mutable state; the crate is safe to use from any number of
//! threads without locking.
//!
//! Wire-format SSZ encoding/decoding and Merkle multiproofs are out of
//! scope: only the root reduction lives here.

pub mod params;
pub mod ssz;
pub mod types;
pub mod utils;

pub use params::{SszLimits, HISTORICAL_ROOTS_LIMIT, MAX_ATTESTATIONS, VALIDATOR_REGISTRY_LIMIT};
pub use ssz::{
    bytes_root, chunk_of, container_root, hash, hash_pair, list_root, merkleize, mix_in_length,
    pack_bits, HashTreeRoot, HashTreeRootBounded,
};
pub use types::{
    AggregatedAttestation, Attestation, AttestationData, BitfieldError, Bitlist, Bitvector, Block,
    BlockBody, BlockHeader, BlockWithAttestation, Checkpoint, Config, Epoch, Pubkey, Root,
    Signature, SignedAttestation, SignedBlockWithAttestation, Slot, State, Validator,
    ValidatorIndex,
};
