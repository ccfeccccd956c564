//! Domain records committed by the hash-tree-root engine.
//!
//! Everything here is an immutable value record: the engine constructs
//! nothing, owns nothing between calls, and treats every field as plain
//! bytes. Scalar fields use strong newtypes ([`Slot`], [`ValidatorIndex`],
//! [`Epoch`]) rather than bare integers so schema-level field identity
//! survives into the type system.

mod bits;
mod containers;
mod primitives;

pub use bits::{BitfieldError, Bitlist, Bitvector};
pub use containers::{
    AggregatedAttestation, Attestation, AttestationData, Block, BlockBody, BlockHeader,
    BlockWithAttestation, Checkpoint, Config, SignedAttestation, SignedBlockWithAttestation, State,
    Validator,
};
pub use primitives::{
    Epoch, HexOutput, Pubkey, Root, Signature, Slot, ValidatorIndex, PUBKEY_SIZE, SECONDS_PER_SLOT,
    SIGNATURE_SIZE,
};
