use serde::{Deserialize, Serialize};

use super::bits::Bitlist;
use super::primitives::{Pubkey, Root, Signature, Slot, ValidatorIndex};

/// A (root, slot) pair identifying a block at a point in the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    pub root: Root,
    pub slot: Slot,
}

/// Registry entry binding a public key to its validator index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Validator {
    pub pubkey: Pubkey,
    pub index: ValidatorIndex,
}

/// The vote payload shared by all attestation variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttestationData {
    pub slot: Slot,
    pub head: Checkpoint,
    pub target: Checkpoint,
    pub source: Checkpoint,
}

/// A single validator's vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attestation {
    pub validator_id: ValidatorIndex,
    pub data: AttestationData,
}

/// An attestation carrying its (unverified) signature blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedAttestation {
    pub validator_id: ValidatorIndex,
    pub message: AttestationData,
    pub signature: Signature,
}

/// Votes from multiple validators over the same payload, with participation
/// recorded in a bitlist bounded by the validator registry limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedAttestation {
    pub aggregation_bits: Bitlist,
    pub data: AttestationData,
}

/// Summary of a block, with the body reduced to its root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeader {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

/// Payload carried by a block.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BlockBody {
    pub attestations: Vec<AggregatedAttestation>,
}

/// A full block including its body.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Block {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    pub body: BlockBody,
}

/// A block paired with its proposer's own attestation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BlockWithAttestation {
    pub block: Block,
    pub proposer_attestation: Attestation,
}

/// The signed outer envelope gossiped between nodes.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SignedBlockWithAttestation {
    pub message: BlockWithAttestation,
    pub signatures: Vec<Signature>,
}

/// Chain-level configuration committed into the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    pub genesis_time: u64,
}

/// Full consensus state.
///
/// Field order is part of the schema; reordering changes every state root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub config: Config,
    pub slot: Slot,
    pub latest_block_header: BlockHeader,
    pub latest_justified: Checkpoint,
    pub latest_finalized: Checkpoint,
    pub historical_roots: Vec<Root>,
    pub justified_slots: Bitlist,
    pub validators: Vec<Validator>,
    pub justification_roots: Vec<Root>,
    pub justification_votes: Bitlist,
}
