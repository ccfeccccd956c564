#![cfg(feature = "parallel")]

//! The parallel tree reduction must be bit-identical to the sequential one.

use lean_ssz::utils::set_parallelism;
use lean_ssz::{
    list_root, merkleize, Bitlist, BlockHeader, Checkpoint, Config, HashTreeRootBounded, Pubkey,
    Root, Slot, SszLimits, State, Validator, ValidatorIndex,
};

fn chunks(count: usize) -> Vec<Root> {
    (0..count)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[..8].copy_from_slice(&(i as u64).to_le_bytes());
            Root::from_bytes(bytes)
        })
        .collect()
}

// All assertions live in one test so the global toggle is never contested
// by a concurrently running test in this binary.
#[test]
fn sequential_and_parallel_reductions_agree() {
    let inputs: Vec<Vec<Root>> = [1usize, 2, 3, 64, 127, 128, 1000]
        .into_iter()
        .map(chunks)
        .collect();

    let sequential: Vec<Root> = {
        let _guard = set_parallelism(false);
        inputs.iter().map(|c| merkleize(c, None)).collect()
    };
    let parallel: Vec<Root> = {
        let _guard = set_parallelism(true);
        inputs.iter().map(|c| merkleize(c, None)).collect()
    };
    assert_eq!(sequential, parallel);

    // Bounded lists reduce through the same code path.
    let leaves = chunks(500);
    let bounded_sequential = {
        let _guard = set_parallelism(false);
        list_root(&leaves, 4096)
    };
    let bounded_parallel = {
        let _guard = set_parallelism(true);
        list_root(&leaves, 4096)
    };
    assert_eq!(bounded_sequential, bounded_parallel);

    // A populated state exercises every composite path at once.
    let limits = SszLimits::devnet();
    let state = State {
        config: Config { genesis_time: 0 },
        slot: Slot(64),
        latest_block_header: BlockHeader::default(),
        latest_justified: Checkpoint::default(),
        latest_finalized: Checkpoint::default(),
        historical_roots: chunks(300),
        justified_slots: Bitlist::from_bits(&[true; 64], limits.historical_roots_limit).unwrap(),
        validators: (0..200)
            .map(|i| Validator {
                pubkey: Pubkey::default(),
                index: ValidatorIndex(i),
            })
            .collect(),
        justification_roots: chunks(40),
        justification_votes: Bitlist::from_bits(
            &[true; 128],
            limits.historical_roots_limit * limits.validator_registry_limit,
        )
        .unwrap(),
    };

    let state_sequential = {
        let _guard = set_parallelism(false);
        state.hash_tree_root(&limits)
    };
    let state_parallel = {
        let _guard = set_parallelism(true);
        state.hash_tree_root(&limits)
    };
    assert_eq!(state_sequential, state_parallel);
}
