//! Capacity limits for bounded collections.
//!
//! Every list-shaped field in the schema is bounded by a capacity limit
//! that is part of protocol configuration, not of the data: the same record
//! hashed under a different limit commits to a different tree width. The
//! limits are therefore threaded explicitly, by reference, into every root
//! computation that touches a bounded collection, never read from ambient
//! globals.

use serde::{Deserialize, Serialize};

/// Maximum number of entries in the historical-roots and
/// justification-roots lists.
pub const HISTORICAL_ROOTS_LIMIT: usize = 262_144;

/// Maximum size of the validator registry.
pub const VALIDATOR_REGISTRY_LIMIT: usize = 4_096;

/// Maximum number of aggregated attestations per block body.
pub const MAX_ATTESTATIONS: usize = 128;

/// Capacity limits threaded into every bounded root computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SszLimits {
    /// Bound on the historical-roots and justification-roots lists.
    pub historical_roots_limit: usize,
    /// Bound on the validator registry and per-block signature list.
    pub validator_registry_limit: usize,
    /// Bound on the attestation list in a block body.
    pub attestation_limit: usize,
}

impl SszLimits {
    /// The devnet limits used by the reference chain configuration.
    pub const fn devnet() -> Self {
        Self {
            historical_roots_limit: HISTORICAL_ROOTS_LIMIT,
            validator_registry_limit: VALIDATOR_REGISTRY_LIMIT,
            attestation_limit: MAX_ATTESTATIONS,
        }
    }
}

impl Default for SszLimits {
    fn default() -> Self {
        Self::devnet()
    }
}
