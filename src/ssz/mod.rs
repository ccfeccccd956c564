//! The merkleization engine: generic tree-hashing primitives and the
//! per-type root functions built from them.
//!
//! The module is layered leaves-first:
//!
//! * [`hasher`] – the SHA-256 chunk and pair-hash primitive, the only
//!   hashing rule in the tree.
//! * [`merkleize`] – padded pairwise reduction of 32-byte chunks up to an
//!   optional capacity limit, virtual zero-subtree padding, length mixing
//!   and LSB-first bit packing.
//! * [`encode`] – scalar and fixed-length byte-blob leaf encodings.
//! * [`roots`] – one root function per domain type, each a pure ordered
//!   composition of the layers below; capacity limits for bounded lists are
//!   threaded in via [`SszLimits`](crate::params::SszLimits).
//!
//! Every function is a pure map from caller-owned bytes to a 32-byte root:
//! no I/O, no shared state, no hidden configuration. Identical inputs yield
//! bit-identical roots across platforms and across sequential and parallel
//! execution.

mod encode;
mod hasher;
mod merkleize;
mod roots;

pub use encode::{bytes_root, chunk_of};
pub use hasher::{hash, hash_pair};
pub use merkleize::{merkleize, mix_in_length, pack_bits};
pub use roots::{container_root, list_root, HashTreeRoot, HashTreeRootBounded};
