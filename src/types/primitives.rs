use core::fmt;

use serde::{Deserialize, Serialize};

/// Wall-clock seconds between consecutive slots.
pub const SECONDS_PER_SLOT: u64 = 4;

/// Byte width of a validator public key.
pub const PUBKEY_SIZE: usize = 52;

/// Byte width of an opaque post-quantum signature blob.
pub const SIGNATURE_SIZE: usize = 3116;

/// Canonical 32-byte root emitted by the hash-tree-root engine.
///
/// The same representation doubles as the leaf chunk of every Merkle tree
/// built by the engine, so raw 32-byte fields (parent roots, state roots)
/// are carried as `Root` values directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Root {
    bytes: [u8; 32],
}

impl Root {
    /// The reserved all-zero root used as the "empty" sentinel.
    pub const ZERO: Root = Root { bytes: [0u8; 32] };

    /// Constructs a root from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Consumes the root and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 32] {
        self.bytes
    }

    /// Returns `true` for the reserved zero root.
    pub fn is_zero(&self) -> bool {
        self.bytes == [0u8; 32]
    }

    /// Returns a helper that formats the root as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; 32]> for Root {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Root> for [u8; 32] {
    fn from(root: Root) -> Self {
        root.into_bytes()
    }
}

impl AsRef<[u8]> for Root {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Root(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a 32-byte root.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; 32]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Slot number within the chain.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Slot(pub u64);

/// Index of a validator within the registry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct ValidatorIndex(pub u64);

/// Epoch number derived from slots.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Epoch(pub u64);

impl From<u64> for Slot {
    fn from(value: u64) -> Self {
        Slot(value)
    }
}

impl From<u64> for ValidatorIndex {
    fn from(value: u64) -> Self {
        ValidatorIndex(value)
    }
}

impl From<u64> for Epoch {
    fn from(value: u64) -> Self {
        Epoch(value)
    }
}

impl Slot {
    /// Wall-clock timestamp at which this slot begins.
    pub fn to_timestamp(self, genesis_time: u64) -> u64 {
        genesis_time + self.0 * SECONDS_PER_SLOT
    }

    /// Slot containing the given timestamp; times before genesis clamp to
    /// slot zero.
    pub fn from_timestamp(time: u64, genesis_time: u64) -> Self {
        if time < genesis_time {
            return Slot(0);
        }
        Slot((time - genesis_time) / SECONDS_PER_SLOT)
    }

    /// Whether this slot is a valid justification candidate after the given
    /// finalized slot.
    ///
    /// The distance `delta` from the finalized slot qualifies when it is:
    ///
    /// 1. at most 5,
    /// 2. a perfect square (9, 16, 25, …), or
    /// 3. a pronic number `n * (n + 1)` (6, 12, 20, 30, …).
    ///
    /// For pronic `delta = n * (n + 1)` we have `4 * delta + 1 = (2n + 1)^2`,
    /// so the third rule checks that `4 * delta + 1` is an odd perfect square.
    pub fn is_justifiable_after(self, finalized: Slot) -> bool {
        if self < finalized {
            return false;
        }

        let delta = self.0 - finalized.0;
        if delta <= 5 {
            return true;
        }
        if is_perfect_square(delta) {
            return true;
        }

        let check = 4 * delta + 1;
        is_perfect_square(check) && isqrt(check) % 2 == 1
    }
}

/// Integer square root (floor of the real square root).
fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

fn is_perfect_square(n: u64) -> bool {
    let root = isqrt(n);
    root * root == n
}

/// Fixed-length validator public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey {
    bytes: [u8; PUBKEY_SIZE],
}

impl Pubkey {
    /// Constructs a public key from raw bytes.
    pub const fn from_bytes(bytes: [u8; PUBKEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; PUBKEY_SIZE] {
        &self.bytes
    }
}

impl Default for Pubkey {
    fn default() -> Self {
        Self {
            bytes: [0u8; PUBKEY_SIZE],
        }
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Truncated prefix; a full dump drowns test output.
        write!(f, "Pubkey(0x")?;
        for byte in self.bytes.iter().take(8) {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "..)")
    }
}

/// Opaque fixed-length signature blob.
///
/// The engine hashes signatures as byte blobs without interpreting their
/// structure; verification lives in the crypto component.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; SIGNATURE_SIZE],
}

impl Signature {
    /// Constructs a signature from raw bytes.
    pub const fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw signature bytes.
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.bytes
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            bytes: [0u8; SIGNATURE_SIZE],
        }
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(0x")?;
        for byte in self.bytes.iter().take(8) {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "..)")
    }
}
