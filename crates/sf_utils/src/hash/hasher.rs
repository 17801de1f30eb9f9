//! `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` wraps `foldhash` with a constant seed. `NoOpHasher` passes
//! an already well-distributed `u64` (such as a `TypeId`) straight through.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5F0A_91C3_D24E_7B68);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// Deterministic hash state: equal inputs hash equally across runs.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use sf_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("size"), FixedHashState.hash_one("size"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// Hasher that keeps the last written `u64` as the hash.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Fold arbitrary bytes so `write_u32(n)` and `write_u64(n)` agree.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Build state for [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use sf_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoOpHashState, NoOpHasher};
    use core::hash::{BuildHasher, Hasher};

    #[test]
    fn narrow_writes_match_u64() {
        let mut narrow = NoOpHasher::default();
        narrow.write_u32(1234);
        assert_eq!(narrow.finish(), NoOpHashState.hash_one(1234_u64));
    }
}
