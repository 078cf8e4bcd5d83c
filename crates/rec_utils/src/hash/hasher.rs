//! Provide `FixedHasher`.
//!
//! `FixedHasher` is based on the `foldhash` crate and gives
//! stable hash results through a fixed seed.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// The fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// A hasher whose result depends only on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`],
/// created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use rec_utils::hash::FixedHashState;
///
/// let hash = |v: &str| {
///     let mut hasher = FixedHashState.build_hasher();
///     v.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash("x"), hash("x"));
/// assert_ne!(hash("x"), hash("y"));
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

#[cfg(test)]
mod tests {
    use super::FixedHashState;
    use core::hash::BuildHasher;

    #[test]
    fn stable_between_states() {
        let a = FixedHashState.hash_one("field");
        let b = FixedHashState.hash_one("field");
        assert_eq!(a, b);
    }
}
