//! The build hasher behind the registry's name indexes.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// Builds *foldhash* hashers from one constant seed.
///
/// Type paths and short names hash the same in every run, so lookups and the
/// order of ambiguous-name reports only depend on what was registered.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use arbor_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("app::Point");
/// assert_eq!(a, FixedHashState.hash_one("app::Point"));
/// assert_ne!(a, FixedHashState.hash_one("app::Line"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl FixedHashState {
    const INNER: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);
}

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        Self::INNER.build_hasher()
    }
}
