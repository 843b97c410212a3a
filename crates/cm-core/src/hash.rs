//! Fast hash set type aliases.
//!
//! Wraps [`FxHashSet`] from the `rustc-hash` crate. The Fx hash algorithm is
//! considerably faster than the standard library's SipHash for short string
//! keys such as tags, compiler `types` entries and package names, and this
//! tool has no need for denial-of-service resistance.
//!
//! # Examples
//!
//! ```
//! use cm_core::{FxHashSet, fx_hash_set_with_capacity};
//!
//! let mut seen: FxHashSet<&str> = fx_hash_set_with_capacity(4);
//! assert!(seen.insert("jest"));
//! assert!(!seen.insert("jest"));
//! ```

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// Creates a new [`FxHashSet`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
