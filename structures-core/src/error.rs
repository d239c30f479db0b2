//! Status taxonomy shared by the B-Tree and the ring buffer.
//!
//! The taxonomy itself is small and fixed: `Success`, `Error`, `NoMem`,
//! `NotFound`, `Exists`. `Success` never appears as an `Err` value — it is
//! kept here only so the full taxonomy can be named and matched on as a
//! unit where a caller wants the raw status rather than a per-operation
//! `Result`.

use thiserror::Error;

use crate::allocator::AllocError;

/// The status taxonomy for B-Tree operations.
///
/// `structures-collections` never constructs [`Status::Success`] as an
/// error; operations that succeed simply return `Ok(..)`. The variant exists
/// so the taxonomy is complete and so status codes received from elsewhere
/// (e.g. recorded in a test fixture) round-trip through one type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed and all stated postconditions hold.
    #[error("success")]
    Success,

    /// A structural precondition was violated (for example `MAX_HEIGHT`
    /// would be exceeded). Well-behaved inputs never encounter this.
    #[error("structural precondition violated")]
    Error,

    /// Allocation failed; the object's observable state is unchanged.
    #[error("allocation failed")]
    NoMem,

    /// A lookup or removal key had no matching element.
    #[error("not found")]
    NotFound,

    /// `insert` found an equal key already present; the tree is unchanged.
    #[error("already exists")]
    Exists,
}

/// An allocation failure is always reported as [`Status::NoMem`] — this is
/// the "ring equivalent" of `BTreeError`'s conversion: `SpscRing` has no
/// error enum of its own (spec.md §7: post-construction ring operations
/// cannot fail), but construction (`try_new`/`try_with_allocator`) and
/// `BTree`'s node allocation both bottom out in this one failure type.
impl From<AllocError> for Status {
    fn from(_: AllocError) -> Self {
        Status::NoMem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_error_maps_to_nomem() {
        let err = AllocError { requested: 4096 };
        assert_eq!(Status::from(err), Status::NoMem);
    }
}
