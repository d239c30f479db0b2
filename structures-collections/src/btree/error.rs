use thiserror::Error;

use structures_core::Status;

/// Failure modes for [`BTree`](crate::btree::BTree) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BTreeError {
    /// The underlying allocator could not satisfy a node allocation; the
    /// tree is left exactly as it was before the call.
    #[error("allocation failed")]
    NoMem,
    /// `find`/`remove` found no value comparing equal to the given key.
    #[error("key not found")]
    NotFound,
    /// `insert` was given a value that compares equal to one already present.
    #[error("key already exists")]
    Exists,
    /// A cursor from a different tree, a different epoch, or the end
    /// position was used somewhere that requires a live position.
    #[error("cursor is stale or does not refer to a live position")]
    Invalid,
}

/// Maps each `BTreeError` variant onto its counterpart in the shared
/// [`Status`] taxonomy (spec.md §7), for callers that want to handle this
/// crate's error alongside `structures-ring`'s through one status type.
impl From<BTreeError> for Status {
    fn from(err: BTreeError) -> Self {
        match err {
            BTreeError::NoMem => Status::NoMem,
            BTreeError::NotFound => Status::NotFound,
            BTreeError::Exists => Status::Exists,
            BTreeError::Invalid => Status::Error,
        }
    }
}
