//! # structures-core
//!
//! Shared status taxonomy and allocator collaborator for the `structures-*`
//! crates.
//!
//! This crate provides the foundational error types and the pluggable
//! [`Allocator`] trait used by `structures-collections` (the B-Tree) and
//! `structures-ring` (the SPSC ring buffer). Neither component shares any
//! other state; this crate exists only to avoid duplicating these two
//! cross-cutting pieces.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod allocator;
pub mod error;
pub mod traits;

pub use allocator::{AllocError, Allocator, SystemAllocator};
pub use error::Status;
pub use traits::Container;
