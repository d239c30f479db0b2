//! # structures-collections
//!
//! An ordered B-Tree over opaque, comparator-driven values.
//!
//! ```
//! use structures_collections::{BTree, NaturalComparator};
//!
//! let mut tree: BTree<i32, NaturalComparator> = BTree::new(16, NaturalComparator);
//! tree.insert(5).unwrap();
//! tree.insert(2).unwrap();
//! tree.insert(9).unwrap();
//!
//! let values: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(values, vec![2, 5, 9]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod btree;
pub mod comparator;

pub use btree::{BTree, BTreeError, Cursor};
pub use comparator::{Comparator, FnComparator, NaturalComparator};
pub use structures_core::{AllocError, Allocator, Container, Status, SystemAllocator};
