//! # structures-ring
//!
//! A fixed-capacity, wait-free, single-producer/single-consumer byte ring
//! buffer, suitable for passing real-time audio-style data between a
//! producer thread and a consumer thread without locks, retries, or
//! post-construction allocation.
//!
//! ```
//! use structures_ring::SpscRing;
//!
//! let ring = SpscRing::new(1024);
//! assert_eq!(ring.write(b"hello"), 5);
//!
//! let mut buf = [0u8; 5];
//! assert_eq!(ring.read(&mut buf), 5);
//! assert_eq!(&buf, b"hello");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod mlock;
mod ring;

pub use ring::SpscRing;
pub use structures_core::{AllocError, Allocator, Container, Status, SystemAllocator};
