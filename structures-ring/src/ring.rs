//! The wait-free SPSC byte ring buffer.

use core::cell::UnsafeCell;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use alloc::boxed::Box;

use structures_core::{AllocError, Allocator, Container, SystemAllocator};

use crate::mlock;

/// A fixed-capacity, wait-free, single-producer/single-consumer byte ring
/// buffer.
///
/// Exactly one producer thread may call [`write`](SpscRing::write) and
/// exactly one consumer thread may call [`read`](SpscRing::read) /
/// [`peek`](SpscRing::peek) / [`skip`](SpscRing::skip); both sides may call
/// the space queries and do so concurrently with the other side's mutator.
/// No operation blocks, retries, or allocates after construction — every
/// operation either completes in full or returns `0`.
///
/// Producer and consumer typically share a ring through an `Arc<SpscRing>`,
/// one clone per thread.
pub struct SpscRing {
    allocator: Box<dyn Allocator>,
    buf: UnsafeCell<Box<[u8]>>,
    /// Capacity rounded up to a power of two; `mask = size - 1`.
    size: u32,
    mask: u32,
    write_head: AtomicU32,
    read_head: AtomicU32,
}

// SAFETY: `write_head`/`read_head` are only ever mutated by their respective
// single owner thread, with Acquire/Release pairing establishing a
// happens-before edge for the byte region each publishes. `buf` is only
// accessed through that same protocol (the producer only touches bytes it
// is about to publish; the consumer only touches bytes already published).
// `allocator` is touched only during construction and `Drop`, never
// concurrently with a read/write.
unsafe impl Send for SpscRing {}
unsafe impl Sync for SpscRing {}

impl SpscRing {
    /// Creates a ring with at least `requested_capacity` usable bytes,
    /// using the global allocator.
    ///
    /// # Panics
    ///
    /// Panics if the backing allocation fails. Use [`SpscRing::try_new`] to
    /// handle that case explicitly.
    pub fn new(requested_capacity: u32) -> Self {
        Self::try_new(requested_capacity).expect("ring buffer allocation failed")
    }

    /// Fallible version of [`SpscRing::new`].
    pub fn try_new(requested_capacity: u32) -> Result<Self, AllocError> {
        Self::try_with_allocator(requested_capacity, Box::new(SystemAllocator))
    }

    /// Creates a ring backed by a custom [`Allocator`].
    ///
    /// # Panics
    ///
    /// Panics if the backing allocation fails. Use
    /// [`SpscRing::try_with_allocator`] to handle that case explicitly.
    pub fn with_allocator(requested_capacity: u32, allocator: Box<dyn Allocator>) -> Self {
        Self::try_with_allocator(requested_capacity, allocator)
            .expect("ring buffer allocation failed")
    }

    /// Fallible version of [`SpscRing::with_allocator`].
    pub fn try_with_allocator(
        requested_capacity: u32,
        allocator: Box<dyn Allocator>,
    ) -> Result<Self, AllocError> {
        let size = requested_capacity.max(2).next_power_of_two();
        let buf = allocator.calloc(size as usize, 1)?;
        debug_assert_eq!(buf.len(), size as usize);
        Ok(SpscRing {
            allocator,
            buf: UnsafeCell::new(buf),
            size,
            mask: size - 1,
            write_head: AtomicU32::new(0),
            read_head: AtomicU32::new(0),
        })
    }

    /// Zeros both indices.
    ///
    /// Safe only when no reader or writer is concurrently active; taking
    /// `&mut self` enforces exclusive access at compile time.
    pub fn reset(&mut self) {
        *self.write_head.get_mut() = 0;
        *self.read_head.get_mut() = 0;
    }

    /// Advisory: pins the ring header and its backing buffer's pages so a
    /// real-time reader/writer never faults. Silently tolerated if
    /// unsupported on this platform.
    pub fn mlock(&self) {
        mlock::lock(self as *const Self as *const u8, core::mem::size_of::<Self>());
        // SAFETY: `buf` is valid for `self.size` bytes for the lifetime of `self`.
        let buf_ptr = unsafe { (*self.buf.get()).as_ptr() };
        mlock::lock(buf_ptr, self.size as usize);
    }

    /// Returns the usable capacity in bytes (`size - 1`).
    pub fn capacity(&self) -> u32 {
        self.mask
    }

    fn space_between(&self, r: u32, w: u32) -> u32 {
        w.wrapping_sub(r) & self.mask
    }

    /// Returns the number of bytes currently available to read.
    pub fn read_space(&self) -> u32 {
        let r = self.read_head.load(Ordering::Relaxed);
        let w = self.write_head.load(Ordering::Acquire);
        self.space_between(r, w)
    }

    /// Returns the number of bytes currently available to write.
    pub fn write_space(&self) -> u32 {
        let r = self.read_head.load(Ordering::Acquire);
        let w = self.write_head.load(Ordering::Relaxed);
        self.mask - self.space_between(r, w)
    }

    /// Copies `src` into the ring. All-or-nothing: returns `0` and makes no
    /// change if fewer than `src.len()` bytes are free; otherwise returns
    /// `src.len()`.
    pub fn write(&self, src: &[u8]) -> u32 {
        debug_assert!(src.len() <= u32::MAX as usize);
        let n = src.len() as u32;
        let r = self.read_head.load(Ordering::Acquire);
        let w = self.write_head.load(Ordering::Relaxed);
        if self.mask - self.space_between(r, w) < n {
            return 0;
        }

        // SAFETY: the producer is the sole writer of the region
        // `[w, w+n)` (mod size); by the write-space check above that
        // region does not overlap bytes the consumer has not yet read.
        unsafe {
            let buf = &mut *self.buf.get();
            if w + n <= self.size {
                buf[w as usize..(w + n) as usize].copy_from_slice(src);
            } else {
                let first = self.size - w;
                buf[w as usize..].copy_from_slice(&src[..first as usize]);
                buf[..(n - first) as usize].copy_from_slice(&src[first as usize..]);
            }
        }

        self.write_head
            .store(w.wrapping_add(n) & self.mask, Ordering::Release);
        n
    }

    fn copy_out(&self, r: u32, n: u32, dst: &mut [u8]) {
        // SAFETY: bytes in `[r, r+n)` (mod size) were published by the
        // producer's Release store, observed here via the caller's Acquire
        // load of `write_head`, and are not mutated again until this
        // consumer advances `read_head` past them.
        unsafe {
            let buf = &*self.buf.get();
            if r + n <= self.size {
                dst.copy_from_slice(&buf[r as usize..(r + n) as usize]);
            } else {
                let first = self.size - r;
                dst[..first as usize].copy_from_slice(&buf[r as usize..]);
                dst[first as usize..].copy_from_slice(&buf[..(n - first) as usize]);
            }
        }
    }

    /// Copies out `dst.len()` bytes without advancing `read_head`.
    /// All-or-nothing: returns `0` if fewer bytes are available.
    pub fn peek(&self, dst: &mut [u8]) -> u32 {
        debug_assert!(dst.len() <= u32::MAX as usize);
        let n = dst.len() as u32;
        let r = self.read_head.load(Ordering::Relaxed);
        let w = self.write_head.load(Ordering::Acquire);
        if self.space_between(r, w) < n {
            return 0;
        }
        self.copy_out(r, n, dst);
        n
    }

    /// Copies out `dst.len()` bytes and advances `read_head`.
    /// All-or-nothing: returns `0` if fewer bytes are available.
    pub fn read(&self, dst: &mut [u8]) -> u32 {
        debug_assert!(dst.len() <= u32::MAX as usize);
        let n = dst.len() as u32;
        let r = self.read_head.load(Ordering::Relaxed);
        let w = self.write_head.load(Ordering::Acquire);
        if self.space_between(r, w) < n {
            return 0;
        }
        self.copy_out(r, n, dst);
        self.read_head
            .store(r.wrapping_add(n) & self.mask, Ordering::Release);
        n
    }

    /// Advances `read_head` by `n` bytes without copying anything out.
    /// All-or-nothing: returns `0` if fewer bytes are available.
    pub fn skip(&self, n: u32) -> u32 {
        let r = self.read_head.load(Ordering::Relaxed);
        let w = self.write_head.load(Ordering::Acquire);
        if self.space_between(r, w) < n {
            return 0;
        }
        self.read_head
            .store(r.wrapping_add(n) & self.mask, Ordering::Release);
        n
    }
}

impl Container for SpscRing {
    fn len(&self) -> usize {
        self.read_space() as usize
    }
}

impl fmt::Debug for SpscRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpscRing")
            .field("capacity", &self.capacity())
            .field("read_space", &self.read_space())
            .field("write_space", &self.write_space())
            .finish()
    }
}

impl Drop for SpscRing {
    fn drop(&mut self) {
        let buf = core::mem::replace(self.buf.get_mut(), Box::new([]));
        self.allocator.free(buf);
    }
}
