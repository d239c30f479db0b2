//! Advisory memory locking.
//!
//! Pinning the ring's backing pages keeps a real-time producer/consumer from
//! faulting on first touch. This is best-effort: failures (missing
//! permission, platform not supported) are silently tolerated, exactly as
//! spec'd.

#[cfg(unix)]
pub(crate) fn lock(ptr: *const u8, len: usize) {
    if len == 0 {
        return;
    }
    // SAFETY: `ptr` points at `len` live bytes owned by the caller for the
    // duration of this call; `mlock` does not retain the pointer past the
    // call and a failure is ignored per the advisory contract.
    unsafe {
        libc::mlock(ptr as *const libc::c_void, len);
    }
}

#[cfg(not(unix))]
pub(crate) fn lock(_ptr: *const u8, _len: usize) {
    // No portable equivalent wired up on this platform; advisory no-op.
}
