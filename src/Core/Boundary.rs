// Trust-boundary transfer abstraction.
//
// The mailbox never touches a caller buffer directly; it validates the
// region and moves bytes through this trait. Production uses RawBoundary;
// tests substitute failing implementations to exercise the error paths.

use std::ptr;

/// Direction of a boundary access, mirroring read/write permission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Moves bytes between a caller-owned region and crate-owned memory.
///
/// `copy_in`/`copy_out` return the number of bytes NOT transferred; 0 means
/// the whole region moved. A shortfall is reported to the caller, never
/// retried — a partial transfer leaves no safe resumption point.
pub trait BoundaryTransfer: Send + Sync {
    /// Check that `addr` designates an accessible region of `len` bytes
    /// for the given access direction.
    fn validate(&self, access: Access, addr: *const u8, len: usize) -> bool;

    /// Copy `dst.len()` bytes from the caller region at `src` into `dst`.
    ///
    /// # Safety
    /// `src` must have passed `validate(Access::Read, src, dst.len())` and
    /// must stay readable for the duration of the call.
    unsafe fn copy_in(&self, dst: &mut [u8], src: *const u8) -> usize;

    /// Copy `src.len()` bytes from `src` into the caller region at `dst`.
    ///
    /// # Safety
    /// `dst` must have passed `validate(Access::Write, dst, src.len())` and
    /// must stay writable for the duration of the call.
    unsafe fn copy_out(&self, dst: *mut u8, src: &[u8]) -> usize;
}

/// In-process boundary: the caller's region is plain addressable memory.
#[derive(Debug, Default)]
pub struct RawBoundary;

impl BoundaryTransfer for RawBoundary {
    fn validate(&self, _access: Access, addr: *const u8, len: usize) -> bool {
        if len == 0 {
            // Zero-length transfers touch nothing; any address passes.
            return true;
        }
        if addr.is_null() {
            return false;
        }
        if len > isize::MAX as usize {
            return false;
        }
        // The region must not wrap the address space.
        (addr as usize).checked_add(len).is_some()
    }

    unsafe fn copy_in(&self, dst: &mut [u8], src: *const u8) -> usize {
        if dst.is_empty() {
            return 0;
        }
        ptr::copy_nonoverlapping(src, dst.as_mut_ptr(), dst.len());
        0
    }

    unsafe fn copy_out(&self, dst: *mut u8, src: &[u8]) -> usize {
        if src.is_empty() {
            return 0;
        }
        ptr::copy_nonoverlapping(src.as_ptr(), dst, src.len());
        0
    }
}
