use crossbeam_utils::CachePadded;
use parking_lot::Mutex;

use crate::Core::errors::MbxError;
use crate::Core::Boundary::{Access, BoundaryTransfer, RawBoundary};
use crate::MsgBox::Stack::{Message, MsgStack};

/// A LIFO message box.
///
/// `put` copies a caller buffer in as the new top message; `get` copies the
/// top message out and removes it. Both operations validate the caller's
/// buffer before touching the stack, and both serialize on one internal
/// lock, so a failed call never leaves a partial push or pop behind.
///
/// Many independent boxes may coexist in a process (each owns its own stack
/// and lock); the C entry points in `ffi` own one process-wide default
/// instance.
///
/// ### Concurrency design:
/// - The emptiness/top check, length comparison, address validation, byte
///   transfer and list mutation of one call form a single critical section.
///   Concurrent callers serialize and observe each other's calls in lock
///   acquisition order.
/// - The lock is held by an RAII guard, so every exit path — including all
///   failure returns — releases it.
pub struct MessageBox {
    boundary: Box<dyn BoundaryTransfer>,

    /// The stack plus its exclusion lock, padded so a hot box does not
    /// false-share with neighboring state.
    stack: CachePadded<Mutex<MsgStack>>,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBox {
    /// A message box using the in-process raw boundary.
    pub fn new() -> Self {
        Self::with_boundary(Box::new(RawBoundary))
    }

    pub(crate) fn with_boundary(boundary: Box<dyn BoundaryTransfer>) -> Self {
        Self {
            boundary,
            stack: CachePadded::new(Mutex::new(MsgStack::new())),
        }
    }

    /// Copy `length` bytes from the caller region at `buffer` onto the top
    /// of the stack as a new message.
    ///
    /// Failure order matters: the length check precedes allocation,
    /// allocation precedes the critical section, and validation plus the
    /// byte transfer precede the push. Every failure drops whatever was
    /// built for this attempt and leaves the stack exactly as it was.
    ///
    /// # Safety
    /// If the boundary's `validate` accepts `buffer`, the region must
    /// really be readable for `length` bytes for the duration of the call.
    pub unsafe fn put(&self, buffer: *const u8, length: i32) -> Result<(), MbxError> {
        if length < 0 {
            return Err(MbxError::InvalidArgument);
        }
        let length = length as usize;

        // Fallible payload allocation: a bogus huge length reports
        // OutOfMemory instead of aborting the process.
        let mut payload: Vec<u8> = Vec::new();
        payload
            .try_reserve_exact(length)
            .map_err(|_| MbxError::OutOfMemory)?;
        payload.resize(length, 0);

        let mut stack = self.stack.lock();

        if !self.boundary.validate(Access::Read, buffer, length) {
            return Err(MbxError::BadAddress);
        }
        let uncopied = self.boundary.copy_in(&mut payload, buffer);
        if uncopied > 0 {
            return Err(MbxError::MessageTooLarge);
        }

        stack.push(Message::new(payload));
        Ok(())
    }

    /// Copy the top message into the caller region at `buffer` (of
    /// `capacity` bytes), then remove it from the stack. Returns the number
    /// of bytes written.
    ///
    /// Validation and the transfer both complete before the pop, so a
    /// failed get never loses or corrupts the stored message.
    ///
    /// # Safety
    /// If the boundary's `validate` accepts `buffer`, the region must
    /// really be writable for the message's length for the duration of the
    /// call.
    pub unsafe fn get(&self, buffer: *mut u8, capacity: i32) -> Result<usize, MbxError> {
        // Emptiness is decided inside the critical section; checking before
        // taking the lock would race with concurrent callers.
        let mut stack = self.stack.lock();

        let top = stack.peek_top().ok_or(MbxError::Empty)?;
        let mlength = top.len();

        // Covers negative capacities as well.
        if (capacity as i64) < (mlength as i64) {
            return Err(MbxError::InvalidArgument);
        }
        if !self.boundary.validate(Access::Write, buffer, mlength) {
            return Err(MbxError::BadAddress);
        }
        let uncopied = self.boundary.copy_out(buffer, top.payload());
        if uncopied > 0 {
            return Err(MbxError::MessageTooLarge);
        }

        // Checks and transfer succeeded; the pop cannot fail now. The
        // returned box drops here, releasing node and payload together.
        let node = stack.pop_top();
        debug_assert!(node.is_some());
        Ok(mlength)
    }

    /// Slice-based put for in-process callers.
    pub fn put_bytes(&self, msg: &[u8]) -> Result<(), MbxError> {
        let length = i32::try_from(msg.len()).map_err(|_| MbxError::InvalidArgument)?;
        // A slice is a readable region by construction.
        unsafe { self.put(msg.as_ptr(), length) }
    }

    /// Slice-based get; fills the front of `out` and returns the byte count.
    pub fn get_bytes(&self, out: &mut [u8]) -> Result<usize, MbxError> {
        let capacity = i32::try_from(out.len()).map_err(|_| MbxError::InvalidArgument)?;
        unsafe { self.get(out.as_mut_ptr(), capacity) }
    }

    /// Number of messages currently stored.
    pub fn depth(&self) -> usize {
        self.stack.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }
}
