// LIFO chain of message nodes. The stack performs no locking of its own;
// the owning MessageBox serializes every access.

use std::ptr;

/// One variable-length byte message stored in the box.
///
/// The payload is sized exactly once, at construction, and never resized
/// afterwards; the vector's length is the message length.
pub struct Message {
    /// Owned payload bytes.
    pub(crate) payload: Vec<u8>,

    /// Back-link to the next-older message, or `None` for the oldest.
    pub(crate) previous: Option<Box<Message>>,
}

/// The LIFO store itself: a singly linked chain of owned nodes hanging off
/// `top`.
///
/// ### Ownership design:
/// - Every live node is owned by exactly one link: `top` owns the newest
///   node, and each node owns the next-older one through `previous`.
/// - `bottom` is kept purely as an emptiness witness mirroring the oldest
///   node. It is never dereferenced and never traversed.
pub struct MsgStack {
    pub(crate) top: Option<Box<Message>>,
    pub(crate) bottom: *const Message,
    pub(crate) count: usize,
}

// `bottom` is a raw pointer, but it is only ever read or written while the
// owning MessageBox holds its exclusion lock.
unsafe impl Send for MsgStack {}

impl Message {
    /// Allocate a fresh node around an already-built payload.
    pub fn new(payload: Vec<u8>) -> Box<Self> {
        Box::new(Self {
            payload,
            previous: None,
        })
    }

    /// Length of the stored payload in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The stored bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl Default for MsgStack {
    fn default() -> Self {
        Self {
            top: None,
            bottom: ptr::null(),
            count: 0,
        }
    }
}
