use std::ptr;

use super::Stack::{Message, MsgStack};

impl MsgStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node on top of the stack. Never fails.
    pub fn push(&mut self, mut node: Box<Message>) {
        if self.top.is_none() {
            debug_assert!(self.bottom.is_null());
            self.bottom = &*node as *const Message;
            self.top = Some(node);
        } else {
            node.previous = self.top.take();
            self.top = Some(node);
        }
        self.count += 1;
    }

    /// The most recently pushed, not-yet-popped message.
    #[inline]
    pub fn peek_top(&self) -> Option<&Message> {
        self.top.as_deref()
    }

    /// Remove and return the top message, or `None` if the stack is empty.
    ///
    /// The returned box owns both the node and its payload; dropping it
    /// releases both.
    pub fn pop_top(&mut self) -> Option<Box<Message>> {
        let mut node = self.top.take()?;
        self.top = node.previous.take();
        if self.top.is_none() {
            self.bottom = ptr::null();
        }
        self.count -= 1;
        Some(node)
    }

    /// Number of live messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }
}

impl Drop for MsgStack {
    fn drop(&mut self) {
        // Unlink one node at a time so a deep chain cannot recurse through
        // nested Box drops.
        while self.pop_top().is_some() {}
    }
}
