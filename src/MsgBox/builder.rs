use super::mailbox::MessageBox;
use crate::Core::Boundary::{BoundaryTransfer, RawBoundary};

/// Builder for message boxes that need a non-default boundary (mainly
/// fault-injecting boundaries in tests).
pub struct MailboxBuilder {
    boundary: Box<dyn BoundaryTransfer>,
}

impl Default for MailboxBuilder {
    fn default() -> Self {
        Self {
            boundary: Box::new(RawBoundary),
        }
    }
}

impl MailboxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary(mut self, boundary: Box<dyn BoundaryTransfer>) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn build(self) -> MessageBox {
        MessageBox::with_boundary(self.boundary)
    }
}
