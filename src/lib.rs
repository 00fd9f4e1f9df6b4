// Module naming follows project convention (MBX = Message Box)
#[allow(non_snake_case)]
pub mod MsgBox {
    pub mod Stack {
        pub mod Stack;
        pub mod Stack_impl;
        pub use Stack::{Message, MsgStack}; // re-export for stable path
    }
    pub mod builder;
    pub mod mailbox;
    pub use builder::MailboxBuilder;
    pub use mailbox::MessageBox;
}
#[allow(non_snake_case)]
pub mod Core {
    pub mod Boundary;
    pub use Boundary::{Access, BoundaryTransfer, RawBoundary};
    pub mod errors;
    pub use errors::MbxError;
}

pub mod ffi;
