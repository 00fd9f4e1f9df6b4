use thiserror::Error;

/// Failure kinds surfaced by the message box operations.
///
/// Each kind maps onto a conventional POSIX errno for the C entry points;
/// the Rust API keeps them as a typed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MbxError {
    /// Caller-supplied size is negative or insufficient.
    #[error("invalid argument")]
    InvalidArgument,

    /// Payload allocation failed.
    #[error("out of memory")]
    OutOfMemory,

    /// The caller's buffer is not a valid region of the required size.
    #[error("bad address")]
    BadAddress,

    /// The boundary transfer could not move all requested bytes.
    #[error("message too large")]
    MessageTooLarge,

    /// Get was invoked with no message present.
    #[error("message box is empty")]
    Empty,
}

impl MbxError {
    /// Negative errno encoding used by the C entry points.
    pub fn errno(self) -> i32 {
        let code = match self {
            MbxError::InvalidArgument => libc::EINVAL,
            MbxError::OutOfMemory => libc::ENOMEM,
            MbxError::BadAddress => libc::EFAULT,
            MbxError::MessageTooLarge => libc::EMSGSIZE,
            MbxError::Empty => libc::ENOMSG,
        };
        -code
    }
}
