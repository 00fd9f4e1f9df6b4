use crate::MsgBox::MessageBox;

use lazy_static::lazy_static;

lazy_static! {
    /// The process-wide default message box behind the C entry points.
    /// Rust callers that want isolated stores should build their own
    /// `MessageBox` instead of going through these.
    static ref GLOBAL_BOX: MessageBox = MessageBox::new();
}

/// Status returned by `messagebox_put` on success (`messagebox_get`
/// returns the byte count instead).
pub const MBX_SUCCESS: i32 = 0;

/// Push a caller buffer onto the process-wide message box.
///
/// # Arguments
/// * `buffer` - Pointer to the message bytes.
/// * `length` - Number of bytes to store.
///
/// # Returns
/// * `0` on success.
/// * `-EINVAL` if `length` is negative.
/// * `-ENOMEM` if the payload cannot be allocated.
/// * `-EFAULT` if `buffer` fails validation (null, wrapping range).
/// * `-EMSGSIZE` if the boundary transfer came up short.
#[no_mangle]
pub extern "C" fn messagebox_put(buffer: *const u8, length: i32) -> i32 {
    // Safety: validation rejects null/wrapping regions; the caller owns
    // the contract that an accepted pointer is genuinely readable.
    match unsafe { GLOBAL_BOX.put(buffer, length) } {
        Ok(()) => MBX_SUCCESS,
        Err(e) => e.errno(),
    }
}

/// Pop the top message of the process-wide box into a caller buffer.
///
/// # Arguments
/// * `buffer` - Pointer to a writable region of `capacity` bytes.
/// * `capacity` - Size of that region.
///
/// # Returns
/// * The number of bytes written (the popped message's length) on success.
/// * `-ENOMSG` if the box is empty.
/// * `-EINVAL` if `capacity` is smaller than the top message.
/// * `-EFAULT` if `buffer` fails validation.
/// * `-EMSGSIZE` if the boundary transfer came up short.
#[no_mangle]
pub extern "C" fn messagebox_get(buffer: *mut u8, capacity: i32) -> i32 {
    // Safety: same contract as messagebox_put, for writes.
    match unsafe { GLOBAL_BOX.get(buffer, capacity) } {
        Ok(written) => written as i32,
        Err(e) => e.errno(),
    }
}
