// In demos/smoke.rs
// One-shot smoke client for the C entry points, exercising the happy path
// and the two classic argument failures.

use mbx_messagebox::Core::errors::MbxError;
use mbx_messagebox::ffi::{messagebox_get, messagebox_put, MBX_SUCCESS};
use sha2::{Digest, Sha256};

fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn test_input_output_match() {
    let input = b"test";
    let rc = messagebox_put(input.as_ptr(), input.len() as i32);
    if rc == MBX_SUCCESS {
        println!("Successfully added message to message box");
    } else {
        println!("Failed to add message to message box (rc={rc})");
        return;
    }

    let mut out = [0u8; 4];
    let rc = messagebox_get(out.as_mut_ptr(), out.len() as i32);
    if rc == input.len() as i32 && digest(&out) == digest(input) {
        println!("passed: output is identical to input (sha256 {})", digest(&out));
    } else {
        println!("error: output does not match input (rc={rc})");
    }
}

fn test_length_argument() {
    let input = b"test";
    let rc = messagebox_put(input.as_ptr(), -3);
    if rc == MbxError::InvalidArgument.errno() {
        println!("passed: negative length was rejected with EINVAL");
    } else {
        println!("error: negative length returned rc={rc}");
    }
}

fn test_get_small_buffer() {
    let input = b"test";
    let rc = messagebox_put(input.as_ptr(), input.len() as i32);
    assert_eq!(rc, MBX_SUCCESS);

    let mut tiny = [0u8; 1];
    let rc = messagebox_get(tiny.as_mut_ptr(), tiny.len() as i32);
    if rc == MbxError::InvalidArgument.errno() {
        println!("passed: get into a too-small buffer was denied");
    } else {
        println!("error: get into a too-small buffer returned rc={rc}");
    }

    // Drain the retained message so repeated runs start clean.
    let mut out = [0u8; 4];
    let rc = messagebox_get(out.as_mut_ptr(), out.len() as i32);
    assert_eq!(rc, input.len() as i32);
}

fn main() {
    test_input_output_match();
    test_length_argument();
    test_get_small_buffer();
}
