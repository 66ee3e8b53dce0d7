//! Thin wrappers over the host libc's numeric parsers.
//!
//! All unsafe FFI in the workspace is confined to this module. The wrappers
//! translate the `endptr` out-parameter into a consumed byte count, matching
//! the shape of the `strutil-core` scanners.

use std::ffi::{CString, c_char};

use crate::ConformanceError;

/// Runs the host `strtol` on `input`, returning `(value, consumed)`.
pub fn strtol(input: &str, base: u32) -> Result<(i64, usize), ConformanceError> {
    let c_input =
        CString::new(input).map_err(|_| ConformanceError::EmbeddedNul(input.to_string()))?;
    let mut end: *mut c_char = std::ptr::null_mut();
    let value = unsafe { libc::strtol(c_input.as_ptr(), &mut end, base as libc::c_int) };
    let consumed = unsafe { end.offset_from(c_input.as_ptr()) } as usize;
    Ok((value as i64, consumed))
}

/// Runs the host `strtod` on `input`, returning `(value, consumed)`.
pub fn strtod(input: &str) -> Result<(f64, usize), ConformanceError> {
    let c_input =
        CString::new(input).map_err(|_| ConformanceError::EmbeddedNul(input.to_string()))?;
    let mut end: *mut c_char = std::ptr::null_mut();
    let value = unsafe { libc::strtod(c_input.as_ptr(), &mut end) };
    let consumed = unsafe { end.offset_from(c_input.as_ptr()) } as usize;
    Ok((value, consumed))
}
