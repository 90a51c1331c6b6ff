//! C ABI surface of the scramble library
//!
//! Callbacks follow the `callback` typedef of `native/include/scramble.h`: they
//! receive a NUL-terminated message, mutate it in place and return a
//! [`ScrambleStatus`]. Rust hands callbacks to C through `scramble_bridge`,
//! which is compiled by the build script.

use crate::config::ScrambleConfig;
use crate::scrambler::Scrambler;
use crate::swapper::swap_cat_hat;
use crate::types::{Result, ScrambleError, ScrambleStatus};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Raw C callback signature: `Result (*callback)(char* msg)`
pub type RawCallback = unsafe extern "C" fn(msg: *mut c_char) -> ScrambleStatus;

extern "C" {
    fn scramble_bridge(f: RawCallback, msg: *mut c_char) -> ScrambleStatus;
}

/// A C callback that is trusted to honour the message buffer contract
///
/// The contract: the callback only reads and writes bytes of the message up to
/// its NUL terminator, does not retain the pointer after returning, does not
/// unwind, and returns only `Success` (0) or `Failure` (1). Any other return
/// value is not a valid [`ScrambleStatus`].
#[derive(Clone, Copy)]
pub struct MessageCallback(RawCallback);

impl MessageCallback {
    /// Wrap a raw callback
    ///
    /// # Safety
    ///
    /// `f` must uphold the message buffer contract described on
    /// [`MessageCallback`]; in particular it must return only `Success` (0)
    /// or `Failure` (1).
    pub unsafe fn from_raw(f: RawCallback) -> Self {
        Self(f)
    }

    /// The built-in "cat" <-> "hat" callback
    pub fn swap() -> Self {
        Self(scramble_swap_callback)
    }

    /// Get the raw function pointer
    pub fn as_raw(&self) -> RawCallback {
        self.0
    }
}

impl std::fmt::Debug for MessageCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MessageCallback({:p})", self.0 as *const ())
    }
}

/// Swaps "cat" <-> "hat" in a NUL-terminated message
///
/// Processing stops at the NUL terminator. A null `msg` returns
/// [`ScrambleStatus::Failure`] without touching memory.
///
/// # Safety
///
/// `msg` must be null or point to a writable, NUL-terminated buffer that is
/// not accessed elsewhere for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn scramble_swap_callback(msg: *mut c_char) -> ScrambleStatus {
    if msg.is_null() {
        log::warn!("Swap callback received a null message buffer");
        return ScrambleStatus::Failure;
    }

    let len = CStr::from_ptr(msg).to_bytes().len();
    let buf = std::slice::from_raw_parts_mut(msg.cast::<u8>(), len);

    log::debug!("cb start msg: {}", String::from_utf8_lossy(buf));
    swap_cat_hat(buf);
    log::debug!("cb finish msg: {}", String::from_utf8_lossy(buf));

    ScrambleStatus::Success
}

/// Run `callback` on a copy of `msg` through the C bridge
///
/// Returns the message as the callback left it together with the status the
/// callback reported.
pub fn invoke_callback(callback: MessageCallback, msg: &str) -> Result<(String, ScrambleStatus)> {
    let mut buf = CString::new(msg)?.into_bytes_with_nul();

    let status =
        unsafe { scramble_bridge(callback.as_raw(), buf.as_mut_ptr().cast::<c_char>()) };

    let out = CStr::from_bytes_until_nul(&buf).map_err(|e| {
        ScrambleError::InvalidInput(format!("Callback removed the message terminator: {}", e))
    })?;

    Ok((out.to_string_lossy().into_owned(), status))
}

/// Receive the default message, run `f` on it and transmit the result
///
/// This is the registration call exported to C hosts. A null `f` returns
/// [`ScrambleStatus::Failure`].
///
/// # Safety
///
/// `f` must be null or uphold the message buffer contract described on
/// [`MessageCallback`].
#[no_mangle]
pub unsafe extern "C" fn scramble_message(f: Option<RawCallback>) -> ScrambleStatus {
    let Some(f) = f else {
        log::warn!("scramble_message called without a callback");
        return ScrambleStatus::Failure;
    };

    let scrambler = Scrambler::new(ScrambleConfig::default());
    match scrambler.scramble_message(MessageCallback::from_raw(f)) {
        Ok(_) => ScrambleStatus::Success,
        Err(e) => {
            log::error!("{}", e);
            ScrambleStatus::Failure
        }
    }
}
