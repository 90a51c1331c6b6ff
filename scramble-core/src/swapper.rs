//! In-place "cat" <-> "hat" substitution
//!
//! The rule looks at every `a`,`t` pair and flips the character right before
//! it between `c` and `h`. Only that single preceding character is checked, so
//! "scatter" becomes "shatter". The pass runs once, left to right, and never
//! changes the buffer length.

use crate::types::ScrambleStatus;

/// Swaps "cat" with "hat" and "hat" with "cat" in place
///
/// Returns the number of characters that were changed. Buffers shorter than
/// three bytes are left untouched.
pub fn swap_cat_hat(buf: &mut [u8]) -> usize {
    let mut swaps = 0;

    for i in 2..buf.len() {
        if buf[i - 1] != b'a' || buf[i] != b't' {
            continue;
        }

        match buf[i - 2] {
            b'c' => {
                buf[i - 2] = b'h';
                swaps += 1;
            }
            b'h' => {
                buf[i - 2] = b'c';
                swaps += 1;
            }
            _ => {}
        }
    }

    swaps
}

/// A transformation applied to a borrowed message buffer
///
/// Implementors mutate `buf` in place and report a status. The buffer is only
/// borrowed for the duration of the call.
pub trait BufferTransform {
    /// Transform the buffer in place
    fn transform(&self, buf: &mut [u8]) -> ScrambleStatus;
}

/// The "cat" <-> "hat" swapper
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSwapper;

impl TextSwapper {
    /// Create a new swapper
    pub fn new() -> Self {
        Self
    }

    /// Apply the swap rule to `buf`, returning how many characters changed
    pub fn swap(&self, buf: &mut [u8]) -> usize {
        swap_cat_hat(buf)
    }

    /// Apply the swap rule to a copy of `text`
    ///
    /// The rule only touches ASCII bytes, so the result is always valid UTF-8.
    pub fn swap_str(&self, text: &str) -> String {
        let mut bytes = text.as_bytes().to_vec();
        self.swap(&mut bytes);
        String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

impl BufferTransform for TextSwapper {
    fn transform(&self, buf: &mut [u8]) -> ScrambleStatus {
        let swaps = self.swap(buf);
        log::trace!("TextSwapper applied {} swap(s)", swaps);
        ScrambleStatus::Success
    }
}
