//! Scramble host API
//!
//! The [`Scrambler`] plays the part of the scramble library: it receives a
//! message, hands it to a registered callback and transmits whatever the
//! callback left in the buffer.

use crate::config::ScrambleConfig;
use crate::ffi::{invoke_callback, MessageCallback};
use crate::swapper::BufferTransform;
use crate::types::{Result, ScrambleError, ScrambleStatus, Transmission};

/// The scramble host - entry point for running callbacks on a message
#[derive(Debug, Clone, Default)]
pub struct Scrambler {
    config: ScrambleConfig,
}

impl Scrambler {
    /// Create a new scrambler
    pub fn new(config: ScrambleConfig) -> Self {
        Self { config }
    }

    /// Get the configuration this scrambler runs with
    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// "Receive" the configured message
    pub fn receive(&self) -> String {
        let msg = self.config.message.clone();
        log::info!("Received msg: {}", msg);
        msg
    }

    /// "Transmit" a scrambled message
    pub fn transmit(&self, msg: &str) {
        log::info!("Transmitted msg: {}", msg);
    }

    /// Run a C callback on the received message and transmit the result
    ///
    /// The callback is invoked from C through the bridge, exactly as a C host
    /// would see it. Returns [`ScrambleError::CallbackFailed`] if the callback
    /// reports [`ScrambleStatus::Failure`]; nothing is transmitted in that case.
    ///
    /// # Example
    /// ```
    /// use scramble_core::{MessageCallback, ScrambleConfig, Scrambler};
    ///
    /// let scrambler = Scrambler::new(ScrambleConfig::new());
    /// let sent = scrambler.scramble_message(MessageCallback::swap()).unwrap();
    /// assert_eq!(sent.transmitted, "the hat in the cat");
    /// ```
    pub fn scramble_message(&self, callback: MessageCallback) -> Result<Transmission> {
        let received = self.receive();
        let (transmitted, status) = invoke_callback(callback, &received)?;
        self.complete(received, transmitted, status)
    }

    /// Run a Rust-side transform on the received message and transmit the result
    pub fn scramble_with(&self, transform: &dyn BufferTransform) -> Result<Transmission> {
        let received = self.receive();
        let mut buf = received.clone().into_bytes();
        let status = transform.transform(&mut buf);
        let transmitted = String::from_utf8_lossy(&buf).into_owned();
        self.complete(received, transmitted, status)
    }

    fn complete(
        &self,
        received: String,
        transmitted: String,
        status: ScrambleStatus,
    ) -> Result<Transmission> {
        if self.config.trace {
            log::debug!("callback in:  {:?}", received);
            log::debug!("callback out: {:?} ({})", transmitted, status);
        }

        if !status.is_success() {
            log::warn!("Callback failed");
            return Err(ScrambleError::CallbackFailed(received));
        }

        self.transmit(&transmitted);
        Ok(Transmission::new(received, transmitted, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swapper::TextSwapper;

    struct Reject;

    impl BufferTransform for Reject {
        fn transform(&self, buf: &mut [u8]) -> ScrambleStatus {
            buf.fill(b'x');
            ScrambleStatus::Failure
        }
    }

    #[test]
    fn test_default_message_round() {
        let scrambler = Scrambler::default();
        let sent = scrambler.scramble_with(&TextSwapper::new()).unwrap();

        assert_eq!(sent.received, "the cat in the hat");
        assert_eq!(sent.transmitted, "the hat in the cat");
        assert_eq!(sent.status, ScrambleStatus::Success);
        assert_eq!(sent.swaps, 2);
    }

    #[test]
    fn test_callback_and_transform_agree() {
        let scrambler = Scrambler::new(ScrambleConfig::new().with_message("scatter the hats"));

        let via_c = scrambler.scramble_message(MessageCallback::swap()).unwrap();
        let via_rust = scrambler.scramble_with(&TextSwapper::new()).unwrap();

        assert_eq!(via_c, via_rust);
        assert_eq!(via_c.transmitted, "shatter the cats");
    }

    #[test]
    fn test_failed_transform_is_not_transmitted() {
        let scrambler = Scrambler::new(ScrambleConfig::new().with_message("cat"));
        let err = scrambler.scramble_with(&Reject).unwrap_err();

        match err {
            ScrambleError::CallbackFailed(msg) => assert_eq!(msg, "cat"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_message_without_matches_passes_through() {
        let config = ScrambleConfig::new().with_message("dog days").with_trace(false);
        let scrambler = Scrambler::new(config);
        let sent = scrambler.scramble_message(MessageCallback::swap()).unwrap();

        assert_eq!(sent.transmitted, "dog days");
        assert_eq!(sent.swaps, 0);
    }

    #[test]
    fn test_trace_flag_only_affects_logging() {
        let traced = Scrambler::new(ScrambleConfig::new().with_trace(true));
        let quiet = Scrambler::new(ScrambleConfig::new().with_trace(false));

        let a = traced.scramble_message(MessageCallback::swap()).unwrap();
        let b = quiet.scramble_message(MessageCallback::swap()).unwrap();
        assert_eq!(a, b);
    }
}
