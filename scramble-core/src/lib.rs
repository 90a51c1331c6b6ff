//! Scramble Core Library
//!
//! A small library demonstrating a C callback round trip: a host registers a
//! message callback, the scramble library runs it on a message buffer and
//! transmits the result.
//!
//! # Architecture
//!
//! - [`swapper`] holds the in-place "cat" <-> "hat" substitution and the
//!   [`BufferTransform`] trait it implements
//! - [`ffi`] exposes the C ABI: the swap callback, the `scramble_message`
//!   registration call and a safe wrapper around the C bridge
//! - [`Scrambler`] runs one receive/callback/transmit cycle
//!
//! The library only logs through the `log` facade; installing a logger is up
//! to the application (see scramble-cli).
//!
//! # Example Usage
//!
//! ```
//! use scramble_core::{MessageCallback, ScrambleConfig, Scrambler, TextSwapper};
//!
//! let scrambler = Scrambler::new(ScrambleConfig::new().with_message("cat hat"));
//!
//! // Through C, as a foreign host would call it
//! let sent = scrambler.scramble_message(MessageCallback::swap()).unwrap();
//! assert_eq!(sent.transmitted, "hat cat");
//!
//! // Or directly with a Rust transform
//! let sent = scrambler.scramble_with(&TextSwapper::new()).unwrap();
//! assert_eq!(sent.transmitted, "hat cat");
//! ```

// Public modules
pub mod config;
pub mod ffi;
pub mod scrambler;
pub mod swapper;
pub mod types;

// Re-export main types for convenience
pub use config::{ScrambleConfig, DEFAULT_MESSAGE};
pub use ffi::{invoke_callback, MessageCallback, RawCallback};
pub use scrambler::Scrambler;
pub use swapper::{swap_cat_hat, BufferTransform, TextSwapper};
pub use types::{Result, ScrambleError, ScrambleStatus, Transmission};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
