//! Callback resolution
//!
//! Turns the `[callback]` configuration into something the scrambler can run:
//! the Rust swapper, the built-in C ABI callback, or a C function loaded from a
//! shared library at runtime.

use crate::config::{CallbackConfig, CallbackMode};
use anyhow::{Context, Result};
use libloading::{Library, Symbol};
use scramble_core::{MessageCallback, RawCallback, Scrambler, TextSwapper, Transmission};

/// A callback ready to be registered with a [`Scrambler`]
pub enum ResolvedCallback {
    Builtin(TextSwapper),
    Ffi(MessageCallback),
    Library {
        callback: MessageCallback,
        symbol: String,
        // Keeps the code behind `callback` mapped.
        _library: Library,
    },
}

impl ResolvedCallback {
    /// Run one scramble cycle with this callback
    pub fn run(&self, scrambler: &Scrambler) -> scramble_core::Result<Transmission> {
        match self {
            ResolvedCallback::Builtin(swapper) => scrambler.scramble_with(swapper),
            ResolvedCallback::Ffi(callback) => scrambler.scramble_message(*callback),
            ResolvedCallback::Library { callback, .. } => scrambler.scramble_message(*callback),
        }
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            ResolvedCallback::Builtin(_) => "built-in TextSwapper".to_string(),
            ResolvedCallback::Ffi(_) => "C ABI scramble_swap_callback".to_string(),
            ResolvedCallback::Library { symbol, .. } => format!("library symbol `{}`", symbol),
        }
    }
}

/// Resolve the configured callback
pub fn resolve(config: &CallbackConfig) -> Result<ResolvedCallback> {
    match config.mode {
        CallbackMode::Builtin => Ok(ResolvedCallback::Builtin(TextSwapper::new())),
        CallbackMode::Ffi => Ok(ResolvedCallback::Ffi(MessageCallback::swap())),
        CallbackMode::Library => {
            let path = config
                .library
                .as_ref()
                .context("Callback mode \"library\" requires a library path")?;

            log::info!("Loading callback `{}` from {:?}", config.symbol, path);

            // SAFETY: loading runs the library's initialisers; the library is
            // supplied by the user as a callback provider.
            let library = unsafe { Library::new(path) }
                .with_context(|| format!("Failed to load callback library: {:?}", path))?;

            // SAFETY: the symbol is declared with the `callback` signature of
            // scramble.h, returns only Success (0) or Failure (1), and the
            // library is kept alive alongside it.
            let raw: RawCallback = unsafe {
                let symbol: Symbol<RawCallback> =
                    library.get(config.symbol.as_bytes()).with_context(|| {
                        format!("Symbol `{}` not found in {:?}", config.symbol, path)
                    })?;
                *symbol
            };

            Ok(ResolvedCallback::Library {
                callback: unsafe { MessageCallback::from_raw(raw) },
                symbol: config.symbol.clone(),
                _library: library,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(mode: CallbackMode) -> CallbackConfig {
        CallbackConfig {
            mode,
            ..CallbackConfig::default()
        }
    }

    #[test]
    fn test_builtin_and_ffi_agree() {
        let scrambler = Scrambler::default();

        let builtin = resolve(&config(CallbackMode::Builtin)).unwrap();
        let ffi = resolve(&config(CallbackMode::Ffi)).unwrap();

        let a = builtin.run(&scrambler).unwrap();
        let b = ffi.run(&scrambler).unwrap();
        assert_eq!(a.transmitted, "the hat in the cat");
        assert_eq!(a, b);
    }

    #[test]
    fn test_library_mode_requires_path() {
        let err = resolve(&config(CallbackMode::Library)).err().unwrap();
        assert!(err.to_string().contains("requires a library path"));
    }

    #[test]
    fn test_library_mode_missing_file() {
        let cfg = CallbackConfig {
            mode: CallbackMode::Library,
            library: Some(PathBuf::from("/nonexistent/libscramble_cb.so")),
            symbol: "cb".to_string(),
        };
        let err = resolve(&cfg).err().unwrap();
        assert!(err.to_string().contains("Failed to load callback library"));
    }

    #[cfg(callback_fixture)]
    #[test]
    fn test_library_mode_runs_loaded_callback() {
        let cfg = CallbackConfig {
            mode: CallbackMode::Library,
            library: Some(PathBuf::from(env!("SCRAMBLE_CB_FIXTURE"))),
            symbol: "cb".to_string(),
        };

        let callback = resolve(&cfg).unwrap();
        assert_eq!(callback.describe(), "library symbol `cb`");

        let sent = callback.run(&Scrambler::default()).unwrap();
        assert_eq!(sent.transmitted, "the hat in the cat");
        assert_eq!(sent.swaps, 2);
    }

    #[cfg(callback_fixture)]
    #[test]
    fn test_library_mode_missing_symbol() {
        let cfg = CallbackConfig {
            mode: CallbackMode::Library,
            library: Some(PathBuf::from(env!("SCRAMBLE_CB_FIXTURE"))),
            symbol: "no_such_callback".to_string(),
        };

        let err = resolve(&cfg).err().unwrap();
        assert!(err.to_string().contains("Symbol `no_such_callback` not found"));
    }

    #[test]
    fn test_describe() {
        let ffi = resolve(&config(CallbackMode::Ffi)).unwrap();
        assert_eq!(ffi.describe(), "C ABI scramble_swap_callback");
    }
}
