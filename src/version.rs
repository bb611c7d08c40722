//! Compiler version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time. It is shown by `--version`; generated
//! files never carry it.

/// The speech-dict version string (for example, `0.1.0`).
pub const SPEECH_DICT_VERSION: &str = env!("CARGO_PKG_VERSION");
