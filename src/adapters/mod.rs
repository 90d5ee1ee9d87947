//! Native backends
//!
//! Implementations of the `NativeCalls` boundary trait. `headless` is an
//! in-memory engine double used by tests and by hosts that embed the surface
//! without a live engine; `ffi` (behind the `ffi` feature) forwards every
//! call to the engine's C ABI.

pub mod headless;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use headless::{HeadlessEngine, LogLevel, RecordedCall};

#[cfg(feature = "ffi")]
pub use ffi::FfiEngine;
