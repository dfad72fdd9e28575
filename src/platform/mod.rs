//! Platform abstraction layer
//!
//! Handles host/device differences for:
//! - Input (keyboard vs. touch gamepad)
//! - Browser bindings (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{RawInput, resolve_input};
