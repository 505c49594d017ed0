//! # Pseudo-Module for the Native Platform
//!
//! This module behaves like an alias of the platform-module that matches the
//! compilation target. However, it is not a straight alias but a recompilation
//! of the platform-module with the Rust primitives as ABI.
//!
//! If no platform-module matches the compilation target, this will use the
//! `libc` module (if enabled). If the latter is not enabled, this module will
//! be empty.

pub use osi::ffi::abi::native as abi;

#[cfg(target_arch = "x86")]
#[path = "../x86/mod.rs"]
mod inner;

#[cfg(target_arch = "x86_64")]
#[path = "../x86_64/mod.rs"]
mod inner;

#[cfg(all(
    not(any(target_arch = "x86", target_arch = "x86_64")),
    feature = "libc",
))]
use super::libc as inner;

#[cfg(all(
    not(any(target_arch = "x86", target_arch = "x86_64")),
    not(feature = "libc"),
))]
mod inner {}

#[allow(unused)]
pub use inner::*;
