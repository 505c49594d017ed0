//! # Linux System Interfaces
//!
//! Wrappers around Linux system interfaces that need more than a
//! definition. The raw definitions are re-exported as [`ffi`].

pub use crate::ffi::linux as ffi;

#[cfg(feature = "libc")]
pub mod errno;
#[cfg(feature = "libc")]
pub mod termios;
