//! # Linux User-Space API
//!
//! This library provides raw definitions of Linux kernel interfaces for
//! multiple platforms at once ([`ffi`]), plus thin wrappers for the few
//! interfaces that need a syscall ([`linux`]). It does not require any
//! particular runtime, but can optionally be combined with the Rust Standard
//! Library.

#![no_std]

extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod ffi;
pub mod linux;
