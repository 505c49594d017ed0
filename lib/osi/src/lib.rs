//! # Operating System Independent FFI Building Blocks
//!
//! This library provides the primitives needed to describe binary interfaces
//! independent of the machine the code runs on: explicit alignment, explicit
//! endianness, and fixed-size integers combining both. It does not require
//! any particular runtime, but can optionally be combined with the Rust
//! Standard Library.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub extern crate core;

pub mod align;
pub mod ffi;
pub mod mem;
