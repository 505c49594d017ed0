//! # Foreign Function Interfaces
//!
//! This module is a collection of utilities that aid implementation of foreign
//! function interfaces in Rust.
//!
//! ## Foreign ABI
//!
//! When accessing foreign ABIs, care must be taken to ensure datatypes have
//! the correct layout. The builtin primitives like `u32`, `i64`, etc., always
//! follow the native ABI, and thus cannot be reliably used to represent
//! data-structures of foreign ABIs. The utilities in this module can be used
//! instead.
//!
//! A virtio device, for instance, always exposes its configuration in
//! little-endian, independent of the host. A 32-bit host decoding structures
//! of a 64-bit peer sees `u64` with an alignment of 4 rather than 8. In both
//! cases [`Integer`] models the exact layout of the foreign side.

pub mod abi;
pub mod endian;
pub mod integer;
pub mod packed;

pub use endian::{
    BigEndian,
    from_native,
    from_raw,
    LittleEndian,
    NativeEndian,
    to_native,
    to_raw,
};
pub use integer::Integer;
pub use packed::Packed;
