//! # Bounded Decoders for Linux Device and Firmware Formats
//!
//! This library decodes the binary formats defined in [`uapi`] from plain
//! byte buffers: virtio-PCI capability chains and admin commands, Sound Open
//! Firmware blobs and manifests, and RDMA netlink attribute streams.
//!
//! All decoders borrow the input and check every declared length against it
//! before reading. Malformed input yields an error, never a panic or an
//! out-of-bounds read. Unknown but well-formed records are reported to the
//! caller and logged via [`tracing`], they never abort decoding.

#![no_std]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod netlink;
pub mod sof;
pub mod virtio;

/// Structures that are valid for any byte pattern.
///
/// ## Safety
///
/// Implementors must consist of integers and arrays of integers only, without
/// any padding.
pub(crate) unsafe trait Plain: Copy {
}

/// Reads a `T` located at `offset` in `data`, if it fits.
pub(crate) fn read<T: Plain>(data: &[u8], offset: usize) -> Option<T> {
    let tail = data.get(offset..)?;

    // SAFETY: `Plain` guarantees any byte pattern is a valid `T`.
    unsafe { osi::mem::read_prefix(tail) }
}
