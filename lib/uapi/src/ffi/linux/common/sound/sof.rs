//! # Sound Open Firmware
//!
//! Sound Open Firmware (SOF) exchanges binary blobs with user space, for
//! instance via topology files or ALSA controls. Each blob starts with an
//! [`AbiHdr`] that tags the payload with the ABI version it was built for.
//!
//! Topology files may further embed a [`Manifest`], a versioned list of
//! type-length-value records ([`ManifestTlv`]). The only type known so far is
//! [`MANIFEST_DATA_TYPE_NHLT`], which carries ACPI NHLT data.
//!
//! The firmware is little-endian. The structures use
//! [`osi::ffi::abi::le`] so they decode correctly on any host.

use osi::ffi::abi::le;

pub const ABI_MAGIC: u32 = 0x00464f53;

pub const ABI_MAJOR_SHIFT: u32 = 24;
pub const ABI_MAJOR_MASK: u32 = 0xff;
pub const ABI_MINOR_SHIFT: u32 = 12;
pub const ABI_MINOR_MASK: u32 = 0xfff;
pub const ABI_PATCH_SHIFT: u32 = 0;
pub const ABI_PATCH_MASK: u32 = 0xfff;

/// Packs an ABI version as used by [`AbiHdr::abi`].
#[must_use]
pub const fn abi_version(major: u32, minor: u32, patch: u32) -> u32 {
    ((major & ABI_MAJOR_MASK) << ABI_MAJOR_SHIFT)
        | ((minor & ABI_MINOR_MASK) << ABI_MINOR_SHIFT)
        | ((patch & ABI_PATCH_MASK) << ABI_PATCH_SHIFT)
}

#[must_use]
pub const fn abi_version_major(v: u32) -> u32 {
    (v >> ABI_MAJOR_SHIFT) & ABI_MAJOR_MASK
}

#[must_use]
pub const fn abi_version_minor(v: u32) -> u32 {
    (v >> ABI_MINOR_SHIFT) & ABI_MINOR_MASK
}

#[must_use]
pub const fn abi_version_patch(v: u32) -> u32 {
    (v >> ABI_PATCH_SHIFT) & ABI_PATCH_MASK
}

/// Packed header of a firmware blob, followed by `size` bytes of data.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct AbiHdr {
    pub magic: le::packed::U32,
    pub r#type: le::packed::U32,
    pub size: le::packed::U32,
    pub abi: le::packed::U32,
    pub reserved: [le::packed::U32; 4],
    pub data: [le::packed::U32; 0],
}

pub const MANIFEST_DATA_TYPE_NHLT: u32 = 1;

/// Manifest record, followed by `size` bytes of data.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct ManifestTlv {
    pub r#type: le::U32,
    pub size: le::U32,
    pub data: [u8; 0],
}

/// Manifest header, followed by `count` records.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Manifest {
    pub abi_major: le::U16,
    pub abi_minor: le::U16,
    pub abi_patch: le::U16,
    pub count: le::U16,
    pub items: [ManifestTlv; 0],
}
