//! # Definitions of System Interfaces
//!
//! Raw definitions of constants, structures and types of system interfaces,
//! usable without any of the higher abstractions of this crate. This module
//! provides definitions only, no implementation.
//!
//! Unless explicitly specified, the definitions are architecture independent
//! and suitable to access data of foreign machines, as is common for
//! introspection or debugging.
//!
//! ## Transpose Rules
//!
//! Definitions follow the C headers closely, with a few adjustments so the
//! result stays predictable:
//!
//!  * Names follow the Rust scheme: `CamelCase` for types, `UPPER_CASE` for
//!    constants, `snake_case` for everything else.
//!
//!  * Prefixes are stripped if the module path already provides them, so
//!    `VIRTIO_PCI_CAP_COMMON_CFG` becomes `virtio_pci::CAP_COMMON_CFG` and
//!    `struct virtio_pci_cap` becomes `virtio_pci::Cap`.
//!
//!  * C-enums are provided as raw integer constants rather than Rust enums,
//!    so unknown or vendor-specific values remain representable.
//!
//!  * Function-like macros become `const fn`.
//!
//!  * Flexible array members become zero-length arrays. Packed structures are
//!    modeled with alignment-1 field types and `repr(C)`.

pub mod linux;
