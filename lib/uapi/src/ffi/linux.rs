//! # Definitions of Linux System Interfaces
//!
//! Raw definitions of Linux kernel interfaces: constants, structures and
//! helpers transposed from the kernel `uapi` headers. Higher abstractions
//! live in [`crate::linux`].
//!
//! The definitions are provided as a set of platform-modules which are all
//! syntactically equivalent, but use the data types of different platforms.
//! Use [`native`] for the platform of the compilation target, or one of the
//! fixed platforms to inspect data of a foreign machine.
//!
//! Covered interfaces:
//!
//!  * `errno`: error codes.
//!  * `termios`: terminal window size.
//!  * `virtio_pci`: virtio over PCI, both legacy and modern layouts, plus
//!    admin commands.
//!  * `rdma_netlink`: RDMA netlink clients, operations and attributes.
//!  * `sound::sof`: Sound Open Firmware blob headers and manifests.

// Each platform module defines `abi` via `osi::ffi::abi` and then includes
// the shared `common` sources, which resolve all platform types through
// `super::abi`. Rust has no module generics and traits cannot carry const
// functions, so the common sources are compiled once per platform instead.
//
//  - `x86` and `x86_64` are real platforms with fixed, explicit layouts.
//  - `native` recompiles the platform of the compilation target with the
//    builtin Rust primitives as ABI. Unknown targets fall back to `libc`.
//  - `libc` (feature `libc`) aliases the definitions of the `libc` crate
//    where it has them, and uses the common sources otherwise.
//  - `target` is a plain alias of the fixed platform of the target.
//
// Platform directories use `<platform>/mod.rs`, so the relative
// `#[path = "../common/..."]` includes resolve from every platform.


pub mod libc;
pub mod native;

/// # Platform Module for x86
///
/// This module exposes all supported interfaces of [`crate::ffi::linux`] for
/// the x86 platform.
pub mod x86 {
    pub use osi::ffi::abi::x86_sysv as abi;

    #[path = "mod.rs"]
    mod inner;

    pub use inner::*;
}

/// # Platform Module for x86_64
///
/// This module exposes all supported interfaces of [`crate::ffi::linux`] for
/// the x86_64 platform.
pub mod x86_64 {
    pub use osi::ffi::abi::x86_64_sysv as abi;

    #[path = "mod.rs"]
    mod inner;

    pub use inner::*;
}

/// # Pseudo-Module for the Target Platform
///
/// This module is a straight alias of the platform-module that matches the
/// compilation target. If no platform-module exists for the compilation
/// target, this will be an alias of `native`.
#[cfg(target_arch = "x86")]
pub use x86 as target;

#[cfg(target_arch = "x86_64")]
pub use x86_64 as target;

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub use native as target;
