// Common Linux Definitions
//
// Shared implementation of all platform-modules, included by each of them
// via:
//
// ```rust,ignore
// #[path = "../common/mod.rs"]
// mod common;
// pub use common::*;
// ```
//
// The including module must provide `super::abi`, an ABI module with the
// same symbols as `osi::ffi::abi::native`. Sub-modules only ever use the
// symbols re-exported here, never the including module directly.
//
// `virtio_pci` and `sound` describe little-endian device layouts and do not
// depend on the platform ABI. They are still recompiled per platform so each
// platform-module exposes the full set of interfaces.

use super::abi as abi;

pub mod errno;
pub mod rdma_netlink;
pub mod sound;
pub mod termios;
pub mod virtio_pci;
