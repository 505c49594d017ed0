// Platform Module for x86
//
// Included by `../../linux.rs` and by the `native` pseudo-module, which is
// why documentation lives in outer comments. The including module picks the
// ABI, this module re-uses it via `use super::abi`.

use super::abi;

#[path = "../common/mod.rs"]
mod common;

pub use common::*;
