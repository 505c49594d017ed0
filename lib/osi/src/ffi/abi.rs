//! # Platform ABIs
//!
//! This module provides type definitions for a set of platform ABIs. This can
//! be used to introspect or synthesize objects of foreign platform ABIs.
//!
//! Each sub-module exports the same set of symbols. A trait would describe
//! this better, but traits cannot carry constant functions, so a set of
//! modules is used instead.
//!
//! [`native`] always represents the compilation target and aliases the
//! builtin primitives. [`auto`] aliases one of the fixed definitions that
//! matches the target, without using builtin primitives.
//!
//! [`le`] is not a platform ABI. It describes little-endian data with natural
//! alignment, as used by device interfaces like virtio or PCI, and
//! [`le::packed`] describes the same data without any alignment.

// Little-endian integer with the given native type and alignment.
type Le<Native, Alignment> = crate::ffi::Integer<
    crate::ffi::LittleEndian<Native>,
    Alignment,
>;

// Symbols shared by all ABIs.
mod shared {
    /// Creates a number by converting the input value from native
    /// representation into the representation of the target type.
    ///
    /// This is the preferred way to initialize foreign ordered datatypes with
    /// a logical value, so a machine of the foreign platform reads the same
    /// logical value. For native datatypes this is the identity.
    pub const fn num<Endian: crate::ffi::NativeEndian<Raw>, Raw: Copy>(r: Raw) -> Endian {
        crate::ffi::from_native(r)
    }
}

/// # Native ABI
///
/// Aliases the builtin primitives of Rust, and thus always represents the ABI
/// of the compilation target.
pub mod native {
    pub type I8 = i8;
    pub type I16 = i16;
    pub type I32 = i32;
    pub type I64 = i64;
    pub type I128 = i128;
    pub type Isize = isize;

    pub type U8 = u8;
    pub type U16 = u16;
    pub type U32 = u32;
    pub type U64 = u64;
    pub type U128 = u128;
    pub type Usize = usize;

    pub use super::shared::*;
}

/// # System-V x86 ABI
///
/// The 32-bit ABI of System-V for x86 systems, as used by Linux.
pub mod x86_sysv {
    use crate::align;

    pub type I8 = super::Le<i8, align::AlignAs<1>>;
    pub type I16 = super::Le<i16, align::AlignAs<2>>;
    pub type I32 = super::Le<i32, align::AlignAs<4>>;
    pub type I64 = super::Le<i64, align::AlignAs<4>>;
    pub type I128 = super::Le<i128, align::AlignAs<4>>;
    pub type Isize = super::Le<i32, align::AlignAs<4>>;

    pub type U8 = super::Le<u8, align::AlignAs<1>>;
    pub type U16 = super::Le<u16, align::AlignAs<2>>;
    pub type U32 = super::Le<u32, align::AlignAs<4>>;
    pub type U64 = super::Le<u64, align::AlignAs<4>>;
    pub type U128 = super::Le<u128, align::AlignAs<4>>;
    pub type Usize = super::Le<u32, align::AlignAs<4>>;

    pub use super::shared::*;
}

/// # System-V x86-64 ABI
///
/// The 64-bit ABI of System-V for x86 systems, as used by Linux.
pub mod x86_64_sysv {
    use crate::align;

    pub type I8 = super::Le<i8, align::AlignAs<1>>;
    pub type I16 = super::Le<i16, align::AlignAs<2>>;
    pub type I32 = super::Le<i32, align::AlignAs<4>>;
    pub type I64 = super::Le<i64, align::AlignAs<8>>;
    pub type I128 = super::Le<i128, align::AlignAs<16>>;
    pub type Isize = super::Le<i64, align::AlignAs<8>>;

    pub type U8 = super::Le<u8, align::AlignAs<1>>;
    pub type U16 = super::Le<u16, align::AlignAs<2>>;
    pub type U32 = super::Le<u32, align::AlignAs<4>>;
    pub type U64 = super::Le<u64, align::AlignAs<8>>;
    pub type U128 = super::Le<u128, align::AlignAs<16>>;
    pub type Usize = super::Le<u64, align::AlignAs<8>>;

    pub use super::shared::*;
}

/// # Little-Endian Device Layout
///
/// Little-endian integers with natural alignment, independent of the host.
pub mod le {
    use crate::align;

    pub type I8 = super::Le<i8, align::AlignAs<1>>;
    pub type I16 = super::Le<i16, align::AlignAs<2>>;
    pub type I32 = super::Le<i32, align::AlignAs<4>>;
    pub type I64 = super::Le<i64, align::AlignAs<8>>;

    pub type U8 = super::Le<u8, align::AlignAs<1>>;
    pub type U16 = super::Le<u16, align::AlignAs<2>>;
    pub type U32 = super::Le<u32, align::AlignAs<4>>;
    pub type U64 = super::Le<u64, align::AlignAs<8>>;

    pub use super::shared::*;

    /// # Packed Little-Endian Layout
    ///
    /// Same as the parent, but with an alignment of 1 for all types.
    pub mod packed {
        use crate::align;

        pub type I16 = super::super::Le<i16, align::AlignAs<1>>;
        pub type I32 = super::super::Le<i32, align::AlignAs<1>>;
        pub type I64 = super::super::Le<i64, align::AlignAs<1>>;

        pub type U16 = super::super::Le<u16, align::AlignAs<1>>;
        pub type U32 = super::super::Le<u32, align::AlignAs<1>>;
        pub type U64 = super::super::Le<u64, align::AlignAs<1>>;

        pub use super::super::shared::*;
    }
}

#[cfg(all(
    target_arch = "x86",
    target_family = "unix",
))]
pub use x86_sysv as auto;

#[cfg(all(
    target_arch = "x86_64",
    target_family = "unix",
))]
pub use x86_64_sysv as auto;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<x86_sysv::U64>(), 8);
        assert_eq!(align_of::<x86_sysv::U64>(), 4);
        assert_eq!(size_of::<x86_sysv::Usize>(), 4);
        assert_eq!(size_of::<x86_64_sysv::U64>(), 8);
        assert_eq!(align_of::<x86_64_sysv::U64>(), 8);
        assert_eq!(align_of::<x86_64_sysv::U128>(), 16);

        assert_eq!(align_of::<le::U32>(), 4);
        assert_eq!(align_of::<le::packed::U64>(), 1);
        assert_eq!(size_of::<le::packed::U64>(), 8);
    }

    #[test]
    fn numbers() {
        let v: le::U32 = le::num(0x01020304u32);
        let p: le::packed::U16 = le::packed::num(0x0102u16);
        let n: native::U16 = native::num(71u16);

        assert_eq!(crate::mem::as_bytes(&v), &[4, 3, 2, 1]);
        assert_eq!(crate::mem::as_bytes(&p), &[2, 1]);
        assert_eq!(n, 71);

        const C: x86_64_sysv::U16 = x86_64_sysv::num(0xff00u16);
        let c: u16 = C.to_native();
        assert_eq!(c, 0xff00);
    }
}
