//! # Endianness Utilities
//!
//! This module provides wrappers that pin the byte order of a primitive
//! integer, independent of the byte order of the machine.

/// Conversion between the native byte order and the byte order of `Self`.
///
/// `Raw` is the native primitive behind the type. Types already in native
/// order implement this trait as identity. Types in foreign order set
/// [`Self::NEEDS_SWAP`] and all conversions reverse the bytes.
///
/// All methods have default implementations which are also available as
/// `const fn` free functions of this module.
///
/// ## Safety
///
/// Implementors guarantee that `Self` can be created from a byte copy of
/// `Raw` (and vice versa), with truncation or uninitialized padding if the
/// sizes differ. If [`Self::NEEDS_SWAP`] is `true`, reversing all bytes of
/// `Raw` must yield a valid value as well.
pub unsafe trait NativeEndian<Raw: Copy>: Copy {
    /// Whether the encoding of `Self` is the reverse of the native encoding.
    const NEEDS_SWAP: bool = false;

    /// Wraps the raw, possibly foreign-ordered value `raw` unmodified.
    #[inline]
    #[must_use]
    fn from_raw(raw: Raw) -> Self {
        self::from_raw(raw)
    }

    /// Returns the raw, possibly foreign-ordered value unmodified.
    #[inline]
    #[must_use]
    fn to_raw(self) -> Raw {
        self::to_raw(self)
    }

    /// Encodes the native value `native` in the order of `Self`.
    #[inline]
    #[must_use]
    fn from_native(native: Raw) -> Self {
        self::from_native(native)
    }

    /// Decodes the value into native order.
    #[inline]
    #[must_use]
    fn to_native(self) -> Raw {
        self::to_native(self)
    }
}

/// An integer stored in big-endian order.
///
/// Same size and alignment as `Raw`. Comparison, hashing, ordering and
/// formatting act on the native value.
#[repr(transparent)]
pub struct BigEndian<Raw>(Raw);

/// An integer stored in little-endian order.
///
/// Same size and alignment as `Raw`. Comparison, hashing, ordering and
/// formatting act on the native value.
#[repr(transparent)]
pub struct LittleEndian<Raw>(Raw);

/// Wraps the raw, possibly foreign-ordered value `r` unmodified.
#[inline]
#[must_use]
pub const fn from_raw<Endian: NativeEndian<Raw>, Raw: Copy>(r: Raw) -> Endian {
    // SAFETY: The trait guarantees `Raw` and `Endian` are interchangeable.
    unsafe { crate::mem::transmute_copy_uninit(&r) }
}

/// Returns the raw, possibly foreign-ordered value of `e` unmodified.
#[inline]
#[must_use]
pub const fn to_raw<Endian: NativeEndian<Raw>, Raw: Copy>(e: Endian) -> Raw {
    // SAFETY: The trait guarantees `Raw` and `Endian` are interchangeable.
    unsafe { crate::mem::transmute_copy_uninit(&e) }
}

/// Encodes the native value `r` in the order of `Endian`.
#[inline]
#[must_use]
pub const fn from_native<Endian: NativeEndian<Raw>, Raw: Copy>(r: Raw) -> Endian {
    if Endian::NEEDS_SWAP {
        // SAFETY: The trait guarantees byte-swaps are valid on `Raw`.
        from_raw(unsafe { crate::mem::bswap_copy(&r) })
    } else {
        from_raw(r)
    }
}

/// Decodes `e` into native order.
#[inline]
#[must_use]
pub const fn to_native<Endian: NativeEndian<Raw>, Raw: Copy>(e: Endian) -> Raw {
    if Endian::NEEDS_SWAP {
        // SAFETY: The trait guarantees byte-swaps are valid on `Raw`.
        unsafe { crate::mem::bswap_copy(&to_raw(e)) }
    } else {
        to_raw(e)
    }
}

macro_rules! implement_order {
    ($($raw:ty,)*) => {
        $(
            unsafe impl NativeEndian<$raw> for $raw {
            }

            unsafe impl NativeEndian<$raw> for BigEndian<$raw> {
                const NEEDS_SWAP: bool = cfg!(target_endian = "little");
            }

            unsafe impl NativeEndian<$raw> for LittleEndian<$raw> {
                const NEEDS_SWAP: bool = cfg!(target_endian = "big");
            }
        )*
    };
}

implement_order! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
}

macro_rules! implement_wrapper {
    ($($wrapper:ident,)*) => {
        $(
            impl<Raw> $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy,
            {
                /// Wraps the raw, possibly foreign-ordered value `raw`
                /// unmodified.
                #[inline]
                #[must_use]
                pub const fn from_raw(raw: Raw) -> Self {
                    self::from_raw(raw)
                }

                /// Returns the raw, possibly foreign-ordered value
                /// unmodified.
                #[inline]
                #[must_use]
                pub const fn to_raw(self) -> Raw {
                    self::to_raw(self)
                }

                /// Encodes the native value `native`.
                #[inline]
                #[must_use]
                pub const fn from_native(native: Raw) -> Self {
                    self::from_native(native)
                }

                /// Decodes the value into native order.
                #[inline]
                #[must_use]
                pub const fn to_native(self) -> Raw {
                    self::to_native(self)
                }
            }

            impl<Raw: Clone> Clone for $wrapper<Raw> {
                #[inline]
                fn clone(&self) -> Self {
                    Self(self.0.clone())
                }
            }

            impl<Raw: Copy> Copy for $wrapper<Raw> {
            }

            // Print the raw value, so foreign order stays visible.
            impl<Raw: core::fmt::Debug> core::fmt::Debug for $wrapper<Raw> {
                fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    fmt.debug_tuple(stringify!($wrapper)).field(&self.0).finish()
                }
            }

            impl<Raw> Default for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + Default,
            {
                fn default() -> Self {
                    Self::from_native(Default::default())
                }
            }

            impl<Raw> core::fmt::Display for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + core::fmt::Display,
            {
                fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    <Raw as core::fmt::Display>::fmt(&self.to_native(), fmt)
                }
            }

            impl<Raw> PartialEq for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + PartialEq,
            {
                fn eq(&self, other: &Self) -> bool {
                    self.to_native() == other.to_native()
                }
            }

            impl<Raw> Eq for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + Eq,
            {
            }

            impl<Raw> PartialOrd for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + PartialOrd,
            {
                fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                    self.to_native().partial_cmp(&other.to_native())
                }
            }

            impl<Raw> Ord for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + Ord,
            {
                fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                    self.to_native().cmp(&other.to_native())
                }
            }

            impl<Raw> core::hash::Hash for $wrapper<Raw>
            where
                Self: NativeEndian<Raw>,
                Raw: Copy + core::hash::Hash,
            {
                fn hash<Op: core::hash::Hasher>(&self, state: &mut Op) {
                    self.to_native().hash(state)
                }
            }
        )*
    };
}

implement_wrapper! {
    BigEndian,
    LittleEndian,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<BigEndian<u8>>(), 1);
        assert_eq!(size_of::<LittleEndian<u64>>(), 8);
        assert_eq!(align_of::<BigEndian<u64>>(), align_of::<u64>());
        assert_eq!(align_of::<LittleEndian<u16>>(), align_of::<u16>());
    }

    #[test]
    fn conversion() {
        let r: u32 = 0x11223344;
        let b: BigEndian<u32> = BigEndian::from_native(r);
        let l: LittleEndian<u32> = LittleEndian::from_native(r);

        assert_eq!(b.to_native(), r);
        assert_eq!(l.to_native(), r);
        assert_eq!(b.to_raw().to_ne_bytes(), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(l.to_raw().to_ne_bytes(), [0x44, 0x33, 0x22, 0x11]);

        let raw: LittleEndian<u32> = LittleEndian::from_raw(r);
        assert_eq!(raw.to_raw(), r);
    }

    #[test]
    fn constant() {
        const L: LittleEndian<u16> = from_native(0x0102u16);

        assert_eq!(L.to_native(), 0x0102);
        assert_eq!(crate::mem::as_bytes(&L), &[0x02, 0x01]);
    }

    #[test]
    fn traits() {
        let b: BigEndian<u32> = BigEndian::from_native(71);
        let l: LittleEndian<u32> = LittleEndian::from_native(71);

        assert_eq!(std::format!("{}", b), "71");
        assert_eq!(std::format!("{}", l), "71");
        assert_eq!(
            std::format!("{:?}", LittleEndian::<u32>::from_raw(71)),
            "LittleEndian(71)",
        );
        assert_eq!(<BigEndian<u32> as Default>::default(), BigEndian::from_native(0));
        assert!(b < BigEndian::from_native(256));
        assert!(l < LittleEndian::from_native(256));
    }
}
