//! # Byte-Level Memory Helpers
//!
//! Utilities to copy, reinterpret and compare values on the level of their
//! underlying bytes. They back the endian conversions of [`crate::ffi`] and
//! the byte-buffer decoders built on top of it.

// Byte-wise copy of `count` elements that tolerates unaligned pointers on
// either side.
const unsafe fn copy_bytes<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: Raw pointers may alias freely. The caller guarantees both
    //         sides span `count` elements of a single allocation, which
    //         bounds the product by `isize::MAX`.
    unsafe {
        core::ptr::copy(
            src as *const u8,
            dst as *mut u8,
            count * size_of::<T>(),
        )
    }
}

/// Reinterprets a byte-wise copy of `src` as `Dst`.
///
/// Unlike [`core::mem::transmute_copy`], source and destination may differ in
/// size. A larger source is truncated; a smaller source leaves the trailing
/// bytes of the destination uninitialized.
///
/// ## Safety
///
/// The caller must guarantee that a `Dst` built from the (truncated or
/// padded) bytes of `src` is valid.
#[inline]
#[must_use]
pub const unsafe fn transmute_copy_uninit<Src, Dst>(src: &Src) -> Dst {
    // SAFETY: Delegated to the caller.
    unsafe {
        if size_of::<Src>() < size_of::<Dst>() {
            let mut dst = core::mem::MaybeUninit::<Dst>::uninit();
            copy_bytes(src as *const Src, dst.as_mut_ptr() as *mut Src, 1);
            dst.assume_init()
        } else if align_of::<Dst>() > align_of::<Src>() {
            core::ptr::read_unaligned(src as *const Src as *const Dst)
        } else {
            core::ptr::read(src as *const Src as *const Dst)
        }
    }
}

// Reverses the bytes of `v` one at a time. Works for any size.
const unsafe fn bswap_bytewise<T>(v: &T) -> T {
    let mut r = core::mem::MaybeUninit::<T>::uninit();
    let src = v as *const T as *const u8;
    let dst = r.as_mut_ptr() as *mut u8;
    let n = size_of::<T>();

    // SAFETY: Both pointers cover `n` bytes and the caller guarantees `T`
    //         stays valid once reversed.
    unsafe {
        let mut i = 0;
        while i < n {
            core::ptr::copy(src.add(n - i - 1), dst.add(i), 1);
            i += 1;
        }
        r.assume_init()
    }
}

/// Returns a copy of `v` with the order of its bytes reversed.
///
/// Sizes of 1, 2, 4, 8 and 16 bytes use the native byte-swap of the matching
/// primitive integer, anything else is reversed byte by byte.
///
/// ## Safety
///
/// The caller must guarantee that `T` remains valid with its bytes reversed.
#[must_use]
pub const unsafe fn bswap_copy<T>(v: &T) -> T {
    use core::mem::transmute_copy as tc;

    // SAFETY: Sizes are matched exactly, validity is up to the caller.
    unsafe {
        match size_of::<T>() {
            1 => tc(v),
            2 => tc(&u16::swap_bytes(tc(v))),
            4 => tc(&u32::swap_bytes(tc(v))),
            8 => tc(&u64::swap_bytes(tc(v))),
            16 => tc(&u128::swap_bytes(tc(v))),
            _ => bswap_bytewise(v),
        }
    }
}

/// Views any value as a slice of its bytes.
///
/// Padding bytes are included and carry no stable value.
#[must_use]
pub const fn as_bytes<T>(v: &T) -> &[u8] {
    // SAFETY: The slice covers exactly the memory of `v` and borrows it for
    //         the same lifetime, preventing mutation meanwhile.
    unsafe {
        core::slice::from_raw_parts(v as *const T as *const u8, size_of::<T>())
    }
}

/// Reads a `T` from the leading bytes of `data`.
///
/// Returns `None` if `data` is shorter than `T`. Any trailing bytes are
/// ignored. The read tolerates any alignment of `data`.
///
/// ## Safety
///
/// The caller must guarantee that any byte pattern is a valid `T`. This holds
/// for structures made up of integers and arrays of integers only.
#[must_use]
pub unsafe fn read_prefix<T>(data: &[u8]) -> Option<T> {
    if data.len() < size_of::<T>() {
        return None;
    }

    // SAFETY: Length is checked above, validity is up to the caller.
    Some(unsafe { core::ptr::read_unaligned(data.as_ptr() as *const T) })
}

/// Compares the backing memory of two values.
///
/// Sizes must match and every byte must compare equal, including padding.
#[must_use]
pub fn eq<A, B>(a: &A, b: &B) -> bool {
    as_bytes(a) == as_bytes(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transmute_const() {
        const C: u16 = unsafe { transmute_copy_uninit(&71u32) };

        assert_eq!(C, 71);
    }

    #[test]
    fn transmute_mismatch() {
        #[derive(Clone, Copy)]
        #[repr(align(4))]
        struct Wide {
            v: u16,
        }

        let s: u16 = 71;
        let w: Wide = unsafe { transmute_copy_uninit(&s) };
        let back: u16 = unsafe { transmute_copy_uninit(&w) };

        assert_eq!(size_of::<Wide>(), 4);
        assert_eq!(w.v, 71);
        assert_eq!(back, 71);
    }

    #[test]
    fn bswap() {
        unsafe {
            assert_eq!(bswap_copy(&0x12u8), 0x12u8);
            assert_eq!(bswap_copy(&0x1234u16), 0x3412u16);
            assert_eq!(bswap_copy(&0x12345678u32), 0x78563412u32);
            assert_eq!(bswap_copy(&0x0011223344556677u64), 0x7766554433221100u64);
            assert_eq!(bswap_copy(&[0x00u8, 0x11, 0x22]), [0x22u8, 0x11, 0x00]);
        }
    }

    #[test]
    fn prefix() {
        let data = [0x01u8, 0x02, 0x03, 0x04, 0x05];

        let v: u32 = unsafe { read_prefix(&data[1..]) }.unwrap();
        assert_eq!(v, u32::from_ne_bytes([0x02, 0x03, 0x04, 0x05]));

        let short: Option<u64> = unsafe { read_prefix(&data) };
        assert!(short.is_none());
    }

    #[test]
    fn byte_eq() {
        let v: u16 = 0xf0f0;

        assert!(eq(&v, &0xf0f0u16));
        assert!(eq(&v, &[0xf0u8, 0xf0]));
        assert!(!eq(&v, &0x00f0u16));
        assert!(!eq(&v, &0xf0f0u32));
    }
}
