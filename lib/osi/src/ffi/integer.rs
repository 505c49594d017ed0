//! # Fixed ABI Integers
//!
//! This module provides [`Integer`], an integer with an explicit size,
//! alignment and byte order.

use crate::{align, ffi};

/// An integer whose layout is fully spelled out by its type.
///
/// Builtin primitives always follow the ABI of the compilation target. Data
/// shared with devices, firmware or foreign platforms needs a fixed layout
/// instead:
///
/// - **Alignment** matches `Alignment` exactly, both lower and higher than
///   the natural alignment of `Value`.
/// - **Size** matches `Value`, plus trailing padding if the alignment exceeds
///   the size.
/// - **Byte order** is that of `Value`, usually [`ffi::LittleEndian`] or
///   [`ffi::BigEndian`]. [`Integer::to_native()`] decodes it.
#[repr(C)]
pub struct Integer<Value, Alignment: align::Aligned> {
    value: ffi::Packed<Value>,
    alignment: [Alignment::Align; 0],
}

impl<Value, Alignment: align::Aligned> Integer<Value, Alignment> {
    /// Wraps `v` unmodified.
    #[inline]
    #[must_use]
    pub const fn new(v: Value) -> Self {
        Self {
            value: ffi::Packed::new(v),
            alignment: [],
        }
    }

    /// Unwraps the inner value.
    #[inline(always)]
    #[must_use]
    pub const fn into_inner(self) -> Value {
        // SAFETY: `self` is leaked after the read, so the copy left behind
        //         is never observed.
        unsafe {
            let r = core::ptr::read(&raw const self.value);
            core::mem::forget(self);
            r.into_inner()
        }
    }

    /// Overwrites the inner value.
    #[inline]
    pub fn set(&mut self, v: Value) {
        self.value.set(v);
    }
}

impl<Value: Copy, Alignment: align::Aligned> Integer<Value, Alignment> {
    /// Returns a copy of the inner value, unmodified.
    #[inline(always)]
    #[must_use]
    pub const fn get(&self) -> Value {
        self.value.get()
    }

    /// Wraps the raw, possibly foreign-ordered value `raw` unmodified.
    #[inline]
    #[must_use]
    pub const fn from_raw<Raw>(raw: Raw) -> Self
    where
        Self: ffi::NativeEndian<Raw>,
        Raw: Copy,
    {
        ffi::endian::from_raw(raw)
    }

    /// Returns the raw, possibly foreign-ordered value unmodified.
    #[inline]
    #[must_use]
    pub const fn to_raw<Raw>(self) -> Raw
    where
        Self: ffi::NativeEndian<Raw>,
        Raw: Copy,
    {
        ffi::endian::to_raw(self)
    }

    /// Encodes the native value `native`.
    #[inline]
    #[must_use]
    pub const fn from_native<Raw>(native: Raw) -> Self
    where
        Self: ffi::NativeEndian<Raw>,
        Raw: Copy,
    {
        ffi::endian::from_native(native)
    }

    /// Decodes the value into native order.
    #[inline]
    #[must_use]
    pub const fn to_native<Raw>(self) -> Raw
    where
        Self: ffi::NativeEndian<Raw>,
        Raw: Copy,
    {
        ffi::endian::to_native(self)
    }
}

// SAFETY: `Integer` is a `Value` followed by zero-sized alignment padding, so
//         byte copies and byte swaps carry over from `Value`.
unsafe impl<Value, Alignment, Raw> ffi::NativeEndian<Raw> for Integer<Value, Alignment>
where
    Value: ffi::NativeEndian<Raw>,
    Alignment: align::Aligned,
    Raw: Copy,
{
    const NEEDS_SWAP: bool = Value::NEEDS_SWAP;
}

impl<Value: Copy, Alignment: align::Aligned> Clone for Integer<Value, Alignment> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Value: Copy, Alignment: align::Aligned> Copy for Integer<Value, Alignment> {
}

impl<Value, Alignment> core::fmt::Debug for Integer<Value, Alignment>
where
    Value: Copy + core::fmt::Debug,
    Alignment: align::Aligned,
{
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_tuple("Integer").field(&self.get()).finish()
    }
}

impl<Value, Alignment> Default for Integer<Value, Alignment>
where
    Value: Default,
    Alignment: align::Aligned,
{
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<Value, Alignment> core::fmt::Display for Integer<Value, Alignment>
where
    Value: Copy + core::fmt::Display,
    Alignment: align::Aligned,
{
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <Value as core::fmt::Display>::fmt(&self.get(), fmt)
    }
}

impl<Value, Alignment> PartialEq for Integer<Value, Alignment>
where
    Value: Copy + PartialEq,
    Alignment: align::Aligned,
{
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<Value, Alignment> Eq for Integer<Value, Alignment>
where
    Value: Copy + Eq,
    Alignment: align::Aligned,
{
}

impl<Value, Alignment> PartialOrd for Integer<Value, Alignment>
where
    Value: Copy + PartialOrd,
    Alignment: align::Aligned,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<Value, Alignment> Ord for Integer<Value, Alignment>
where
    Value: Copy + Ord,
    Alignment: align::Aligned,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.get().cmp(&other.get())
    }
}

impl<Value, Alignment> core::hash::Hash for Integer<Value, Alignment>
where
    Value: Copy + core::hash::Hash,
    Alignment: align::Aligned,
{
    fn hash<Op: core::hash::Hasher>(&self, state: &mut Op) {
        self.get().hash(state)
    }
}

impl<Value, Alignment: align::Aligned> From<Value> for Integer<Value, Alignment> {
    #[inline]
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Le32 = Integer<ffi::LittleEndian<u32>, align::AlignAs<4>>;
    type Le64x4 = Integer<ffi::LittleEndian<u64>, align::AlignAs<4>>;
    type Be16x1 = Integer<ffi::BigEndian<u16>, align::AlignAs<1>>;

    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<Le32>(), 4);
        assert_eq!(align_of::<Le32>(), 4);
        assert_eq!(size_of::<Le64x4>(), 8);
        assert_eq!(align_of::<Le64x4>(), 4);
        assert_eq!(size_of::<Be16x1>(), 2);
        assert_eq!(align_of::<Be16x1>(), 1);

        // Over-alignment pads the size up.
        assert_eq!(size_of::<Integer<u8, align::AlignAs<16>>>(), 16);
        assert_eq!(align_of::<Integer<u8, align::AlignAs<16>>>(), 16);
    }

    #[test]
    fn conversion() {
        let v = Le64x4::from_native(0x0102030405060708u64);

        let n: u64 = v.to_native();
        assert_eq!(n, 0x0102030405060708);
        assert_eq!(crate::mem::as_bytes(&v), &[8, 7, 6, 5, 4, 3, 2, 1]);

        let b = Be16x1::from_native(0x0102u16);
        assert_eq!(crate::mem::as_bytes(&b), &[1, 2]);
        assert_eq!(b.get().to_native(), 0x0102);
    }

    #[test]
    fn access() {
        let mut v: Integer<u16, align::AlignAs<2>> = Integer::new(71);

        assert_eq!(v.get(), 71);
        v.set(73);
        assert_eq!(v, 73.into());
        assert!(v > Integer::new(71));
        assert_eq!(std::format!("{} {:?}", v, v), "73 Integer(73)");
        assert_eq!(v.into_inner(), 73);
    }
}
