//! # Packed Values
//!
//! This module provides [`Packed`], a wrapper that lowers the alignment of any
//! value to 1 while keeping its size.

/// `repr(packed)` wrapper around a single value.
///
/// References to a packed value cannot be created safely, so all accessors
/// copy the value in or out, similar to [`core::cell::Cell`].
#[derive(Copy, Default)]
#[repr(C, packed)]
pub struct Packed<Value>(Value);

impl<Value> Packed<Value> {
    /// Wraps `v`.
    #[inline]
    #[must_use]
    pub const fn new(v: Value) -> Self {
        Self(v)
    }

    /// Returns a pointer to the possibly unaligned value.
    #[inline(always)]
    #[must_use]
    pub const fn as_ptr(&self) -> *const Value {
        &raw const self.0
    }

    /// Unwraps the inner value.
    #[inline(always)]
    #[must_use]
    pub const fn into_inner(self) -> Value {
        // `self.0` cannot be moved out in const-fn (drop-check), so read it
        // out and leak the shell.
        //
        // SAFETY: `self` is forgotten right after, so the value is never
        //         observed twice.
        unsafe {
            let r = core::ptr::read_unaligned(&raw const self.0);
            core::mem::forget(self);
            r
        }
    }

    /// Overwrites the inner value.
    #[inline]
    pub fn set(&mut self, v: Value) {
        self.0 = v;
    }
}

impl<Value: Copy> Packed<Value> {
    /// Returns a properly aligned copy of the inner value.
    #[inline(always)]
    #[must_use]
    pub const fn get(&self) -> Value {
        self.0
    }
}

impl<Value: Copy> Clone for Packed<Value> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Value: Copy + core::fmt::Debug> core::fmt::Debug for Packed<Value> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_tuple("Packed").field(&self.get()).finish()
    }
}

impl<Value: Copy + core::cmp::PartialEq> core::cmp::PartialEq for Packed<Value> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<Value: Copy + core::cmp::Eq> core::cmp::Eq for Packed<Value> {
}

impl<Value: Copy + core::hash::Hash> core::hash::Hash for Packed<Value> {
    fn hash<Op: core::hash::Hasher>(&self, state: &mut Op) {
        self.get().hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<Packed<u8>>(), 1);
        assert_eq!(size_of::<Packed<u64>>(), 8);
        assert_eq!(align_of::<Packed<u64>>(), 1);
        assert_eq!(size_of::<Packed<[u32; 3]>>(), 12);
    }

    #[test]
    fn access() {
        let mut v: Packed<u64> = Packed::new(71);

        assert_eq!(v.get(), 71);
        assert_eq!(unsafe { core::ptr::read_unaligned(v.as_ptr()) }, 71);

        v.set(73);
        assert_eq!(v, Packed::new(73));
        assert_eq!(v.into_inner(), 73);
    }
}
