//! # Alignment Markers
//!
//! Rust has no way to pass an alignment as a plain type parameter. This
//! module provides [`AlignAs`] to name an alignment via a const-generic, and
//! [`Aligned`] to map that name to a zero-sized type with exactly that
//! alignment. Embedding `[<AlignAs<N> as Aligned>::Align; 0]` into a
//! `repr(C)` structure raises its alignment to `N` without changing its
//! size (other than trailing padding).

/// Names the alignment `N` as a type. Only powers of two up to 64 implement
/// [`Aligned`].
#[derive(Clone, Copy, Debug, Default, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
pub struct AlignAs<const N: usize>;

/// Maps an alignment name to a zero-sized type of that alignment.
pub trait Aligned {
    /// Zero-sized type with the requested alignment.
    type Align: Copy + Default;
}

macro_rules! implement_aligned {
    ($($n:literal => $name:ident,)*) => {
        $(
            #[doc(hidden)]
            #[derive(Clone, Copy, Debug, Default, Hash)]
            #[derive(Eq, Ord, PartialEq, PartialOrd)]
            #[repr(C, align($n))]
            pub struct $name;

            impl Aligned for AlignAs<$n> {
                type Align = $name;
            }
        )*
    };
}

implement_aligned! {
    1 => Align1,
    2 => Align2,
    4 => Align4,
    8 => Align8,
    16 => Align16,
    32 => Align32,
    64 => Align64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typeinfo() {
        assert_eq!(size_of::<<AlignAs<1> as Aligned>::Align>(), 0);
        assert_eq!(align_of::<<AlignAs<1> as Aligned>::Align>(), 1);
        assert_eq!(size_of::<<AlignAs<8> as Aligned>::Align>(), 0);
        assert_eq!(align_of::<<AlignAs<8> as Aligned>::Align>(), 8);
        assert_eq!(align_of::<<AlignAs<64> as Aligned>::Align>(), 64);

        // Zero-length arrays keep the alignment of their element.
        assert_eq!(size_of::<[<AlignAs<16> as Aligned>::Align; 0]>(), 0);
        assert_eq!(align_of::<[<AlignAs<16> as Aligned>::Align; 0]>(), 16);
    }
}
