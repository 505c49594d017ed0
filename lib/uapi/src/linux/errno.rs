//! # Error Numbers
//!
//! Failed C library calls report their reason through the thread-local
//! `errno`. [`Errno`] captures that value verbatim.

use crate::ffi::linux::native;

/// Raw error code of a failed system call.
///
/// The value is taken unmodified from the C library, without any mapping or
/// validation.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
pub struct Errno(i32);

#[cfg(not(target_os = "android"))]
use libc::__errno_location as errno_location;
#[cfg(target_os = "android")]
use libc::__errno as errno_location;

impl Errno {
    /// Wraps the raw error code `code`.
    #[must_use]
    pub const fn from_raw(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw error code.
    #[must_use]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    /// Captures the current value of `errno`.
    ///
    /// Must be called right after the failed call, before anything else can
    /// overwrite it.
    #[must_use]
    pub fn last() -> Self {
        // SAFETY: The C library always provides a valid, thread-local
        //         location for `errno`.
        Self(unsafe { *errno_location() })
    }

    /// Returns the symbolic name of the error code, if known.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        u16::try_from(self.0).ok().and_then(native::errno::name)
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(v) => write!(fmt, "{} ({})", v, self.0),
            None => write!(fmt, "errno {}", self.0),
        }
    }
}

impl core::error::Error for Errno {
}

#[cfg(feature = "std")]
impl From<Errno> for std::io::Error {
    fn from(v: Errno) -> Self {
        std::io::Error::from_raw_os_error(v.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Errno::from_raw(libc::ENOTTY).name(), Some("ENOTTY"));
        assert_eq!(Errno::from_raw(libc::EWOULDBLOCK).name(), Some("EAGAIN"));
        assert_eq!(Errno::from_raw(41).name(), None);
        assert_eq!(Errno::from_raw(-1).name(), None);

        assert_eq!(std::format!("{}", Errno::from_raw(libc::EBADF)), "EBADF (9)");
        assert_eq!(std::format!("{}", Errno::from_raw(4096)), "errno 4096");
    }

    #[test]
    fn last() {
        // SAFETY: `close()` on an invalid descriptor has no side-effects.
        let r = unsafe { libc::close(-1) };

        assert_eq!(r, -1);
        assert_eq!(Errno::last(), Errno::from_raw(libc::EBADF));
        assert_eq!(Errno::last().to_raw(), libc::EBADF);
    }
}
