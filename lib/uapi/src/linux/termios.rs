//! # Terminal Window Size
//!
//! Reads and writes the window size the kernel stores for each terminal.
//! Both operations issue a single `ioctl()` and forward the result. There is
//! no retry on `EINTR`, no validation of the dimensions and no caching.

use crate::ffi::linux::{libc as sys, native};

pub use super::errno::Errno;
pub use native::termios::Winsize;

/// Returns the window size of the terminal behind `fd`.
///
/// Fails with the untouched `errno` of the `ioctl()`, most notably `ENOTTY`
/// if `fd` is not a terminal and `EBADF` if it is not open.
pub fn get(fd: i32) -> Result<Winsize, Errno> {
    let mut v = Winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: `TIOCGWINSZ` writes a single `Winsize` to the passed pointer,
    //         which is valid for writes.
    let r = unsafe {
        libc::ioctl(fd, sys::termios::TIOCGWINSZ as _, &raw mut v)
    };

    if r < 0 {
        Err(Errno::last())
    } else {
        Ok(v)
    }
}

/// Sets the window size of the terminal behind `fd`.
///
/// The kernel accepts any value. If the size changes, the foreground process
/// group of the terminal receives `SIGWINCH`.
pub fn set(fd: i32, size: &Winsize) -> Result<(), Errno> {
    // SAFETY: `TIOCSWINSZ` reads a single `Winsize` from the passed pointer,
    //         which is valid for reads.
    let r = unsafe {
        libc::ioctl(fd, sys::termios::TIOCSWINSZ as _, core::ptr::from_ref(size))
    };

    if r < 0 {
        Err(Errno::last())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Opens the controller side of a new pseudo terminal, or `None` if the
    // environment provides none.
    fn open_pty() -> Option<i32> {
        // SAFETY: Plain syscall, no memory is passed.
        let fd = unsafe { libc::posix_openpt(libc::O_RDWR | libc::O_NOCTTY) };
        (fd >= 0).then_some(fd)
    }

    fn close(fd: i32) {
        // SAFETY: `fd` is owned by the test.
        unsafe { libc::close(fd) };
    }

    #[test]
    fn roundtrip() {
        let Some(fd) = open_pty() else { return };

        let v = Winsize {
            ws_row: 24,
            ws_col: 80,
            ws_xpixel: 640,
            ws_ypixel: 384,
        };
        set(fd, &v).unwrap();

        let r = get(fd).unwrap();
        assert_eq!(r.ws_row, 24);
        assert_eq!(r.ws_col, 80);
        assert_eq!(r.ws_xpixel, 640);
        assert_eq!(r.ws_ypixel, 384);

        // Setting the current size again is a no-op.
        set(fd, &r).unwrap();
        let again = get(fd).unwrap();
        assert_eq!((again.ws_row, again.ws_col), (24, 80));

        close(fd);
    }

    #[test]
    fn not_a_terminal() {
        // SAFETY: Plain syscall with a static, nul-terminated path.
        let null = unsafe { libc::open(c"/dev/null".as_ptr(), libc::O_RDWR) };
        assert!(null >= 0);

        let v = Winsize {
            ws_row: 1,
            ws_col: 1,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        assert_eq!(get(null).err(), Some(Errno::from_raw(libc::ENOTTY)));
        assert_eq!(set(null, &v).unwrap_err(), Errno::from_raw(libc::ENOTTY));
        close(null);

        let mut fds = [-1; 2];
        // SAFETY: `fds` has room for the two descriptors.
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
        assert_eq!(get(fds[0]).err().map(Errno::to_raw), Some(libc::ENOTTY));
        assert_eq!(get(fds[1]).err().map(Errno::to_raw), Some(libc::ENOTTY));
        close(fds[0]);
        close(fds[1]);
    }

    #[test]
    fn bad_descriptor() {
        assert_eq!(get(-1).err(), Some(Errno::from_raw(libc::EBADF)));
    }
}
