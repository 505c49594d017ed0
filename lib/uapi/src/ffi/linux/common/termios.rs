//! # Terminal Control
//!
//! Only the window-size interface is covered. The kernel stores the size of
//! each terminal, but never interprets it. Changing it raises `SIGWINCH` in
//! the foreground process group of the terminal.

use super::abi;

pub const TIOCGWINSZ: abi::U32 = abi::num(0x5413);
pub const TIOCSWINSZ: abi::U32 = abi::num(0x5414);

/// Terminal size in character cells and pixels. Pixel sizes are commonly
/// left at 0.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Winsize {
    pub ws_row: abi::U16,
    pub ws_col: abi::U16,
    pub ws_xpixel: abi::U16,
    pub ws_ypixel: abi::U16,
}
