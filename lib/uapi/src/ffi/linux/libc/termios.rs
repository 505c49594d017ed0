use super::abi;

pub const TIOCGWINSZ: abi::U32 = ::libc::TIOCGWINSZ as abi::U32;
pub const TIOCSWINSZ: abi::U32 = ::libc::TIOCSWINSZ as abi::U32;

pub type Winsize = ::libc::winsize;
