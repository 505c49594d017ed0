//! # Sound Interfaces
//!
//! Interfaces of the sound subsystem that are not part of ALSA proper.

pub mod sof;
