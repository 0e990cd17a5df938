//! Audio container I/O

pub mod wav;

pub use wav::{read_mono, write_mono, AudioClip, AudioError};
