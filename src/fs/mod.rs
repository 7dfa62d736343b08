//! Filesystem utilities.
//!
//! The `.tex` artifact is written atomically so an interrupted run never
//! leaves a half-written file for the compiler to pick up.

pub mod atomic;

pub use atomic::atomic_write_file;
