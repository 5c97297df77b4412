//! Atomic file I/O for in-place manifest rewrites
//!
//! The manifest is rewritten via write-to-temp-then-rename, so an
//! interrupted run can never leave a half-edited file behind.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic};
