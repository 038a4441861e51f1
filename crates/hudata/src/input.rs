//! Types modeling the source files.

pub mod primary;
pub mod secondary;
