//! Output document generation.

pub mod writer;

pub use writer::*;
