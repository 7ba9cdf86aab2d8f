//! Common utilities and data structures for mlisp.
//!
//! This crate provides foundational types used across the mlisp toolchain:
//! - `Span`: Source code location tracking
//! - `BytePos`: Byte offsets into a source string

mod span;

pub use span::{BytePos, Span};
