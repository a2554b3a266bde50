//! Go expression builders.
//!
//! These provide a small, high-level API for the Go constructs the
//! generated file needs, rendered through [`CodeFragment`](passgen_codegen::builder::CodeFragment)s.

mod expr;

pub use expr::{Call, Composite, Element, Expr, FuncLit};
