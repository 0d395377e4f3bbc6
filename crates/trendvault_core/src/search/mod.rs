//! Item search entry points.
//!
//! # Responsibility
//! - Provide naive case-insensitive substring matching over item metadata.
//! - Keep filter semantics in core so every presentation layer agrees.

pub mod filter;
