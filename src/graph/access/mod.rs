//! Internal traversal building blocks.
//!
//! This module is `pub(crate)` so the algorithms can share scratch primitives
//! (visited sets) without exposing them as part of the public API surface.

pub(crate) mod visited;
