//! File-backed storage primitives.

pub mod atomic_toml;
