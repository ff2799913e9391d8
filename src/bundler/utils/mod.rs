//! Shared helpers: filesystem operations and GUID derivation.

pub mod fs;
pub mod guid;
