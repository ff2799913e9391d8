//! Windows package formats.

pub mod msi;
