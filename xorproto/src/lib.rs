//! XorDemo protocol utilities crate.
//!
//! This crate contains the two building blocks of the demo: a single-byte
//! XOR cipher (`cipher`) and the labeled-line formatter used for diagnostic
//! output (`render`). These modules are intentionally minimal and focus on
//! the demo's needs rather than being general-purpose libraries.
//!
/// Single-byte XOR encryption/decryption module
pub mod cipher;
/// Labeled value line formatting module
pub mod render;
