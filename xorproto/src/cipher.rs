//! Single-byte XOR cipher used for the round-trip demo
//!
//! This module provides `XorCipher`, a cipher fixed to one key byte. It is
//! NOT cryptographically secure and exists to demonstrate the XOR symmetry
//! property: applying the same key twice returns the original value.
//!
/// XOR cipher with a fixed single-byte key
pub struct XorCipher {
    /// Encryption key byte
    key: u8,
}

impl XorCipher {
    /// Create a new XOR cipher instance for the given key byte
    pub fn new(key: u8) -> Self {
        Self { key }
    }

    /// Apply XOR encryption/decryption to a byte
    ///
    /// XOR is its own inverse under a fixed key, so the same call both
    /// encrypts and decrypts: `apply(apply(b)) == b` for every byte.
    ///
    /// # Arguments
    /// * `byte` - Byte to encrypt/decrypt
    pub fn apply(&self, byte: u8) -> u8 {
        byte ^ self.key
    }

    /// Key byte this cipher was built with
    pub fn key(&self) -> u8 {
        self.key
    }
}
