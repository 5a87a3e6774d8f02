//! Configuration values for the xordemo binary.
//!
//! Exposes a lazily-initialized `CONFIG` which reads the cleartext and key
//! bytes from environment variables (with the classic demo defaults).
//! Values may be given as a single ASCII character (`A`) or as a
//! `0x`-prefixed hex byte (`0x41`); anything else falls back to the
//! default, so there are no error paths.
//!
use std::env;

use once_cell::sync::Lazy;

/// Default cleartext byte: 'A'
const DEFAULT_CLEARTEXT: u8 = b'A';

/// Default key byte: 'X'
const DEFAULT_KEY: u8 = b'X';

/// Demo configuration holding the two input bytes
pub struct Config {
    /// Byte to encrypt
    pub cleartext: u8,
    /// XOR key byte
    pub key: u8,
}

/// Global demo configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    cleartext: env::var("XORDEMO_CLEARTEXT")
        .ok()
        .and_then(|s| parse_byte(&s))
        .unwrap_or(DEFAULT_CLEARTEXT),

    key: env::var("XORDEMO_KEY")
        .ok()
        .and_then(|s| parse_byte(&s))
        .unwrap_or(DEFAULT_KEY),
});

/// Parse a byte value from its character or `0x`-hex spelling
fn parse_byte(s: &str) -> Option<u8> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).ok();
    }
    match s.as_bytes() {
        [b] => Some(*b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_byte;

    /// Single ASCII characters parse as their byte value
    #[test]
    fn parse_char_form() {
        assert_eq!(parse_byte("A"), Some(0x41));
        assert_eq!(parse_byte("X"), Some(0x58));
        assert_eq!(parse_byte(" "), Some(0x20));
    }

    /// 0x-prefixed hex parses as a byte, either digit case
    #[test]
    fn parse_hex_form() {
        assert_eq!(parse_byte("0x41"), Some(0x41));
        assert_eq!(parse_byte("0x00"), Some(0x00));
        assert_eq!(parse_byte("0xFF"), Some(0xff));
        assert_eq!(parse_byte("0Xab"), Some(0xab));
    }

    /// Everything else is rejected so the caller falls back to defaults
    #[test]
    fn parse_invalid() {
        assert_eq!(parse_byte(""), None);
        assert_eq!(parse_byte("AB"), None);
        assert_eq!(parse_byte("0x100"), None);
        assert_eq!(parse_byte("0xzz"), None);
        assert_eq!(parse_byte("é"), None);
    }
}
