//! XOR round-trip demo binary entrypoint.
//!
//! Runs one encrypt/decrypt cycle on a single byte and prints each
//! intermediate value as a labeled line: cleartext, key, ciphertext and
//! deciphertext. The cipher and line formatting live in the `xorproto`
//! crate; this file keeps the four-step sequence minimal.
//!
mod config;

use config::CONFIG;
use xorproto::{cipher::XorCipher, render::render_line};

fn main() {
    let cleartext = CONFIG.cleartext;
    println!("{}", render_line("cleartext", cleartext));

    let cipher = XorCipher::new(CONFIG.key);
    println!("{}", render_line("key", cipher.key()));

    let ciphertext = cipher.apply(cleartext);
    // historical label spelling, kept for output compatibility
    println!("{}", render_line("chphertext", ciphertext));

    let deciphertext = cipher.apply(ciphertext);
    println!("{}", render_line("deciphertext", deciphertext));
}
