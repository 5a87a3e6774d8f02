//! Labeled diagnostic lines for byte values.
//!
//! Produces the `<label> = '<char>' (0x<hex>)` lines printed by the demo
//! binary. Control bytes are rendered as `\xNN` escapes instead of raw
//! bytes so the output stays byte-exact regardless of terminal behavior.
//!
/// Format a byte as a labeled line with character and hex representations
///
/// Printable ASCII comes out verbatim (`A`), everything else as an escape
/// (`\x19`). Hex is lowercase without zero-padding. No trailing newline.
///
/// # Arguments
/// * `label` - Name shown before the equals sign
/// * `value` - Byte to render
pub fn render_line(label: &str, value: u8) -> String {
    format!("{} = '{}' (0x{:x})", label, value.escape_ascii(), value)
}
