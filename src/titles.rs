//! Decoding of escaped anchor titles.
//!
//! Node titles in CFG SVGs hold multi-line text (disassembly, three-address
//! code) whose newlines are encoded as the two-character sequence `\n`,
//! since the attribute value itself must stay on one line. Decoding turns
//! those escapes back into real newlines for the info panel.

/// The two-character escape used as a newline placeholder in title attributes.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Replace every `\n` escape with an actual newline.
///
/// The scan is left to right and non-overlapping; no other characters are
/// touched.
pub fn decode(title: &str) -> String {
    title.replace(ESCAPED_NEWLINE, "\n")
}
