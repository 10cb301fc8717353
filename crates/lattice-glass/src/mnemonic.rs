//! Mnemonic (accelerator character) parsing for button labels.
//!
//! Mnemonics are indicated by '&' in label text:
//!
//! - `"&Open"` shows "Open" and responds to Alt+O
//! - `"Save &As"` shows "Save As" and responds to Alt+A
//! - `"Fish && Chips"` shows "Fish & Chips" and has no mnemonic

/// Label text with its mnemonic marker resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MnemonicText {
    /// The display text with '&' markers removed (and '&&' converted to '&').
    pub display_text: String,
    /// The mnemonic character (lowercase), if any.
    pub mnemonic: Option<char>,
    /// Byte index in `display_text` of the mnemonic character.
    pub mnemonic_index: Option<usize>,
}

impl MnemonicText {
    /// Check whether `ch` triggers this mnemonic (case-insensitive).
    ///
    /// Characters whose lowercase form spans several chars compare by the
    /// first one, the same way the mnemonic itself was stored.
    pub fn matches(&self, ch: char) -> bool {
        self.mnemonic.is_some_and(|m| fold(ch) == Some(m))
    }
}

fn fold(ch: char) -> Option<char> {
    ch.to_lowercase().next()
}

/// Parse text containing an optional mnemonic marker.
///
/// Only the first `&x` pair is a mnemonic; later ones are shown verbatim
/// without the marker. A `&` before anything other than `&` or an
/// alphanumeric is kept as is.
pub fn parse_mnemonic(text: &str) -> MnemonicText {
    let mut parsed = MnemonicText {
        display_text: String::with_capacity(text.len()),
        ..MnemonicText::default()
    };

    let mut rest = text;
    while let Some(at) = rest.find('&') {
        parsed.display_text.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        rest = match after.chars().next() {
            Some('&') => {
                parsed.display_text.push('&');
                &after[1..]
            }
            Some(ch) if ch.is_alphanumeric() => {
                if parsed.mnemonic.is_none() {
                    parsed.mnemonic = fold(ch);
                    parsed.mnemonic_index = Some(parsed.display_text.len());
                }
                after
            }
            _ => {
                parsed.display_text.push('&');
                after
            }
        };
    }
    parsed.display_text.push_str(rest);
    parsed
}
