//! Unicode superscript digits and footnote markers.

/// Superscript form of a digit, sign, or parenthesis.
///
/// Digits 1 to 3 live in Latin-1, the rest in the U+2070 block.
pub fn superscript_char(c: char) -> Option<char> {
    match c {
        '1' => Some('\u{00b9}'),
        '2' => Some('\u{00b2}'),
        '3' => Some('\u{00b3}'),
        '0' | '4'..='9' => char::from_u32(0x2070 + (c as u32 - '0' as u32)),
        '-' => Some('\u{207b}'),
        '(' => Some('\u{207d}'),
        ')' => Some('\u{207e}'),
        _ => None,
    }
}

/// Superscript every character that has a superscript form; the rest
/// pass through unchanged.
pub fn superscript(text: &str) -> String {
    text.chars()
        .map(|c| superscript_char(c).unwrap_or(c))
        .collect()
}

/// Marker for the `index`-th footnote, counted from 1.
pub fn footnote_marker(index: usize) -> String {
    superscript(&index.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_both_unicode_blocks() {
        assert_eq!(superscript("123"), "\u{b9}\u{b2}\u{b3}");
        assert_eq!(superscript("04789"), "\u{2070}\u{2074}\u{2077}\u{2078}\u{2079}");
    }

    #[test]
    fn test_signs_and_parentheses() {
        assert_eq!(superscript("-2"), "\u{207b}\u{b2}");
        assert_eq!(superscript("(1)"), "\u{207d}\u{b9}\u{207e}");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(superscript("x2"), "x\u{b2}");
        assert_eq!(superscript_char('x'), None);
    }

    #[test]
    fn test_footnote_markers() {
        assert_eq!(footnote_marker(1), "\u{b9}");
        assert_eq!(footnote_marker(12), "\u{b9}\u{b2}");
    }
}
