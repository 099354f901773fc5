//! Numbered-placeholder interpolation for message templates.
//!
//! Templates mark argument slots with backquotes: `` `1` `` inserts the
//! first argument, `` `2` `` the second. A bare `` `` `` advances to the
//! slot after the previously used one. Out-of-range slots insert nothing.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(\d*)`").expect("placeholder pattern compiles"));

/// Fill a message template's backquoted slots from `args`.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last_end = 0;
    let mut cursor = 0usize;
    for captures in PLACEHOLDER_RE.captures_iter(template) {
        let Some(whole) = captures.get(0) else { continue };
        let digits = captures.get(1).map_or("", |m| m.as_str());
        let position = if digits.is_empty() {
            cursor + 1
        } else {
            digits.parse().unwrap_or(0)
        };
        cursor = position;
        out.push_str(&template[last_end..whole.start()]);
        if let Some(argument) = position.checked_sub(1).and_then(|index| args.get(index)) {
            out.push_str(argument);
        }
        last_end = whole.end();
    }
    out.push_str(&template[last_end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_slots() {
        assert_eq!(
            interpolate("installed `1`, needs `2`", &["0.16", ">= 0.17"]),
            "installed 0.16, needs >= 0.17"
        );
    }

    #[test]
    fn test_bare_slots_advance() {
        assert_eq!(interpolate("`` and ``", &["a", "b"]), "a and b");
    }

    #[test]
    fn test_bare_slot_follows_explicit_one() {
        assert_eq!(interpolate("`2` then ``", &["a", "b", "c"]), "b then c");
    }

    #[test]
    fn test_slot_reuse() {
        assert_eq!(interpolate("`1` = `1`", &["x"]), "x = x");
    }

    #[test]
    fn test_out_of_range_inserts_nothing() {
        assert_eq!(interpolate("got `3`.", &["a"]), "got .");
        assert_eq!(interpolate("got `0`.", &["a"]), "got .");
        assert_eq!(interpolate("got `1`.", &[]), "got .");
    }

    #[test]
    fn test_template_without_slots_passes_through() {
        assert_eq!(interpolate("not installed", &["unused"]), "not installed");
    }

    #[test]
    fn test_lone_backquote_is_literal() {
        assert_eq!(interpolate("a ` b", &["x"]), "a ` b");
    }
}
