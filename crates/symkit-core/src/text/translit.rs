//! Named character escapes and ASCII transliteration.
//!
//! `\[Name]` escapes follow the notebook convention: `\[Alpha]` decodes
//! to α and `\[RightArrow]` to →. Folding maps decoded text to a plain
//! ASCII rendition for terminals without Unicode fonts.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Named escapes in decode order. Aliases for the same character list
/// the preferred name first; encoding picks the first match.
const NAMED: &[(&str, char)] = &[
    ("Alpha", 'α'),
    ("Beta", 'β'),
    ("Gamma", 'γ'),
    ("Delta", 'δ'),
    ("Epsilon", 'ε'),
    ("Zeta", 'ζ'),
    ("Eta", 'η'),
    ("Theta", 'θ'),
    ("Iota", 'ι'),
    ("Kappa", 'κ'),
    ("Lambda", 'λ'),
    ("Mu", 'μ'),
    ("Nu", 'ν'),
    ("Xi", 'ξ'),
    ("Omicron", 'ο'),
    ("Pi", 'π'),
    ("Rho", 'ρ'),
    ("Sigma", 'σ'),
    ("FinalSigma", 'ς'),
    ("Tau", 'τ'),
    ("Upsilon", 'υ'),
    ("Phi", 'φ'),
    ("Chi", 'χ'),
    ("Psi", 'ψ'),
    ("Omega", 'ω'),
    ("CapitalGamma", 'Γ'),
    ("CapitalDelta", 'Δ'),
    ("CapitalTheta", 'Θ'),
    ("CapitalLambda", 'Λ'),
    ("CapitalXi", 'Ξ'),
    ("CapitalPi", 'Π'),
    ("CapitalSigma", 'Σ'),
    ("CapitalPhi", 'Φ'),
    ("CapitalPsi", 'Ψ'),
    ("CapitalOmega", 'Ω'),
    ("RightArrow", '→'),
    ("Rule", '→'),
    ("LeftArrow", '←'),
    ("UpArrow", '↑'),
    ("DownArrow", '↓'),
    ("LeftRightArrow", '↔'),
    ("Infinity", '∞'),
    ("Degree", '°'),
    ("PlusMinus", '±'),
    ("Times", '×'),
    ("Divide", '÷'),
    ("CenterDot", '·'),
    ("Bullet", '•'),
    ("NotEqual", '≠'),
    ("LessEqual", '≤'),
    ("GreaterEqual", '≥'),
    ("TildeTilde", '≈'),
    ("Element", '∈'),
    ("Sum", '∑'),
    ("Product", '∏'),
    ("Sqrt", '√'),
    ("PartialD", '∂'),
    ("EmptySet", '∅'),
    ("Dash", '–'),
    ("LongDash", '—'),
    ("Ellipsis", '…'),
    ("Prime", '′'),
    ("DoublePrime", '″'),
    ("CapitalADoubleDot", 'Ä'),
    ("ADoubleDot", 'ä'),
    ("CapitalODoubleDot", 'Ö'),
    ("ODoubleDot", 'ö'),
    ("CapitalUDoubleDot", 'Ü'),
    ("UDoubleDot", 'ü'),
    ("SZ", 'ß'),
    ("CapitalARing", 'Å'),
    ("ARing", 'å'),
    ("CapitalAE", 'Æ'),
    ("AE", 'æ'),
    ("CapitalOSlash", 'Ø'),
    ("OSlash", 'ø'),
    ("CapitalCCedilla", 'Ç'),
    ("CCedilla", 'ç'),
    ("CapitalNTilde", 'Ñ'),
    ("NTilde", 'ñ'),
    ("CapitalEAcute", 'É'),
    ("EAcute", 'é'),
    ("EGrave", 'è'),
    ("AGrave", 'à'),
    ("AAcute", 'á'),
];

static NAMED_TO_CHAR: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| NAMED.iter().copied().collect());

static CHAR_TO_NAMED: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (name, c) in NAMED {
        map.entry(*c).or_insert(*name);
    }
    map
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\[([A-Za-z][A-Za-z0-9]*)\]").expect("escape pattern compiles"));

static ASCII_FOLD: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert('À', "A");
    map.insert('Á', "A");
    map.insert('Â', "A");
    map.insert('Ã', "A");
    map.insert('Ä', "A");
    map.insert('Å', "A");
    map.insert('Æ', "AE");
    map.insert('Ç', "C");
    map.insert('È', "E");
    map.insert('É', "E");
    map.insert('Ê', "E");
    map.insert('Ë', "E");
    map.insert('Ì', "I");
    map.insert('Í', "I");
    map.insert('Î', "I");
    map.insert('Ï', "I");
    map.insert('Ñ', "N");
    map.insert('Ò', "O");
    map.insert('Ó', "O");
    map.insert('Ô', "O");
    map.insert('Õ', "O");
    map.insert('Ö', "O");
    map.insert('Ø', "O");
    map.insert('Ù', "U");
    map.insert('Ú', "U");
    map.insert('Û', "U");
    map.insert('Ü', "U");
    map.insert('Ý', "Y");
    map.insert('ß', "ss");
    map.insert('à', "a");
    map.insert('á', "a");
    map.insert('â', "a");
    map.insert('ã', "a");
    map.insert('ä', "a");
    map.insert('å', "a");
    map.insert('æ', "ae");
    map.insert('ç', "c");
    map.insert('è', "e");
    map.insert('é', "e");
    map.insert('ê', "e");
    map.insert('ë', "e");
    map.insert('ì', "i");
    map.insert('í', "i");
    map.insert('î', "i");
    map.insert('ï', "i");
    map.insert('ñ', "n");
    map.insert('ò', "o");
    map.insert('ó', "o");
    map.insert('ô', "o");
    map.insert('õ', "o");
    map.insert('ö', "o");
    map.insert('ø', "o");
    map.insert('ù', "u");
    map.insert('ú', "u");
    map.insert('û', "u");
    map.insert('ü', "u");
    map.insert('ý', "y");
    map.insert('ÿ', "y");
    map.insert('α', "a");
    map.insert('β', "b");
    map.insert('γ', "g");
    map.insert('δ', "d");
    map.insert('ε', "e");
    map.insert('ζ', "z");
    map.insert('η', "e");
    map.insert('θ', "th");
    map.insert('ι', "i");
    map.insert('κ', "k");
    map.insert('λ', "l");
    map.insert('μ', "m");
    map.insert('ν', "n");
    map.insert('ξ', "x");
    map.insert('ο', "o");
    map.insert('π', "p");
    map.insert('ρ', "r");
    map.insert('σ', "s");
    map.insert('ς', "s");
    map.insert('τ', "t");
    map.insert('υ', "u");
    map.insert('φ', "ph");
    map.insert('χ', "ch");
    map.insert('ψ', "ps");
    map.insert('ω', "o");
    map.insert('Γ', "G");
    map.insert('Δ', "D");
    map.insert('Θ', "Th");
    map.insert('Λ', "L");
    map.insert('Ξ', "X");
    map.insert('Π', "P");
    map.insert('Σ', "S");
    map.insert('Φ', "Ph");
    map.insert('Ψ', "Ps");
    map.insert('Ω', "O");
    map.insert('–', "-");
    map.insert('—', "--");
    map.insert('…', "...");
    map.insert('‘', "'");
    map.insert('’', "'");
    map.insert('“', "\"");
    map.insert('”', "\"");
    map.insert('′', "'");
    map.insert('″', "''");
    map.insert('\u{a0}', " ");
    map.insert('→', "->");
    map.insert('←', "<-");
    map.insert('↑', "^");
    map.insert('↓', "v");
    map.insert('↔', "<->");
    map.insert('≤', "<=");
    map.insert('≥', ">=");
    map.insert('≠', "!=");
    map.insert('≈', "~");
    map.insert('∞', "inf");
    map.insert('∈', "in");
    map.insert('∑', "sum");
    map.insert('∏', "prod");
    map.insert('√', "sqrt");
    map.insert('∂', "d");
    map.insert('∅', "0");
    map.insert('°', "deg");
    map.insert('±', "+/-");
    map.insert('×', "x");
    map.insert('÷', "/");
    map.insert('·', "*");
    map.insert('•', "*");
    map.insert('¹', "1");
    map.insert('²', "2");
    map.insert('³', "3");
    map.insert('⁰', "0");
    map.insert('⁴', "4");
    map.insert('⁵', "5");
    map.insert('⁶', "6");
    map.insert('⁷', "7");
    map.insert('⁸', "8");
    map.insert('⁹', "9");
    map.insert('⁻', "-");
    map.insert('⁽', "(");
    map.insert('⁾', ")");
    map.insert('✓', "+");
    map.insert('✗', "x");
    map.insert('○', "o");
    map
});

/// Replace every known `\[Name]` escape with its character. Unknown
/// names stay as written.
pub fn decode_named(text: &str) -> String {
    NAME_RE
        .replace_all(text, |captures: &regex::Captures<'_>| {
            match NAMED_TO_CHAR.get(&captures[1]) {
                Some(c) => c.to_string(),
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}

/// Replace every character that has a named escape with `\[Name]`.
pub fn encode_named(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match CHAR_TO_NAMED.get(&c) {
            Some(name) => {
                out.push_str("\\[");
                out.push_str(name);
                out.push(']');
            }
            None => out.push(c),
        }
    }
    out
}

/// Fold text to ASCII. Characters with no fold become `?`.
pub fn fold_to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(folded) = ASCII_FOLD.get(&c) {
            out.push_str(folded);
        } else {
            out.push('?');
        }
    }
    out
}
