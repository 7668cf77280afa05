//! Pattern finders used by the rule chains.
//!
//! Every finder takes normalized text and returns the first matching slice,
//! or `None`. Where the regex engine cannot express an exclusion (it has no
//! lookaround), the finder filters candidate matches by their neighbours.

use crate::lexicon;
use regex::{Match, Regex};
use std::sync::LazyLock;

/// Build a `(?:a|b|c)` group, longest entries first.
fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<_> = words.into_iter().collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    let escaped: Vec<_> = words.into_iter().map(regex::escape).collect();
    format!("(?:{})", escaped.join("|"))
}

/// Listed number word or German closed compound of two or more parts.
fn number_words() -> String {
    format!(
        "(?:{}|{}{{2,}})",
        alternation(lexicon::NUMBER_WORDS.iter().copied()),
        alternation(lexicon::DE_NUMBER_PARTS.iter().copied())
    )
}

/// Digit number (optionally with a decimal part) or unambiguous number word.
fn quantity() -> String {
    format!(r"(?:\d+(?:[.,]\d+)?|\b{}\b)", number_words())
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

static PERCENT_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\d %"));

static PERCENT_NO_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\d%"));

static PERCENT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\b{}\b",
        alternation(lexicon::PERCENT_WORDS.iter().copied())
    ))
});

static CURRENCY_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"[€$£¥₹₽₺¢₩]"));

/// Currency word preceded by a quantity, so "vida real" is not money.
static CURRENCY_WORD: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i){}\s*(?:de\s+)?{}\b",
        quantity(),
        alternation(lexicon::CURRENCY_WORDS.iter().copied())
    ))
});

static GROUPED_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\b[1-9]\d{0,2}(?: \d{3})+\b"));

static GROUPED_DOT: LazyLock<Regex> = LazyLock::new(|| compile(r"\b[1-9]\d{0,2}(?:\.\d{3})+\b"));

static GROUPED_COMMA: LazyLock<Regex> = LazyLock::new(|| compile(r"\b[1-9]\d{0,2}(?:,\d{3})+\b"));

/// Short unit right after a quantity; "Super G" alone is not a unit.
static UNIT_SHORT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i){}\s*{}\b",
        quantity(),
        alternation(lexicon::UNIT_SHORT.iter().copied())
    ))
});

static UNIT_LONG: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\b{}(?:es|en|s|n)?\b",
        alternation(lexicon::UNIT_LONG.iter().copied())
    ))
});

/// `1er`, `2e`, `3ème`, `1.º` (NFKC turns `º`/`ª` into `o`/`a`), `5th`.
static ORDINAL_DIGIT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b\d+\.?(?:ième|ème|eme|ère|er|re|e|os|as|o|a|º|ª|st|nd|rd|th)\b")
});

static ORDINAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    let stems = lexicon::ORDINAL_STEMS.iter().map(|(stem, suffixes)| {
        let stem = regex::escape(stem);
        let inflected: Vec<_> = suffixes.iter().filter(|s| !s.is_empty()).copied().collect();
        let optional = if suffixes.contains(&"") { "?" } else { "" };
        if inflected.is_empty() {
            stem
        } else {
            format!("{stem}(?:{}){optional}", inflected.join("|"))
        }
    });
    let stems: Vec<_> = stems.collect();
    compile(&format!(
        r"(?i)\b(?:\w+ièmes?|\w+zehnt(?:e|en|er|es|em)|\w+(?:zig|ßig)st(?:e|en|er|es|em)|{})\b",
        stems.join("|")
    ))
});

static DIGITS: LazyLock<Regex> = LazyLock::new(|| compile(r"\d+"));

static NUMBER_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"(?i)\b{}\b", number_words())));

const DAY: &str = r"(?:0?[1-9]|[12]\d|3[01])";

static DATE_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\b{DAY}[/.](?:0?[1-9]|1[0-2])[/.]\d{{4}}\b")));

static DATE_ISO: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b\d{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12]\d|3[01])\b"));

/// `25 décembre 2023`, `1er janvier 2024`, `25 de diciembre de 2023`, `25. Dezember 2023`.
static DATE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\b{DAY}(?:\.|er|o)?\s+(?:de\s+)?{}\s+(?:de\s+)?\d{{4}}\b",
        alternation(lexicon::MONTH_WORDS.iter().copied())
    ))
});

/// Each hesitation letter may repeat: `e+u+h+` matches "euuuh".
static HESITATION: LazyLock<Regex> = LazyLock::new(|| {
    let stretched: Vec<_> = lexicon::HESITATIONS
        .iter()
        .map(|h| {
            let letters: String = h
                .chars()
                .map(|c| format!("{}+", regex::escape(&c.to_string())))
                .collect();
            format!(r"\b{letters}\b")
        })
        .collect();
    compile(&format!("(?i)(?:{})", stretched.join("|")))
});

fn first<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.find(text).map(|m| m.as_str())
}

pub fn percent_symbol_space(text: &str) -> Option<&str> {
    first(&PERCENT_SPACE, text)
}

pub fn percent_symbol_no_space(text: &str) -> Option<&str> {
    first(&PERCENT_NO_SPACE, text)
}

pub fn percent_word(text: &str) -> Option<&str> {
    first(&PERCENT_WORD, text)
}

pub fn currency_symbol(text: &str) -> Option<&str> {
    first(&CURRENCY_SYMBOL, text)
}

pub fn currency_word(text: &str) -> Option<&str> {
    first(&CURRENCY_WORD, text)
}

pub fn grouped_space(text: &str) -> Option<&str> {
    grouped(&GROUPED_SPACE, ' ', text)
}

pub fn grouped_dot(text: &str) -> Option<&str> {
    grouped(&GROUPED_DOT, '.', text)
}

pub fn grouped_comma(text: &str) -> Option<&str> {
    grouped(&GROUPED_COMMA, ',', text)
}

/// First digit group candidate that is a whole number, not a fragment.
///
/// Rejected: candidates continuing a number on the left (`234.567` in
/// `1,234.567`) and candidates followed by the same separator and another
/// digit (`1.234.5`). A different separator after the groups is a decimal
/// part and is accepted (`12.345,67`). Leading zeros never start a group, so
/// decimals such as `0.500` are not thousands.
fn grouped<'t>(re: &Regex, separator: char, text: &'t str) -> Option<&'t str> {
    re.find_iter(text)
        .find(|m| separator == ' ' || is_whole_number(text, m, separator))
        .map(|m| m.as_str())
}

fn is_whole_number(text: &str, m: &Match<'_>, separator: char) -> bool {
    let mut before = text[..m.start()].chars().rev();
    let continues_left = matches!(
        (before.next(), before.next()),
        (Some('.' | ','), Some(d)) if d.is_ascii_digit()
    );

    let mut after = text[m.end()..].chars();
    let continues_right = matches!(
        (after.next(), after.next()),
        (Some(s), Some(d)) if s == separator && d.is_ascii_digit()
    );

    !continues_left && !continues_right
}

/// Short unit after a quantity, excluding elided articles (`5 l'eau`).
pub fn unit_short(text: &str) -> Option<&str> {
    UNIT_SHORT
        .find_iter(text)
        .find(|m| !text[m.end()..].starts_with(['\'', '’']))
        .map(|m| m.as_str())
}

pub fn unit_long(text: &str) -> Option<&str> {
    first(&UNIT_LONG, text)
}

pub fn ordinal_digit(text: &str) -> Option<&str> {
    first(&ORDINAL_DIGIT, text)
}

/// Ordinal word, excluding Portuguese weekdays (`segunda-feira`).
pub fn ordinal_word(text: &str) -> Option<&str> {
    ORDINAL_WORD
        .find_iter(text)
        .find(|m| !is_weekday(&text[m.end()..]))
        .map(|m| m.as_str())
}

fn is_weekday(rest: &str) -> bool {
    ["-feira", " feira"]
        .iter()
        .any(|suffix| rest.get(..suffix.len()).is_some_and(|s| s.eq_ignore_ascii_case(suffix)))
}

/// First digit run, when digit runs are at least as frequent as number words.
pub fn digits_dominate(text: &str) -> Option<&str> {
    let first_digits = DIGITS.find(text)?;
    let digits = DIGITS.find_iter(text).count();
    let words = NUMBER_WORD.find_iter(text).count();
    (digits >= words).then(|| first_digits.as_str())
}

pub fn number_word(text: &str) -> Option<&str> {
    first(&NUMBER_WORD, text)
}

pub fn date_numeric(text: &str) -> Option<&str> {
    first(&DATE_NUMERIC, text)
}

pub fn date_iso(text: &str) -> Option<&str> {
    first(&DATE_ISO, text)
}

pub fn date_literal(text: &str) -> Option<&str> {
    first(&DATE_LITERAL, text)
}

pub fn hesitation(text: &str) -> Option<&str> {
    first(&HESITATION, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation_prefers_longer_entries() {
        assert_eq!(alternation(["m", "min", "mm"]), "(?:min|mm|m)");
    }

    #[test]
    fn alternation_escapes_metacharacters() {
        assert_eq!(alternation(["a.b"]), r"(?:a\.b)");
    }

    #[test]
    fn grouped_dot_skips_fractional_tail() {
        assert_eq!(grouped_dot("1,234.567"), None);
        assert_eq!(grouped_comma("1,234.567"), Some("1,234"));
    }

    #[test]
    fn grouped_dot_rejects_repeated_separator_fragment() {
        assert_eq!(grouped_dot("version 1.234.5"), None);
    }

    #[test]
    fn grouped_accepts_trailing_decimal_part() {
        assert_eq!(grouped_dot("12.345,67 euros"), Some("12.345"));
    }

    #[test]
    fn grouped_rejects_leading_zero_decimals() {
        assert_eq!(grouped_dot("0.500"), None);
        assert_eq!(grouped_comma("0,125"), None);
    }

    #[test]
    fn grouped_backtracks_to_whole_groups() {
        assert_eq!(grouped_space("1 234 5678"), Some("1 234"));
        assert_eq!(grouped_dot("3.1415"), None);
    }

    #[test]
    fn hesitation_allows_stretched_letters() {
        assert_eq!(hesitation("et euuuuh voilà"), Some("euuuuh"));
        assert_eq!(hesitation("HMMMM ja"), Some("HMMMM"));
        assert_eq!(hesitation("le heurtoir"), None);
    }

    #[test]
    fn digits_dominate_ties_go_to_digits() {
        assert_eq!(digits_dominate("3 pommes et deux poires"), Some("3"));
        assert_eq!(digits_dominate("3 pommes, deux poires, trois kiwis"), None);
    }

    #[test]
    fn german_compounds_are_number_words() {
        assert_eq!(number_word("es kostet zweihundert Euro"), Some("zweihundert"));
        assert_eq!(number_word("Einundzwanzig Kilometer"), Some("Einundzwanzig"));
        assert_eq!(number_word("dreitausendfünfhundert"), Some("dreitausendfünfhundert"));
        assert_eq!(number_word("und dann kam ein Mann"), None);
    }

    #[test]
    fn ordinal_word_skips_weekdays() {
        assert_eq!(ordinal_word("até quinta-feira"), None);
        assert_eq!(ordinal_word("na Segunda-Feira, a segunda vez"), Some("segunda"));
    }

    #[test]
    fn unit_short_skips_elided_article() {
        assert_eq!(unit_short("il en boit 5 l'après-midi"), None);
        assert_eq!(unit_short("il en boit 5 l par jour"), Some("5 l"));
    }
}
