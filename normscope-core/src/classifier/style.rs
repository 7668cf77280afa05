//! Stylistic measurements: hesitation, capitalization and punctuation.

use super::patterns;

const PUNCTUATION: &[char] = &[',', ';', ':', '!', '?', '.', '-', '_', '…', '¿', '¡'];

/// Whether the text contains a hesitation marker.
pub fn has_hesitation(text: &str) -> bool {
    patterns::hesitation(text).is_some()
}

/// Uppercase share of alphabetic characters, 0.0 when there are none.
pub fn capitalization_rate(text: &str) -> f64 {
    let (upper, letters) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(upper, letters), c| {
            (upper + usize::from(c.is_uppercase()), letters + 1)
        });

    if letters == 0 {
        0.0
    } else {
        upper as f64 / letters as f64
    }
}

/// Whether the text contains punctuation.
///
/// A `.` or `,` between two digits is a number separator, not punctuation.
pub fn has_punctuation(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();

    chars.iter().enumerate().any(|(i, &c)| {
        if !PUNCTUATION.contains(&c) {
            return false;
        }
        let between_digits = matches!(c, '.' | ',')
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        !between_digits
    })
}
