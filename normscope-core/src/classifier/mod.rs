//! Per-transcript convention classifier.
//!
//! Each [`Category`] owns an ordered chain of [`Rule`]s. Rules are tried top
//! down and the first one whose finder matches decides the label; when none
//! matches the label is [`Convention::NotDetected`]. The order is the
//! priority: a text holding both `25/12/2023` and `25 décembre 2023` is a
//! `dd/mm/yyyy` text.

pub mod patterns;
pub mod style;

use crate::types::{Category, Convention, Metric};
use unicode_normalization::UnicodeNormalization;

/// One `(predicate, label)` step of a rule chain.
#[derive(Clone, Copy)]
pub struct Rule {
    pub label: Convention,
    /// Returns the matched text when the rule applies.
    pub find: fn(&str) -> Option<&str>,
}

impl Rule {
    const fn new(label: Convention, find: fn(&str) -> Option<&str>) -> Self {
        Self { label, find }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish()
    }
}

const CURRENCY_RULES: &[Rule] = &[
    Rule::new(Convention::Symbol, patterns::currency_symbol),
    Rule::new(Convention::Word, patterns::currency_word),
];

const PERCENT_RULES: &[Rule] = &[
    Rule::new(Convention::SymbolSpace, patterns::percent_symbol_space),
    Rule::new(Convention::SymbolNoSpace, patterns::percent_symbol_no_space),
    Rule::new(Convention::Word, patterns::percent_word),
];

const THOUSAND_RULES: &[Rule] = &[
    Rule::new(Convention::Space, patterns::grouped_space),
    Rule::new(Convention::Dot, patterns::grouped_dot),
    Rule::new(Convention::Comma, patterns::grouped_comma),
];

const UNIT_RULES: &[Rule] = &[
    Rule::new(Convention::Short, patterns::unit_short),
    Rule::new(Convention::Long, patterns::unit_long),
];

const ORDINAL_RULES: &[Rule] = &[
    Rule::new(Convention::DigitSuffix, patterns::ordinal_digit),
    Rule::new(Convention::Word, patterns::ordinal_word),
];

const NUMBER_RULES: &[Rule] = &[
    Rule::new(Convention::Digit, patterns::digits_dominate),
    Rule::new(Convention::Word, patterns::number_word),
];

const DATE_RULES: &[Rule] = &[
    Rule::new(Convention::NumericDate, patterns::date_numeric),
    Rule::new(Convention::IsoDate, patterns::date_iso),
    Rule::new(Convention::LiteralDate, patterns::date_literal),
];

/// Rule chain of a category, in priority order.
pub const fn rules(category: Category) -> &'static [Rule] {
    match category {
        Category::CurrencyFormat => CURRENCY_RULES,
        Category::PercentFormat => PERCENT_RULES,
        Category::ThousandSeparatorFormat => THOUSAND_RULES,
        Category::UnitFormat => UNIT_RULES,
        Category::OrdinalStyle => ORDINAL_RULES,
        Category::NumberStyle => NUMBER_RULES,
        Category::DateFormat => DATE_RULES,
    }
}

/// NFKC-normalize, replace non-breaking spaces and trim.
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Classify one raw transcript for one category.
///
/// Blank text is `not_detected` for every category.
pub fn classify(text: &str, category: Category) -> Convention {
    classify_normalized(&normalize(text), category)
}

fn classify_normalized(text: &str, category: Category) -> Convention {
    if text.is_empty() {
        return Convention::NotDetected;
    }

    rules(category)
        .iter()
        .find_map(|rule| {
            let matched = (rule.find)(text)?;
            tracing::trace!(%category, label = %rule.label, matched, "rule matched");
            Some(rule.label)
        })
        .unwrap_or(Convention::NotDetected)
}

/// Everything measured on one transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Features {
    conventions: [Convention; Category::COUNT],
    pub hesitation: bool,
    pub capitalization: f64,
    pub punctuation: bool,
}

impl Features {
    /// Classify a raw transcript for every category and metric.
    ///
    /// Returns `None` for blank text: it yields no observation.
    pub fn extract(text: &str) -> Option<Self> {
        let text = normalize(text);
        if text.is_empty() {
            return None;
        }

        let conventions = Category::ALL.map(|category| classify_normalized(&text, category));

        Some(Self {
            conventions,
            hesitation: style::has_hesitation(&text),
            capitalization: style::capitalization_rate(&text),
            punctuation: style::has_punctuation(&text),
        })
    }

    pub fn convention(&self, category: Category) -> Convention {
        self.conventions[category.index()]
    }

    /// Per-text metric value; booleans count as 0.0 or 1.0.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::HesitationFrequency => f64::from(u8::from(self.hesitation)),
            Metric::CapitalizationRate => self.capitalization,
            Metric::PunctuationUsage => f64::from(u8::from(self.punctuation)),
        }
    }
}
