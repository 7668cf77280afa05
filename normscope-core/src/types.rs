//! Core types for normscope-core

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formatting dimension classified per transcript.
///
/// Each category has a fixed set of [`Convention`] values, listed by
/// [`Category::conventions`] in preference order. That order breaks ties
/// during majority voting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CurrencyFormat,
    PercentFormat,
    ThousandSeparatorFormat,
    UnitFormat,
    OrdinalStyle,
    NumberStyle,
    DateFormat,
}

impl Category {
    pub const COUNT: usize = 7;

    pub const ALL: [Category; Self::COUNT] = [
        Category::CurrencyFormat,
        Category::PercentFormat,
        Category::ThousandSeparatorFormat,
        Category::UnitFormat,
        Category::OrdinalStyle,
        Category::NumberStyle,
        Category::DateFormat,
    ];

    /// Position in [`Category::ALL`], used to index per-category arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::CurrencyFormat => "currency_format",
            Category::PercentFormat => "percent_format",
            Category::ThousandSeparatorFormat => "thousand_separator_format",
            Category::UnitFormat => "unit_format",
            Category::OrdinalStyle => "ordinal_style",
            Category::NumberStyle => "number_style",
            Category::DateFormat => "date_format",
        }
    }

    /// Allowed values in tie-break preference order; `not_detected` is always last.
    pub const fn conventions(self) -> &'static [Convention] {
        use Convention::*;
        match self {
            Category::CurrencyFormat => &[Symbol, Word, NotDetected],
            Category::PercentFormat => &[SymbolSpace, SymbolNoSpace, Word, NotDetected],
            Category::ThousandSeparatorFormat => &[Space, Dot, Comma, NotDetected],
            Category::UnitFormat => &[Short, Long, NotDetected],
            Category::OrdinalStyle => &[DigitSuffix, Word, NotDetected],
            Category::NumberStyle => &[Digit, Word, NotDetected],
            Category::DateFormat => &[NumericDate, IsoDate, LiteralDate, NotDetected],
        }
    }

    /// Value used when the category was never observed at any scope.
    pub const fn default_convention(self) -> Convention {
        match self {
            Category::CurrencyFormat => Convention::Word,
            Category::PercentFormat => Convention::SymbolNoSpace,
            Category::ThousandSeparatorFormat => Convention::Dot,
            Category::UnitFormat => Convention::Long,
            Category::OrdinalStyle => Convention::Word,
            Category::NumberStyle => Convention::Digit,
            Category::DateFormat => Convention::LiteralDate,
        }
    }

    /// Tie-break rank of `value` within this category (lower wins).
    pub fn rank(self, value: Convention) -> Result<usize> {
        self.conventions()
            .iter()
            .position(|&c| c == value)
            .ok_or(Error::ConventionOutOfRange {
                category: self,
                value,
            })
    }

    pub fn contains(self, value: Convention) -> bool {
        self.conventions().contains(&value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Continuous per-transcript measurement, aggregated by mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Share of transcripts containing a hesitation marker
    HesitationFrequency,
    /// Uppercase share of alphabetic characters
    CapitalizationRate,
    /// Share of transcripts containing punctuation
    PunctuationUsage,
}

impl Metric {
    pub const COUNT: usize = 3;

    pub const ALL: [Metric; Self::COUNT] = [
        Metric::HesitationFrequency,
        Metric::CapitalizationRate,
        Metric::PunctuationUsage,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Metric::HesitationFrequency => "hesitation_frequency",
            Metric::CapitalizationRate => "capitalization_rate",
            Metric::PunctuationUsage => "punctuation_usage",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}

/// One formatting style. Labels are shared between categories where they
/// mean the same thing (`word` is valid for currency, percent, ordinal and
/// number style).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Convention {
    #[serde(rename = "symbol")]
    Symbol,
    #[serde(rename = "word")]
    Word,
    #[serde(rename = "symbol_space")]
    SymbolSpace,
    #[serde(rename = "symbol_no_space")]
    SymbolNoSpace,
    #[serde(rename = "space")]
    Space,
    #[serde(rename = "dot")]
    Dot,
    #[serde(rename = "comma")]
    Comma,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "digit_suffix")]
    DigitSuffix,
    #[serde(rename = "digit")]
    Digit,
    /// `25/11/2024`, `31.01.1887`
    #[serde(rename = "dd/mm/yyyy")]
    NumericDate,
    /// `2024-11-25`
    #[serde(rename = "yyyy-mm-dd")]
    IsoDate,
    /// `25 novembre 2024`
    #[serde(rename = "dd_month_yyyy")]
    LiteralDate,
    #[serde(rename = "not_detected")]
    NotDetected,
}

impl Convention {
    pub const ALL: [Convention; 15] = [
        Convention::Symbol,
        Convention::Word,
        Convention::SymbolSpace,
        Convention::SymbolNoSpace,
        Convention::Space,
        Convention::Dot,
        Convention::Comma,
        Convention::Short,
        Convention::Long,
        Convention::DigitSuffix,
        Convention::Digit,
        Convention::NumericDate,
        Convention::IsoDate,
        Convention::LiteralDate,
        Convention::NotDetected,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Convention::Symbol => "symbol",
            Convention::Word => "word",
            Convention::SymbolSpace => "symbol_space",
            Convention::SymbolNoSpace => "symbol_no_space",
            Convention::Space => "space",
            Convention::Dot => "dot",
            Convention::Comma => "comma",
            Convention::Short => "short",
            Convention::Long => "long",
            Convention::DigitSuffix => "digit_suffix",
            Convention::Digit => "digit",
            Convention::NumericDate => "dd/mm/yyyy",
            Convention::IsoDate => "yyyy-mm-dd",
            Convention::LiteralDate => "dd_month_yyyy",
            Convention::NotDetected => "not_detected",
        }
    }

    pub fn is_detected(self) -> bool {
        self != Convention::NotDetected
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Convention::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownConvention(s.to_string()))
    }
}

/// Classification of one non-empty transcript for one category.
///
/// Language and model are opaque keys supplied by ingestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub language: String,
    pub model: String,
    pub category: Category,
    pub value: Convention,
}

impl Observation {
    pub fn new(
        language: impl Into<String>,
        model: impl Into<String>,
        category: Category,
        value: Convention,
    ) -> Self {
        Self {
            language: language.into(),
            model: model.into(),
            category,
            value,
        }
    }
}
