//! Majority aggregation and hierarchical fallback resolution.
//!
//! Observations are accumulated per (language, model) pair by a
//! [`TallyBuilder`]. [`TallyBuilder::finish`] derives the per-language,
//! per-model and global tallies in one pass and returns an immutable
//! [`Aggregator`] that answers every `resolve` query:
//!
//! 1. exact (language, model) pair
//! 2. language across all models
//! 3. model across all languages
//! 4. global
//! 5. the category default
//!
//! The first level holding at least one observation for the category answers.

pub mod tally;

use crate::classifier::Features;
use crate::error::{Error, Result};
use crate::types::{Category, Convention, Metric, Observation};
use std::collections::BTreeMap;
use std::fmt;
use tally::{Mean, Tally};

/// Which observations enter the tallies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TallyPolicy {
    /// `not_detected` is counted and votes like any other convention.
    #[default]
    CountAll,
    /// `not_detected` is not recorded; a scope holding only undetected
    /// observations defers to the next level.
    DetectedOnly,
}

/// Fallback level that produced a resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Pair,
    Language,
    Model,
    Global,
    Default,
}

impl Level {
    /// Levels backed by tallies, in consultation order.
    pub const CHAIN: [Level; 4] = [Level::Pair, Level::Language, Level::Model, Level::Global];

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Pair => "pair",
            Level::Language => "language",
            Level::Model => "model",
            Level::Global => "global",
            Level::Default => "default",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved convention together with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub value: Convention,
    pub level: Level,
    /// Winner's share of the answering tally; 0.0 for defaults.
    pub share: f64,
}

/// Everything tallied for one scope.
#[derive(Clone, Debug, Default)]
struct ScopeTallies {
    conventions: [Tally; Category::COUNT],
    metrics: [Mean; Metric::COUNT],
}

impl ScopeTallies {
    fn merge(&mut self, other: &ScopeTallies) {
        for (mine, theirs) in self.conventions.iter_mut().zip(&other.conventions) {
            mine.merge(theirs);
        }
        for (mine, theirs) in self.metrics.iter_mut().zip(&other.metrics) {
            mine.merge(theirs);
        }
    }
}

type PairMap = BTreeMap<String, BTreeMap<String, ScopeTallies>>;

/// Accumulates observations before resolution.
#[derive(Clone, Debug, Default)]
pub struct TallyBuilder {
    policy: TallyPolicy,
    pairs: PairMap,
}

impl TallyBuilder {
    pub fn new(policy: TallyPolicy) -> Self {
        Self {
            policy,
            pairs: PairMap::new(),
        }
    }

    fn scope(&mut self, language: &str, model: &str) -> &mut ScopeTallies {
        self.pairs
            .entry(language.to_string())
            .or_default()
            .entry(model.to_string())
            .or_default()
    }

    fn count(&mut self, language: &str, model: &str, category: Category, value: Convention) {
        let policy = self.policy;
        let scope = self.scope(language, model);
        if policy == TallyPolicy::CountAll || value.is_detected() {
            scope.conventions[category.index()].add(value);
        }
    }

    /// Record one categorical observation.
    ///
    /// Fails when the value does not belong to the observation's category.
    pub fn record(&mut self, observation: &Observation) -> Result<()> {
        let Observation {
            language,
            model,
            category,
            value,
        } = observation;

        if !category.contains(*value) {
            return Err(Error::ConventionOutOfRange {
                category: *category,
                value: *value,
            });
        }

        self.count(language, model, *category, *value);
        Ok(())
    }

    /// Record one metric sample.
    pub fn record_metric(&mut self, language: &str, model: &str, metric: Metric, value: f64) {
        self.scope(language, model).metrics[metric.index()].add(value);
    }

    /// Record every category and metric measured on one transcript.
    pub fn record_features(&mut self, language: &str, model: &str, features: &Features) {
        for category in Category::ALL {
            self.count(language, model, category, features.convention(category));
        }
        for metric in Metric::ALL {
            self.record_metric(language, model, metric, features.metric(metric));
        }
    }

    /// Fold another builder into this one.
    ///
    /// Counts are additive, so merging partial builders in any order gives
    /// the same tallies as recording everything into one.
    pub fn merge(&mut self, other: TallyBuilder) {
        for (language, models) in other.pairs {
            for (model, tallies) in models {
                self.scope(&language, &model).merge(&tallies);
            }
        }
    }

    /// Derive every scope and freeze the result.
    pub fn finish(self) -> Aggregator {
        let mut languages: BTreeMap<String, ScopeTallies> = BTreeMap::new();
        let mut models: BTreeMap<String, ScopeTallies> = BTreeMap::new();
        let mut global = ScopeTallies::default();

        for (language, by_model) in &self.pairs {
            for (model, tallies) in by_model {
                languages.entry(language.clone()).or_default().merge(tallies);
                models.entry(model.clone()).or_default().merge(tallies);
                global.merge(tallies);
            }
        }

        tracing::debug!(
            policy = ?self.policy,
            languages = languages.len(),
            models = models.len(),
            "tallies built"
        );

        Aggregator {
            pairs: self.pairs,
            languages,
            models,
            global,
        }
    }
}

/// Immutable tallies answering resolution queries.
#[derive(Clone, Debug)]
pub struct Aggregator {
    pairs: PairMap,
    languages: BTreeMap<String, ScopeTallies>,
    models: BTreeMap<String, ScopeTallies>,
    global: ScopeTallies,
}

impl Aggregator {
    /// Build from categorical observations alone.
    pub fn from_observations<I>(observations: I, policy: TallyPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut builder = TallyBuilder::new(policy);
        for observation in observations {
            builder.record(&observation)?;
        }
        Ok(builder.finish())
    }

    fn scope(&self, level: Level, language: &str, model: &str) -> Option<&ScopeTallies> {
        match level {
            Level::Pair => self.pairs.get(language)?.get(model),
            Level::Language => self.languages.get(language),
            Level::Model => self.models.get(model),
            Level::Global => Some(&self.global),
            Level::Default => None,
        }
    }

    /// Tally of `category` at one level, if that scope was observed.
    pub fn tally(&self, level: Level, language: &str, model: &str, category: Category) -> Option<&Tally> {
        self.scope(level, language, model)
            .map(|scope| &scope.conventions[category.index()])
    }

    /// Convention for any (language, model, category); never fails.
    pub fn resolve(&self, language: &str, model: &str, category: Category) -> Convention {
        self.resolve_detailed(language, model, category).value
    }

    /// Like [`Aggregator::resolve`], also reporting the answering level.
    pub fn resolve_detailed(&self, language: &str, model: &str, category: Category) -> Resolution {
        Level::CHAIN
            .into_iter()
            .find_map(|level| {
                let majority = self
                    .tally(level, language, model, category)?
                    .majority(category)?;
                Some(Resolution {
                    value: majority.value,
                    level,
                    share: majority.share(),
                })
            })
            .unwrap_or(Resolution {
                value: category.default_convention(),
                level: Level::Default,
                share: 0.0,
            })
    }

    /// Resolve by category name, failing on names outside the enumeration.
    pub fn resolve_named(&self, language: &str, model: &str, category: &str) -> Result<Convention> {
        let category: Category = category.parse()?;
        Ok(self.resolve(language, model, category))
    }

    /// Mean of a metric, with the same fallback chain; 0.0 when never measured.
    pub fn resolve_metric(&self, language: &str, model: &str, metric: Metric) -> f64 {
        Level::CHAIN
            .into_iter()
            .find_map(|level| self.scope(level, language, model)?.metrics[metric.index()].value())
            .unwrap_or(0.0)
    }

    /// Observed (language, model) pairs, sorted.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().flat_map(|(language, models)| {
            models
                .keys()
                .map(move |model| (language.as_str(), model.as_str()))
        })
    }

    /// Observed languages, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Observed models, sorted.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }
}
