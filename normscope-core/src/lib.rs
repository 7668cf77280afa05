//! normscope-core: formatting convention inference for ASR transcripts.
//!
//! Given transcripts from several speech recognition models in several
//! languages, this crate finds out how each model writes currencies,
//! percentages, digit grouping, units, ordinals, numbers and dates, and how
//! often it hesitates, capitalizes and punctuates.
//!
//! # Architecture
//!
//! - [`classifier`]: maps one transcript and one [`types::Category`] to one
//!   [`types::Convention`] through an ordered, first-match-wins rule chain.
//! - [`aggregate`]: counts classifications per (language, model) pair and
//!   resolves a convention for any pair through a five level fallback chain.
//!
//! # Quick Start
//!
//! ```
//! use normscope_core::aggregate::{TallyBuilder, TallyPolicy};
//! use normscope_core::classifier::Features;
//! use normscope_core::types::{Category, Convention};
//!
//! let mut builder = TallyBuilder::new(TallyPolicy::CountAll);
//! for text in ["atteignant parfois 10 km de large", "environ 3 km"] {
//!     if let Some(features) = Features::extract(text) {
//!         builder.record_features("fr", "whisper", &features);
//!     }
//! }
//! let aggregator = builder.finish();
//!
//! assert_eq!(aggregator.resolve("fr", "whisper", Category::UnitFormat), Convention::Short);
//! // Never observed: answered by the language level.
//! assert_eq!(aggregator.resolve("fr", "canary", Category::UnitFormat), Convention::Short);
//! ```

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod types;
