//! normscope: infer how ASR models format transcripts and turn the result
//! into annotation guidelines.

pub mod analyze;
pub mod classify;
pub mod cli;
pub mod config;
pub mod guide;
pub mod ingest;
pub mod summary;
