//! Per-document stem occurrence index and frequency-of-frequencies histogram.

pub mod config;
pub mod counts;
pub mod error;
pub mod histogram;
pub mod index;
pub mod pipeline;
pub mod render;
pub mod tokenizer;

pub use config::{EmptyTokenPolicy, Language, PipelineConfig};
pub use error::{Result, StemfreqError};
pub use histogram::FrequencyHistogram;
pub use index::{DocId, Occurrence, OccurrenceIndex, OccurrenceList, TermId};
pub use pipeline::{analyze, analyze_with, Analysis};
