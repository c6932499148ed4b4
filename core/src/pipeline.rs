use crate::config::PipelineConfig;
use crate::error::Result;
use crate::histogram::FrequencyHistogram;
use crate::index::{OccurrenceIndex, OccurrenceList};
use crate::tokenizer::tokenize_corpus;

/// Everything derived from one corpus.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub words: Vec<Vec<String>>,
    pub index: OccurrenceIndex,
    pub histogram: FrequencyHistogram,
}

/// Tokenize `text`, then build the index and the histogram from the same
/// token sequences. `on_touched` receives the per-document trace.
pub fn analyze_with<F>(text: &str, config: &PipelineConfig, on_touched: F) -> Result<Analysis>
where
    F: FnMut(&str, &OccurrenceList),
{
    let words = tokenize_corpus(text, config)?;
    let index = OccurrenceIndex::build_with(&words, config.empty_tokens, on_touched)?;
    let histogram = FrequencyHistogram::build(&words, config.empty_tokens);
    Ok(Analysis { words, index, histogram })
}

pub fn analyze(text: &str, config: &PipelineConfig) -> Result<Analysis> {
    analyze_with(text, config, |_, _| {})
}
