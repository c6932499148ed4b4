use crate::config::EmptyTokenPolicy;
use crate::counts::count_terms;
use crate::error::{Result, StemfreqError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frequency of frequencies: per-document occurrence count -> number of
/// (stem, document) pairs with exactly that count.
///
/// Keys are kept sorted so rendering and serialization are deterministic.
/// Deserialized histograms must have positive keys and frequencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<u32, u64>", try_from = "BTreeMap<u32, u64>")]
pub struct FrequencyHistogram {
    buckets: BTreeMap<u32, u64>,
}

impl FrequencyHistogram {
    pub fn new() -> Self { Self::default() }

    /// Recount every document and tally the resulting counts.
    pub fn build<D, T>(documents: &[D], policy: EmptyTokenPolicy) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut histogram = Self::new();
        for doc in documents {
            for (_, count) in count_terms(doc.as_ref(), policy) {
                histogram.record(count);
            }
        }
        tracing::info!(buckets = histogram.len(), pairs = histogram.total_pairs(), "built frequency histogram");
        histogram
    }

    /// Tally already-computed per-document counts.
    pub fn from_counts<I: IntoIterator<Item = u32>>(counts: I) -> Result<Self> {
        let mut histogram = Self::new();
        for count in counts {
            if count == 0 {
                return Err(StemfreqError::invalid_input("occurrence counts must be positive"));
            }
            histogram.record(count);
        }
        Ok(histogram)
    }

    fn record(&mut self, count: u32) {
        *self.buckets.entry(count).or_insert(0) += 1;
    }

    pub fn get(&self, count: u32) -> Option<u64> { self.buckets.get(&count).copied() }
    pub fn len(&self) -> usize { self.buckets.len() }
    pub fn is_empty(&self) -> bool { self.buckets.is_empty() }

    /// (count value, frequency) in ascending count order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.buckets.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of (stem, document) pairs tallied.
    pub fn total_pairs(&self) -> u64 { self.buckets.values().sum() }

    pub fn max_frequency(&self) -> u64 { self.buckets.values().copied().max().unwrap_or(0) }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<BTreeMap<u32, u64>> for FrequencyHistogram {
    type Error = StemfreqError;

    fn try_from(buckets: BTreeMap<u32, u64>) -> Result<Self> {
        if let Some((count, freq)) = buckets.iter().find(|&(&count, &freq)| count == 0 || freq == 0) {
            return Err(StemfreqError::invalid_input(format!(
                "histogram bucket {count} -> {freq} is not positive"
            )));
        }
        Ok(Self { buckets })
    }
}

impl From<FrequencyHistogram> for BTreeMap<u32, u64> {
    fn from(histogram: FrequencyHistogram) -> Self { histogram.buckets }
}
