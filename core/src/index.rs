use crate::config::EmptyTokenPolicy;
use crate::counts::count_terms;
use crate::error::{Result, StemfreqError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type TermId = u32;
/// 1-based position of a document in the corpus.
pub type DocId = u32;

/// How many times a stem occurs in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub doc_id: DocId,
    pub count: u32,
}

impl Occurrence {
    pub fn new(doc_id: DocId, count: u32) -> Self { Self { doc_id, count } }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.doc_id, self.count)
    }
}

/// Append-only occurrences of one stem, ordered by doc_id.
///
/// Deserialized lists go through [`OccurrenceList::push`], so they obey the
/// same ordering and positivity rules as built ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Occurrence>", try_from = "Vec<Occurrence>")]
pub struct OccurrenceList {
    records: Vec<Occurrence>,
}

impl OccurrenceList {
    pub fn new() -> Self { Self::default() }

    /// Append a record for a later document than any already present.
    pub fn push(&mut self, record: Occurrence) -> Result<()> {
        if record.doc_id == 0 {
            return Err(StemfreqError::invalid_input("document ids start at 1"));
        }
        if record.count == 0 {
            return Err(StemfreqError::invalid_input(format!(
                "zero occurrence count for document {}",
                record.doc_id
            )));
        }
        if let Some(last) = self.records.last() {
            if record.doc_id <= last.doc_id {
                return Err(StemfreqError::invalid_input(format!(
                    "document {} appended after document {}",
                    record.doc_id, last.doc_id
                )));
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Occurrence] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> { self.records.iter() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Sum of counts over every document the stem appears in.
    pub fn total_count(&self) -> u64 {
        self.records.iter().map(|r| r.count as u64).sum()
    }
}

impl fmt::Display for OccurrenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Occurrence>> for OccurrenceList {
    type Error = StemfreqError;

    fn try_from(records: Vec<Occurrence>) -> Result<Self> {
        let mut list = Self::new();
        for record in records {
            list.push(record)?;
        }
        Ok(list)
    }
}

impl From<OccurrenceList> for Vec<Occurrence> {
    fn from(list: OccurrenceList) -> Self { list.records }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// Stem -> occurrence list, iterated in the order stems were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceIndex {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    postings: Vec<OccurrenceList>,
    num_docs: u32,
}

impl OccurrenceIndex {
    pub fn new() -> Self { Self::default() }

    pub fn build<D, T>(documents: &[D], policy: EmptyTokenPolicy) -> Result<Self>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        Self::build_with(documents, policy, |_, _| {})
    }

    /// Build the index, calling `on_touched(stem, list)` after each document
    /// for every stem that document contributed to, in the order it
    /// contributed them.
    pub fn build_with<D, T, F>(documents: &[D], policy: EmptyTokenPolicy, mut on_touched: F) -> Result<Self>
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
        F: FnMut(&str, &OccurrenceList),
    {
        let mut index = Self::new();
        let mut touched: Vec<TermId> = Vec::new();
        for (i, doc) in documents.iter().enumerate() {
            let article = DocId::try_from(i + 1)
                .map_err(|_| StemfreqError::invalid_input(format!("corpus exceeds {} documents", DocId::MAX)))?;
            touched.clear();
            for (term, count) in count_terms(doc.as_ref(), policy) {
                let tid = index.term_id_or_insert(term);
                index.postings[tid as usize].push(Occurrence::new(article, count))?;
                touched.push(tid);
            }
            for &tid in &touched {
                on_touched(&index.terms[tid as usize], &index.postings[tid as usize]);
            }
            index.num_docs = article;
        }
        tracing::info!(num_docs = index.num_docs, num_terms = index.len(), "built occurrence index");
        Ok(index)
    }

    fn term_id_or_insert(&mut self, term: &str) -> TermId {
        if let Some(&tid) = self.dictionary.get(term) {
            return tid;
        }
        let tid = self.terms.len() as TermId;
        self.dictionary.insert(term.to_string(), tid);
        self.terms.push(term.to_string());
        self.postings.push(OccurrenceList::new());
        tid
    }

    pub fn get(&self, stem: &str) -> Option<&OccurrenceList> {
        self.dictionary.get(stem).map(|&tid| &self.postings[tid as usize])
    }

    pub fn contains(&self, stem: &str) -> bool { self.dictionary.contains_key(stem) }

    /// Number of distinct stems.
    pub fn len(&self) -> usize { self.terms.len() }
    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Number of documents processed, including those with no tokens.
    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OccurrenceList)> + '_ {
        self.terms.iter().map(String::as_str).zip(self.postings.iter())
    }

    /// Number of (stem, document) pairs recorded.
    pub fn num_pairs(&self) -> usize {
        self.postings.iter().map(OccurrenceList::len).sum()
    }
}
