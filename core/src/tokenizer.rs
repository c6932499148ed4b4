use crate::config::PipelineConfig;
use crate::error::{Result, StemfreqError};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::Stemmer;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref OPEN_TAG: Regex = Regex::new(r"<\w{0,8}>").expect("valid regex");
    static ref CLOSE_TAG: Regex = Regex::new(r"</\w{0,8}>").expect("valid regex");
    // Record identifiers such as LA010189-0001.
    static ref RECORD_ID: Regex = Regex::new(r"\w\w\d{6}\W\d{4}").expect("valid regex");
    static ref PUNCT: Regex = Regex::new(r"([^\s\w]|_)+").expect("valid regex");
    static ref DIGITS: Regex = Regex::new(r"\d+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

// Apostrophes are stripped by cleanup, so the list carries no contractions.
fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Split a concatenated corpus into documents on `marker`.
///
/// Whatever precedes the first marker is a preamble and is discarded, so text
/// without any marker yields no documents. An empty marker is rejected.
pub fn split_documents<'a>(text: &'a str, marker: &str) -> Result<Vec<&'a str>> {
    if marker.is_empty() {
        return Err(StemfreqError::invalid_input("document marker must not be empty"));
    }
    Ok(text.split(marker).skip(1).collect())
}

/// Strip markup, newlines, record ids, punctuation and digits, then lowercase.
pub fn clean_document(text: &str) -> String {
    let text = OPEN_TAG.replace_all(text, "");
    let text = CLOSE_TAG.replace_all(&text, "");
    let text = text.replace('\n', "");
    let text = RECORD_ID.replace_all(&text, "");
    let text = PUNCT.replace_all(&text, "");
    let text = DIGITS.replace_all(&text, "");
    text.to_lowercase()
}

/// Clean one document and turn it into stems.
///
/// Tokens are separated by single spaces, so runs of spaces produce empty
/// tokens. Those are kept here; [`EmptyTokenPolicy`](crate::EmptyTokenPolicy)
/// decides their fate when counting.
pub fn tokenize_document(text: &str, stemmer: &Stemmer, config: &PipelineConfig) -> Vec<String> {
    let cleaned = if config.normalize_unicode {
        clean_document(&text.nfkc().collect::<String>())
    } else {
        clean_document(text)
    };
    cleaned
        .split(' ')
        .filter(|token| !(config.remove_stopwords && is_stopword(token)))
        .map(|token| stemmer.stem(token).into_owned())
        .collect()
}

/// Split, clean and stem a whole corpus: one token sequence per document, in
/// corpus order.
pub fn tokenize_corpus(text: &str, config: &PipelineConfig) -> Result<Vec<Vec<String>>> {
    let stemmer = Stemmer::create(config.language.algorithm());
    let docs: Vec<Vec<String>> = split_documents(text, &config.doc_marker)?
        .into_iter()
        .map(|doc| tokenize_document(doc, &stemmer, config))
        .collect();
    tracing::debug!(num_docs = docs.len(), language = %config.language, "tokenized corpus");
    Ok(docs)
}
