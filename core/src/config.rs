use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the per-document reduction does with `""` tokens.
///
/// Cleanup leaves empty tokens behind whenever a document contains repeated
/// spaces or a word made only of stripped characters. `Keep` counts them as an
/// ordinary stem, which is what the corpus tooling has always done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTokenPolicy {
    #[default]
    Keep,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Danish,
    Dutch,
    #[default]
    English,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Spanish,
    Swedish,
}

impl Language {
    pub fn algorithm(self) -> Algorithm {
        match self {
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = match s.to_ascii_lowercase().as_str() {
            "danish" => Language::Danish,
            "dutch" => Language::Dutch,
            "english" => Language::English,
            "french" => Language::French,
            "german" => Language::German,
            "italian" => Language::Italian,
            "norwegian" => Language::Norwegian,
            "portuguese" => Language::Portuguese,
            "spanish" => Language::Spanish,
            "swedish" => Language::Swedish,
            other => return Err(format!("unsupported stemming language: {other}")),
        };
        Ok(lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
        };
        f.write_str(name)
    }
}

/// Options for turning raw corpus text into per-document stems and counting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Literal that starts every document, e.g. `<doc>`.
    pub doc_marker: String,
    pub language: Language,
    /// Drop English stopwords before stemming.
    pub remove_stopwords: bool,
    /// Apply NFKC normalization before cleanup.
    pub normalize_unicode: bool,
    pub empty_tokens: EmptyTokenPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            doc_marker: "<doc>".to_string(),
            language: Language::English,
            remove_stopwords: false,
            normalize_unicode: false,
            empty_tokens: EmptyTokenPolicy::Keep,
        }
    }
}
