use anyhow::{bail, Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, ValueEnum};
use stemfreq_core::render::{render_bar_chart, render_line, render_lines};
use stemfreq_core::{analyze_with, EmptyTokenPolicy, Language, PipelineConfig};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistogramFormat {
    Text,
    Json,
    None,
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Input path (a corpus file, or a directory of .txt files)
    #[arg(long)]
    pub input: PathBuf,
    /// Literal that starts each document
    #[arg(long, default_value = "<doc>", value_parser = NonEmptyStringValueParser::new())]
    pub doc_marker: String,
    /// Stemming language
    #[arg(long, default_value_t = Language::English)]
    pub language: Language,
    /// Drop English stopwords before stemming
    #[arg(long, default_value_t = false)]
    pub stopwords: bool,
    /// Apply NFKC normalization before cleanup
    #[arg(long, default_value_t = false)]
    pub nfkc: bool,
    /// Ignore empty tokens left behind by cleanup
    #[arg(long, default_value_t = false)]
    pub drop_empty: bool,
    /// Print every stem's list after each document instead of one final listing
    #[arg(long, default_value_t = false)]
    pub trace: bool,
    /// How to print the frequency histogram
    #[arg(long, value_enum, default_value_t = HistogramFormat::Text)]
    pub histogram: HistogramFormat,
    /// Width of the longest histogram bar
    #[arg(long, default_value_t = 60)]
    pub width: usize,
}

impl BuildArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            doc_marker: self.doc_marker.clone(),
            language: self.language,
            remove_stopwords: self.stopwords,
            normalize_unicode: self.nfkc,
            empty_tokens: if self.drop_empty { EmptyTokenPolicy::Drop } else { EmptyTokenPolicy::Keep },
        }
    }
}

/// Read a corpus file, or concatenate every `.txt` file under a directory in
/// path order.
pub fn read_corpus(input: &Path) -> Result<String> {
    if input.is_file() {
        return fs::read_to_string(input).with_context(|| format!("reading {}", input.display()));
    }
    if !input.is_dir() {
        bail!("input path {} does not exist", input.display());
    }
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
            files.push(p.to_path_buf());
        }
    }
    files.sort();
    let mut text = String::new();
    for file in &files {
        text.push_str(&fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?);
    }
    tracing::info!(files = files.len(), bytes = text.len(), "read corpus directory");
    Ok(text)
}

/// Build the index and histogram for `args.input` and write the report to `out`.
pub fn run<W: Write>(args: &BuildArgs, out: &mut W) -> Result<()> {
    let text = read_corpus(&args.input)?;
    let config = args.pipeline_config();

    let mut trace: Vec<String> = Vec::new();
    let analysis = analyze_with(&text, &config, |stem, list| {
        if args.trace {
            trace.push(render_line(stem, list));
        }
    })?;
    tracing::info!(
        num_docs = analysis.index.num_docs(),
        num_terms = analysis.index.len(),
        pairs = analysis.histogram.total_pairs(),
        "analysis complete"
    );

    let lines = if args.trace { trace } else { render_lines(&analysis.index) };
    for line in lines {
        writeln!(out, "{line}")?;
    }

    match args.histogram {
        HistogramFormat::Text => {
            writeln!(out)?;
            write!(out, "{}", render_bar_chart(&analysis.histogram, args.width))?;
        }
        HistogramFormat::Json => writeln!(out, "{}", analysis.histogram.to_json()?)?,
        HistogramFormat::None => {}
    }
    Ok(())
}
