use stemfreq_core::render::render_lines;
use stemfreq_core::{analyze, EmptyTokenPolicy, FrequencyHistogram, Occurrence, OccurrenceIndex, PipelineConfig};

fn records(index: &OccurrenceIndex, stem: &str) -> Vec<(u32, u32)> {
    index.get(stem).unwrap().iter().map(|o| (o.doc_id, o.count)).collect()
}

#[test]
fn single_document_counts() {
    let docs = vec![vec!["run", "run", "jump"]];
    let index = OccurrenceIndex::build(&docs, EmptyTokenPolicy::Keep).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(records(&index, "run"), vec![(1, 2)]);
    assert_eq!(records(&index, "jump"), vec![(1, 1)]);

    let h = FrequencyHistogram::build(&docs, EmptyTokenPolicy::Keep);
    assert_eq!(h.iter().collect::<Vec<_>>(), vec![(1, 1), (2, 1)]);
}

#[test]
fn repetition_across_documents_appends() {
    let docs = vec![vec!["cat", "cat"], vec!["cat"]];
    let index = OccurrenceIndex::build(&docs, EmptyTokenPolicy::Keep).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("cat").unwrap().as_slice(), &[Occurrence::new(1, 2), Occurrence::new(2, 1)]);
    assert_eq!(render_lines(&index), vec!["cat :[1,2] -> [2,1]"]);

    let h = FrequencyHistogram::build(&docs, EmptyTokenPolicy::Keep);
    assert_eq!(h.get(2), Some(1));
    assert_eq!(h.get(1), Some(1));
    assert_eq!(h.len(), 2);
}

#[test]
fn empty_document_yields_nothing() {
    let docs: Vec<Vec<String>> = vec![vec![]];
    assert!(OccurrenceIndex::build(&docs, EmptyTokenPolicy::Keep).unwrap().is_empty());
    assert!(FrequencyHistogram::build(&docs, EmptyTokenPolicy::Keep).is_empty());
}

#[test]
fn empty_corpus_yields_nothing() {
    let docs: Vec<Vec<String>> = Vec::new();
    let index = OccurrenceIndex::build(&docs, EmptyTokenPolicy::Keep).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.num_docs(), 0);
    assert!(FrequencyHistogram::build(&docs, EmptyTokenPolicy::Keep).is_empty());
}

#[test]
fn empty_token_policy_is_shared_by_both_builders() {
    let docs = vec![vec!["", "a", ""]];
    let kept = OccurrenceIndex::build(&docs, EmptyTokenPolicy::Keep).unwrap();
    assert_eq!(records(&kept, ""), vec![(1, 2)]);
    assert_eq!(FrequencyHistogram::build(&docs, EmptyTokenPolicy::Keep).total_pairs(), 2);

    let dropped = OccurrenceIndex::build(&docs, EmptyTokenPolicy::Drop).unwrap();
    assert!(!dropped.contains(""));
    assert_eq!(FrequencyHistogram::build(&docs, EmptyTokenPolicy::Drop).total_pairs(), 1);
}

#[test]
fn analyze_runs_the_whole_pipeline() {
    let text = "<doc><p>The cat sat.</p>\n<doc><p>Cats, cats!</p>";
    let config = PipelineConfig { empty_tokens: EmptyTokenPolicy::Drop, ..PipelineConfig::default() };
    let mut trace = Vec::new();
    let analysis = stemfreq_core::analyze_with(text, &config, |stem, list| trace.push(format!("{stem} :{list}"))).unwrap();
    assert_eq!(analysis.words.len(), 2);
    assert_eq!(records(&analysis.index, "cat"), vec![(1, 1), (2, 2)]);
    assert_eq!(trace.last().unwrap(), "cat :[1,1] -> [2,2]");
    assert_eq!(analysis.histogram.get(2), Some(1));

    let again = analyze(text, &config).unwrap();
    assert_eq!(again.index, analysis.index);
    assert_eq!(again.histogram, analysis.histogram);
}
