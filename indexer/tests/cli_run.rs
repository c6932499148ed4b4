use std::fs;
use std::path::PathBuf;
use stemfreq::{read_corpus, run, BuildArgs, HistogramFormat};
use stemfreq_core::Language;
use tempfile::tempdir;

fn args(input: PathBuf) -> BuildArgs {
    BuildArgs {
        input,
        doc_marker: "<doc>".into(),
        language: Language::English,
        stopwords: false,
        nfkc: false,
        drop_empty: true,
        trace: false,
        histogram: HistogramFormat::None,
        width: 10,
    }
}

fn output(args: &BuildArgs) -> String {
    let mut out = Vec::new();
    run(args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn lists_stems_in_first_seen_order() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.txt");
    fs::write(&file, "<doc>cat cat dog<doc>cat").unwrap();

    let text = output(&args(file));
    assert_eq!(text, "cat :[1,2] -> [2,1]\ndog :[1,1]\n");
}

#[test]
fn trace_prints_after_each_document() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.txt");
    fs::write(&file, "<doc>cat cat dog<doc>cat").unwrap();

    let mut a = args(file);
    a.trace = true;
    let text = output(&a);
    assert_eq!(text, "cat :[1,2]\ndog :[1,1]\ncat :[1,2] -> [2,1]\n");
}

#[test]
fn histogram_as_json() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.txt");
    fs::write(&file, "<doc>run run jump").unwrap();

    let mut a = args(file);
    a.histogram = HistogramFormat::Json;
    let text = output(&a);
    let json_start = text.find('{').unwrap();
    let v: serde_json::Value = serde_json::from_str(&text[json_start..]).unwrap();
    assert_eq!(v, serde_json::json!({"1": 1, "2": 1}));
}

#[test]
fn histogram_as_text_chart() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.txt");
    fs::write(&file, "<doc>run run jump").unwrap();

    let mut a = args(file);
    a.histogram = HistogramFormat::Text;
    let text = output(&a);
    assert!(text.contains("Distribution word frequency"));
    assert!(text.contains("     2 | ########## 1"));
}

#[test]
fn empty_stems_are_listed_by_default() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.txt");
    fs::write(&file, "<doc>cat  dog").unwrap();

    let mut a = args(file);
    a.drop_empty = false;
    let text = output(&a);
    assert_eq!(text, "cat :[1,1]\n :[1,1]\ndog :[1,1]\n");
}

#[test]
fn empty_doc_marker_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.txt");
    fs::write(&file, "preamble no marker").unwrap();

    let mut a = args(file);
    a.doc_marker = String::new();
    let mut out = Vec::new();
    let err = run(&a, &mut out).unwrap_err();
    assert!(err.to_string().contains("document marker must not be empty"));
    assert!(out.is_empty());
}

#[test]
fn directory_input_concatenates_in_path_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), "<doc>second").unwrap();
    fs::write(dir.path().join("a.txt"), "<doc>first").unwrap();
    fs::write(dir.path().join("notes.md"), "<doc>ignored").unwrap();

    let text = read_corpus(dir.path()).unwrap();
    assert_eq!(text, "<doc>first<doc>second");
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(read_corpus(&dir.path().join("nope.txt")).is_err());
}
