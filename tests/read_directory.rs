use std::fs;
use std::path::Path;

use swell_tools::error::Error;
use swell_tools::io::reader::read_swell_directory;

fn essay(id: &str) -> String {
    format!(
        r#"Essay ID: {id}
Metadata: <text> age="25" course="sfi D" l1="Tigrinya"
Source: jag har bott i A-stad
Target: Jag har bott i A-stad.
Svala-graph: {{"source": [{{"id": "s0", "text": "jag "}}],
  "target": [{{"id": "t0", "text": "Jag "}}],
  "edges": {{"e-s0-t0": {{"id": "e-s0-t0", "ids": ["s0", "t0"], "labels": ["O-Cap"], "manual": true}}}}}}
"#
    )
}

fn write(root: &Path, path: &str, content: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test_log::test]
fn corpus_with_one_broken_graph() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "spIn_v2.0/a.txt", &essay("A1"));
    write(root.path(), "TISUS_v2.0/b.txt", &essay("B1"));
    write(
        root.path(),
        "TISUS_v2.0/c.txt",
        "Essay ID: C1\nSource: x\nTarget: y\nSvala-graph: {\"source\": [\n",
    );
    write(root.path(), "TISUS_v2.0/._c.txt", "resource fork");

    let corpus = read_swell_directory(root.path()).unwrap();
    assert_eq!(corpus.documents.len(), 2);
    assert_eq!(corpus.errors.len(), 1);
    assert_eq!(corpus.errors[0].id.as_deref(), Some("C1"));
    assert_eq!(corpus.errors[0].path, root.path().join("TISUS_v2.0/c.txt"));

    // parts are visited in name order
    let ids: Vec<&str> = corpus.documents.iter().map(|d| d.id()).collect();
    assert_eq!(ids, vec!["B1", "A1"]);

    let doc = &corpus.documents[1];
    assert_eq!(doc.metadata().get("course").map(String::as_str), Some("sfi D"));
    assert_eq!(doc.text_normalized(), "Jag har bott i A-stad.");
    let graph = doc.svala_graph().decoded().unwrap();
    assert_eq!(graph["edges"]["e-s0-t0"]["labels"][0], "O-Cap");
}

#[test_log::test]
fn unrecognized_line_is_a_file_error() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "part/a.txt", &essay("A1"));
    write(
        root.path(),
        "part/b.txt",
        &format!("Comment: unexpected\n{}", essay("B1")),
    );

    let corpus = read_swell_directory(root.path()).unwrap();
    assert_eq!(corpus.documents.len(), 1);
    assert_eq!(corpus.errors[0].id.as_deref(), Some("B1"));
}

#[test_log::test]
fn nested_directory_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "part/a.txt", &essay("A1"));
    write(root.path(), "part/nested/b.txt", &essay("B1"));

    let res = read_swell_directory(root.path());
    assert!(matches!(res, Err(Error::NestedDirectory(p)) if p.ends_with("nested")));
}

#[test_log::test]
fn empty_directory_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "full/a.txt", &essay("A1"));
    fs::create_dir(root.path().join("empty")).unwrap();

    let res = read_swell_directory(root.path());
    assert!(matches!(res, Err(Error::EmptyDirectory(p)) if p.ends_with("empty")));
}

#[test]
fn missing_root() {
    let res = read_swell_directory(Path::new("this/corpus/does/not/exist"));
    assert!(res.is_err());
}
