/*! Svala file reader

Svala files are line oriented, each field being introduced by a case insensitive marker at the start of the line:

```text
Essay ID: <id>
Metadata: <label> key="value" key2="multi word value"
Source: <original text>
Target: <normalized text>
Svala-graph: <json, possibly spanning several lines>
```

Every line following the `Svala-graph` marker belongs to the graph, whatever it starts with.
The concatenated graph is decoded once the whole file has been read.
!*/
use std::collections::HashMap;
use std::path::Path;

use log::{error, warn};
use serde_json::Value;

use crate::error::Error;
use crate::processing::{Document, SvalaGraph};

use super::metadata::tokenize_metadata;

/// Placeholder used in logs when the essay id has not been read (yet).
const UNKNOWN_ID: &str = "<unknown>";

/// Classification of a single (trimmed) line.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Empty,
    /// Start of the graph, holding the text after the marker.
    GraphMarker(&'a str),
    EssayId(&'a str),
    /// Whitespace-split metadata tokens, label excluded.
    Metadata(Vec<&'a str>),
    Source(&'a str),
    Target(&'a str),
    Unrecognized(&'a str),
}

/// Lowercased first `n` characters of `line`.
fn prefix(line: &str, n: usize) -> String {
    line.chars().take(n).collect::<String>().to_lowercase()
}

/// Part of `line` after its first `n` characters.
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// Part of `line` after its first colon.
fn after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, rest)| rest).unwrap_or("")
}

/// Trim newlines and spaces (only) around a line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c| c == '\n' || c == ' ')
}

impl<'a> Line<'a> {
    /// Classify an already trimmed line.
    ///
    /// Graph continuation lines are not detected here since they depend on parser state.
    pub fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Empty;
        }

        if prefix(line, 11) == "svala-graph" {
            return Line::GraphMarker(after_colon(line).trim_start_matches(' '));
        }

        match prefix(line, 8).as_str() {
            "essay id" => return Line::EssayId(after_colon(line).trim_matches(' ')),
            // first token is a label
            "metadata" => {
                return Line::Metadata(skip_chars(line, 9).split_whitespace().skip(1).collect())
            }
            _ => (),
        }

        match prefix(line, 6).as_str() {
            "source" => Line::Source(skip_chars(line, 7).trim()),
            "target" => Line::Target(skip_chars(line, 7).trim()),
            _ => Line::Unrecognized(line),
        }
    }
}

/// Document under construction.
#[derive(Debug, Default)]
struct DocumentBuilder {
    id: Option<String>,
    text: Option<String>,
    text_normalized: Option<String>,
    metadata: Option<HashMap<String, String>>,
    graph: Option<String>,
}

impl DocumentBuilder {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_ID)
    }

    /// Decode the graph and build the document.
    /// Returns `true` alongside the document if something went wrong.
    fn finish(self) -> (Document, bool) {
        let mut error_flag = false;
        if self.id.is_none() {
            warn!("document has no essay id");
            error_flag = true;
        }

        let graph_text = self.graph.as_deref().unwrap_or("");
        let svala_graph = match decode_graph(graph_text) {
            Ok(v) => SvalaGraph::Decoded(v),
            Err(e) => {
                error!("Could not import svala graph from document {}", self.id());
                error!("{}", e);
                error_flag = true;
                SvalaGraph::Raw(graph_text.to_string())
            }
        };

        let doc = Document::new(
            self.id.unwrap_or_default(),
            self.text.unwrap_or_default(),
            self.text_normalized.unwrap_or_default(),
            self.metadata.unwrap_or_default(),
            svala_graph,
        );

        (doc, error_flag)
    }
}

/// Decode accumulated graph text.
pub fn decode_graph(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

#[derive(Clone, Copy)]
enum Mode {
    Fields,
    Graph,
}

/// Parse the content of a Svala file.
///
/// The returned flag is `true` if any line was not understood or if the graph could not be decoded.
/// The document is returned in every case, with an undecoded graph if decoding failed.
pub fn parse_swell_record(content: &str) -> (Document, bool) {
    let mut builder = DocumentBuilder::default();
    let mut mode = Mode::Fields;
    let mut error_flag = false;

    for line in content.lines() {
        let line = trim_line(line);
        let kind = Line::classify(line);

        match (kind, mode) {
            (Line::Empty, _) => continue,
            (Line::GraphMarker(graph), _) => {
                builder.graph = Some(graph.to_string());
                mode = Mode::Graph;
            }
            (_, Mode::Graph) => builder.graph.get_or_insert_with(String::new).push_str(line),
            (Line::EssayId(id), Mode::Fields) => builder.id = Some(id.to_string()),
            (Line::Metadata(tokens), Mode::Fields) => {
                let parsed = tokenize_metadata(tokens);
                if !parsed.orphans.is_empty() {
                    warn!(
                        "Metadata of document {} has tokens without key: {:?}",
                        builder.id(),
                        parsed.orphans
                    );
                    error_flag = true;
                }
                builder.metadata = Some(parsed.values);
            }
            (Line::Source(text), Mode::Fields) => builder.text = Some(text.to_string()),
            (Line::Target(text), Mode::Fields) => builder.text_normalized = Some(text.to_string()),
            (Line::Unrecognized(line), Mode::Fields) => {
                warn!("Weird line found in document {}", builder.id());
                warn!("Content: {}", line);
                warn!("{}", line.chars().count());
                error_flag = true;
            }
        }
    }

    let (doc, finish_error) = builder.finish();
    (doc, error_flag || finish_error)
}

/// Read and parse a single Svala file.
///
/// Propagates I/O errors, including invalid UTF-8 content.
pub fn read_swell_file(path: &Path) -> Result<(Document, bool), Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_swell_record(&content))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const VALID: &str = r#"Essay ID: A1B2
Metadata: <text> age="19" course="sfi C" l1="Arabic"
Source: jag gillar  skola
Target: Jag gillar skolan.
Svala-graph: {"source": [{"id": "s0", "text": "jag "}],
  "target": [{"id": "t0", "text": "Jag "}],
  "edges": {}}
"#;

    #[test]
    fn classify_markers() {
        assert_eq!(Line::classify(""), Line::Empty);
        assert_eq!(Line::classify("ESSAY ID: x"), Line::EssayId("x"));
        assert_eq!(Line::classify("Source: a b"), Line::Source("a b"));
        assert_eq!(Line::classify("target:a"), Line::Target("a"));
        assert_eq!(Line::classify("SVALA-GRAPH: {}"), Line::GraphMarker("{}"));
        assert_eq!(
            Line::classify("Metadata: label a=\"b\""),
            Line::Metadata(vec!["a=\"b\""])
        );
        assert_eq!(Line::classify("  Source: x"), Line::Unrecognized("  Source: x"));
        assert_eq!(Line::classify("hello"), Line::Unrecognized("hello"));
    }

    #[test]
    fn classify_short_lines() {
        assert_eq!(Line::classify("Source"), Line::Source(""));
        assert_eq!(Line::classify("Essay ID"), Line::EssayId(""));
    }

    #[test]
    fn classify_graph_keeps_remaining_colons() {
        assert_eq!(
            Line::classify(r#"Svala-graph: {"a": 1}"#),
            Line::GraphMarker(r#"{"a": 1}"#)
        );
    }

    #[test]
    fn trim_only_spaces_and_newlines() {
        assert_eq!(trim_line("  foo \n"), "foo");
        assert_eq!(trim_line("\tfoo"), "\tfoo");
    }

    #[test]
    fn valid_record() {
        let (doc, error) = parse_swell_record(VALID);
        assert!(!error);
        assert_eq!(doc.id(), "A1B2");
        assert_eq!(doc.text(), "jag gillar  skola");
        assert_eq!(doc.text_normalized(), "Jag gillar skolan.");
        assert_eq!(doc.metadata().get("course").unwrap(), "sfi C");
        assert_eq!(doc.metadata().get("age").unwrap(), "19");
        assert_eq!(doc.metadata().len(), 3);
        let graph = doc.svala_graph().decoded().unwrap();
        assert_eq!(graph["edges"], json!({}));
        assert_eq!(graph["target"][0]["id"], json!("t0"));
    }

    #[test]
    fn invalid_graph() {
        let content = "Essay ID: X9\nSource: a\nTarget: b\nSvala-graph: {\"source\": [\n";
        let (doc, error) = parse_swell_record(content);
        assert!(error);
        assert_eq!(doc.id(), "X9");
        assert_eq!(
            doc.svala_graph(),
            &SvalaGraph::Raw("{\"source\": [".to_string())
        );
    }

    #[test]
    fn unrecognized_line_before_graph() {
        let content = "Essay ID: X1\nComment: nothing\nSvala-graph: {}\n";
        let (_, error) = parse_swell_record(content);
        assert!(error);
    }

    #[test]
    fn unrecognized_line_without_id() {
        let content = "what is this\nSvala-graph: {}\n";
        let (doc, error) = parse_swell_record(content);
        assert!(error);
        assert_eq!(doc.id(), "");
    }

    #[test]
    fn markers_in_graph_are_graph_content() {
        let content = "Essay ID: X2\nSvala-graph: {\"a\":\nSource: \"x\"}\n";
        let (doc, error) = parse_swell_record(content);
        assert!(error);
        assert_eq!(doc.text(), "");
        assert_eq!(
            doc.svala_graph(),
            &SvalaGraph::Raw("{\"a\":Source: \"x\"}".to_string())
        );

        let content = "Essay ID: X3\nSvala-graph: {\"a\":\n\"Target: x\"}\n";
        let (doc, error) = parse_swell_record(content);
        assert!(!error);
        assert_eq!(doc.text_normalized(), "");
        assert_eq!(doc.svala_graph().decoded().unwrap()["a"], json!("Target: x"));
    }

    #[test]
    fn missing_graph() {
        let (doc, error) = parse_swell_record("Essay ID: X4\nSource: a\n");
        assert!(error);
        assert!(!doc.svala_graph().is_decoded());
    }

    #[test]
    fn orphan_metadata_token() {
        let content = "Essay ID: X5\nMetadata: label orphan a=\"b\"\nSvala-graph: {}\n";
        let (doc, error) = parse_swell_record(content);
        assert!(error);
        assert_eq!(doc.metadata().get("a").unwrap(), "b");
    }

    #[test]
    fn crlf_lines() {
        let content = "Essay ID: X6\r\nSource: a\r\nSvala-graph: {}\r\n";
        let (doc, error) = parse_swell_record(content);
        assert!(!error);
        assert_eq!(doc.id(), "X6");
    }

    #[test]
    fn read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.txt");
        std::fs::write(&path, VALID).unwrap();
        let (doc, error) = read_swell_file(&path).unwrap();
        assert!(!error);
        assert_eq!(doc.id(), "A1B2");
    }
}
