/*! Svala documents

A [Document] holds everything read from a single Svala file: essay id, original and normalized texts,
essay metadata and the Svala annotation graph.
!*/
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Annotation graph of a document.
///
/// The graph is kept as [SvalaGraph::Raw] text when it could not be decoded as JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SvalaGraph {
    Decoded(Value),
    Raw(String),
}

impl SvalaGraph {
    /// Get the decoded graph, if any.
    pub fn decoded(&self) -> Option<&Value> {
        match self {
            Self::Decoded(v) => Some(v),
            Self::Raw(_) => None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }
}

/// A single SweLL essay, read from a Svala file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Document {
    id: String,
    text: String,
    text_normalized: String,
    metadata: HashMap<String, String>,
    svala_graph: SvalaGraph,
}

impl Document {
    pub fn new(
        id: String,
        text: String,
        text_normalized: String,
        metadata: HashMap<String, String>,
        svala_graph: SvalaGraph,
    ) -> Self {
        Self {
            id,
            text,
            text_normalized,
            metadata,
            svala_graph,
        }
    }

    /// Get a reference to the document's essay id.
    ///
    /// Empty if the file had no `Essay ID` line.
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// Get a reference to the document's original text.
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }

    /// Get a reference to the document's normalized text.
    pub fn text_normalized(&self) -> &str {
        self.text_normalized.as_ref()
    }

    /// Get a reference to the document's metadata.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Get a reference to the document's svala graph.
    pub fn svala_graph(&self) -> &SvalaGraph {
        &self.svala_graph
    }
}
