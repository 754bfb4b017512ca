/*! SweLL XML reader

Splits a SweLL-gold XML file into [Essay]s, an essay starting at each `text` element.
!*/
use std::path::Path;

use log::debug;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Error;
use crate::processing::essay::{Attributes, Element, Essay};

/// Tag of the element that delimits essays.
pub const ESSAY_TAG: &str = "text";

fn attributes(node: &Node) -> Attributes {
    node.attributes().map(|a| (a.name(), a.value())).collect()
}

fn element(node: &Node) -> Element {
    Element {
        tag: node.tag_name().name().to_string(),
        text: node.text().map(String::from),
        attributes: attributes(node),
    }
}

/// Get essays from XML content.
///
/// Essays that contain no element are dropped.
pub fn parse_essays(content: &str) -> Result<Vec<Essay>, Error> {
    let doc = Document::parse_with_options(
        content,
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        },
    )?;

    let essays = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == ESSAY_TAG)
        .map(|text| Essay {
            metadata: attributes(&text),
            elements: text
                .descendants()
                .skip(1)
                .filter(|n| n.is_element())
                .map(|n| element(&n))
                .collect(),
        })
        .filter(|essay| !essay.elements.is_empty())
        .collect::<Vec<_>>();

    debug!("found {} essays", essays.len());
    Ok(essays)
}

/// Read the essays of a SweLL XML file.
pub fn read_essays(path: &Path) -> Result<Vec<Essay>, Error> {
    let content = std::fs::read_to_string(path)?;
    parse_essays(&content)
}
