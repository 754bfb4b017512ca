/*! Content processing

Contains structures and functions to transform SweLL essays into sentence pairs and MultiGEC splits.
!*/
pub mod document;
pub mod essay;
pub mod pairs;
pub mod pseudonym;
pub mod sentences;
pub mod split;

pub use document::{Document, SvalaGraph};
