/*! Corpus reading utilities

- [svala] parses a single Svala file into a [crate::processing::Document],
- [directory] reads a whole Svala corpus,
- [xml] splits SweLL XML files into essays.
!*/
pub mod directory;
mod metadata;
pub mod svala;
pub mod xml;

pub use directory::{read_swell_directory, FileError, SwellCorpus};
pub use metadata::{tokenize_metadata, ParsedMetadata};
pub use svala::{parse_swell_record, read_swell_file};
pub use xml::read_essays;
