/*! Tab-separated sentence pairs

One row per [SentencePair], holding essay metadata followed by the original sentence, the corrected sentence
and the comma-separated correction labels.
The header is built from the first pair written. Essays may carry a different number of metadata
attributes, so rows are not required to match the header length.
!*/
use std::io::Write;

use crate::error::Error;
use crate::processing::essay::{sentence_text, SentencePair};

use super::WriterTrait;

const PAIR_COLUMNS: [&str; 3] = ["original sentence", "corrected sentence", "correction labels"];

pub struct TsvWriter<W: Write> {
    handle: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(handle: W) -> Self {
        let handle = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(handle);

        Self {
            handle,
            header_written: false,
        }
    }
}

impl<W: Write> WriterTrait for TsvWriter<W> {
    type Item = SentencePair;

    fn write_single(&mut self, pair: &SentencePair) -> Result<(), Error> {
        if !self.header_written {
            let header = pair.metadata.keys().chain(PAIR_COLUMNS.iter().copied());
            self.handle.write_record(header)?;
            self.header_written = true;
        }

        let original = sentence_text(&pair.original);
        let target = sentence_text(&pair.target);
        let labels = pair.labels().join(",");
        let row = pair.metadata.values().chain([
            original.as_str(),
            target.as_str(),
            labels.as_str(),
        ]);
        self.handle.write_record(row)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
