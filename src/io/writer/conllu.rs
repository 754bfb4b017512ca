/*! CoNLL-U writing

Sentences are written with their essay metadata as comments, one token per line.
Only ID and FORM are set, the correction label goes into MISC:

```text
# essay_id = a
# age = 19
1	jag	_	_	_	_	_	_	_	O-Cap
2	bor	_	_	_	_	_	_	_	_

```
!*/
use std::io::Write;

use conllu::graph::{Comment, Sentence};
use conllu::io::{WriteSentence, Writer};
use conllu::token::{Misc, TokenBuilder};

use crate::error::Error;
use crate::processing::essay::{Attributes, SentencePair, Token};

use super::WriterTrait;

/// Build a CoNLL-U sentence, with metadata as `# key = value` comments.
fn to_conllu(tokens: &[Token], metadata: &Attributes) -> Sentence {
    let mut sentence = Sentence::new();
    sentence.set_comments(
        metadata
            .iter()
            .map(|(attr, val)| Comment::AttrVal {
                attr: attr.clone(),
                val: val.clone(),
            })
            .collect::<Vec<_>>(),
    );

    for token in tokens {
        let mut builder = TokenBuilder::new(token.form.as_str());
        if token.has_label() {
            builder = builder.misc(Misc::from(token.label.as_str()));
        }
        sentence.push(builder.into());
    }

    sentence
}

pub struct ConlluWriter<W: Write> {
    handle: W,
}

impl<W: Write> ConlluWriter<W> {
    pub fn new(handle: W) -> Self {
        Self { handle }
    }

    /// Write a sentence followed by a blank line.
    pub fn write_sentence(&mut self, tokens: &[Token], metadata: &Attributes) -> Result<(), Error> {
        let sentence = to_conllu(tokens, metadata);
        Writer::new(&mut self.handle)
            .write_sentence(&sentence)
            .map_err(|e| Error::Conllu(e.to_string()))?;
        writeln!(self.handle)?;
        Ok(())
    }
}

/// Writes original sentences and targets into two separate CoNLL-U streams.
pub struct ConlluPairWriter<W: Write> {
    original: ConlluWriter<W>,
    target: ConlluWriter<W>,
}

impl<W: Write> ConlluPairWriter<W> {
    pub fn new(original: W, target: W) -> Self {
        Self {
            original: ConlluWriter::new(original),
            target: ConlluWriter::new(target),
        }
    }
}

impl<W: Write> WriterTrait for ConlluPairWriter<W> {
    type Item = SentencePair;

    fn write_single(&mut self, pair: &SentencePair) -> Result<(), Error> {
        self.original
            .write_sentence(&pair.original, &pair.metadata)?;
        self.target.write_sentence(&pair.target, &pair.metadata)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.original.handle.flush()?;
        self.target.handle.flush()?;
        Ok(())
    }
}
