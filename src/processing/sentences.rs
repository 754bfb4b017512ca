/*! Sentence extraction

Turns [Essay]s into sentences of (token, correction label).
!*/
use log::debug;
use rand::Rng;

use crate::error::Error;
use crate::processing::essay::{EssaySentences, Essay, Sentence, Token, NO_LABEL};
use crate::processing::pseudonym::substitute;

/// Marker used by SweLL for line breaks inside essays.
pub const NEWLINE_MARKER: &str = "␤";

const ESSAY_ID_ATTR: &str = "essay_id";
const LABEL_ATTR: &str = "correction_label";
const SENTENCE_TAG: &str = "sentence";
const LINK_TAG: &str = "link";

/// Get the sentences of a single essay.
///
/// If `restore_newlines` is set, [NEWLINE_MARKER]s are replaced by `\n`. Otherwise tokens containing them are dropped.
///
/// A `sentence` element only closes a non-empty sentence, but the last sentence of an essay is always kept,
/// even when all of its tokens were dropped. It counts when pairing essays by sentence number.
pub fn essay_sentences<R: Rng + ?Sized>(
    essay: &Essay,
    restore_newlines: bool,
    rng: &mut R,
) -> Result<EssaySentences, Error> {
    let id = essay
        .metadata
        .get(ESSAY_ID_ATTR)
        .ok_or(Error::MissingEssayId)?
        .to_string();

    let mut sentences = Vec::new();
    let mut sentence: Sentence = Vec::new();

    for element in &essay.elements {
        if element.tag == LINK_TAG {
            continue;
        }
        if element.tag == SENTENCE_TAG {
            if !sentence.is_empty() {
                sentences.push(std::mem::take(&mut sentence));
            }
            continue;
        }

        let word = match &element.text {
            // layout whitespace between elements
            Some(w) if w.trim().is_empty() => continue,
            Some(w) if restore_newlines => w.replace(NEWLINE_MARKER, "\n"),
            Some(w) => w.clone(),
            None => continue,
        };

        if word.contains(NEWLINE_MARKER) || word.contains(id.as_str()) {
            continue;
        }

        let label = element.attributes.get(LABEL_ATTR).unwrap_or(NO_LABEL);
        sentence.push(Token::new(substitute(&word, rng), label));
    }

    sentences.push(sentence);

    debug!("[{}] {} sentences", id, sentences.len());
    Ok(EssaySentences {
        id,
        metadata: essay.metadata.clone(),
        sentences,
    })
}

/// Get the sentences of every essay, keeping essay order.
pub fn sentence_index<R: Rng + ?Sized>(
    essays: &[Essay],
    restore_newlines: bool,
    rng: &mut R,
) -> Result<Vec<EssaySentences>, Error> {
    essays
        .iter()
        .map(|essay| essay_sentences(essay, restore_newlines, rng))
        .collect()
}
