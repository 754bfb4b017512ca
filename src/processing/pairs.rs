/*! Sentence pairing

Naive alignment of source (original) and target (corrected) sentences:
only essays with the same number of sentences on both sides are kept, and the i-th sentences are paired.
!*/
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::error::Error;
use crate::processing::essay::{EssaySentences, SentencePair};

/// Pair sentences of source and target essays, following source essay order.
///
/// Source essays missing from `target` are skipped.
/// Fails if an essay has different metadata in source and target (attribute order is ignored).
pub fn pair_up(
    source: &[EssaySentences],
    target: &[EssaySentences],
) -> Result<Vec<SentencePair>, Error> {
    let target: HashMap<&str, &EssaySentences> =
        target.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut pairs = Vec::new();
    let mut nb_skipped = 0;

    for src in source {
        let trg = match target.get(src.id.as_str()) {
            Some(trg) => trg,
            None => {
                warn!("[{}] essay has no target counterpart, skipping", src.id);
                continue;
            }
        };

        if !src.metadata.same_entries(&trg.metadata) {
            return Err(Error::MetadataMismatch(src.id.clone()));
        }

        if src.sentences.len() != trg.sentences.len() {
            debug!(
                "[{}] sentence count differs ({} vs {}), skipping",
                src.id,
                src.sentences.len(),
                trg.sentences.len()
            );
            nb_skipped += 1;
            continue;
        }

        pairs.extend(
            src.sentences
                .iter()
                .zip(trg.sentences.iter())
                .map(|(original, target)| SentencePair {
                    original: original.clone(),
                    target: target.clone(),
                    metadata: src.metadata.clone(),
                }),
        );
    }

    info!(
        "paired {} sentences, skipped {} essays with unequal sentence counts",
        pairs.len(),
        nb_skipped
    );
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use crate::processing::essay::{Attributes, Sentence, Token};

    use super::*;

    fn sentence(words: &[&str]) -> Sentence {
        words.iter().map(|w| Token::new(*w, "_")).collect()
    }

    fn essay(id: &str, sentences: Vec<Sentence>) -> EssaySentences {
        EssaySentences {
            id: id.to_string(),
            metadata: vec![("essay_id", id)].into_iter().collect(),
            sentences,
        }
    }

    #[test]
    fn pairs_equal_essays_only() {
        let source = vec![
            essay("a", vec![sentence(&["jag", "bor"]), sentence(&["hej"])]),
            essay("b", vec![sentence(&["x"])]),
        ];
        let target = vec![
            essay("b", vec![sentence(&["X"]), sentence(&["Y"])]),
            essay("a", vec![sentence(&["Jag", "bor", "."]), sentence(&["Hej", "!"])]),
        ];

        let pairs = pair_up(&source, &target).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].original, sentence(&["jag", "bor"]));
        assert_eq!(pairs[0].target, sentence(&["Jag", "bor", "."]));
        assert_eq!(pairs[1].target, sentence(&["Hej", "!"]));
        assert_eq!(pairs[1].metadata.get("essay_id"), Some("a"));
    }

    #[test]
    fn missing_target_is_skipped() {
        let source = vec![essay("a", vec![sentence(&["x"])])];
        let pairs = pair_up(&source, &[]).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn metadata_mismatch() {
        let source = vec![essay("a", vec![sentence(&["x"])])];
        let mut trg = essay("a", vec![sentence(&["x"])]);
        trg.metadata = Attributes::new(vec![("essay_id".to_string(), "other".to_string())]);

        assert!(matches!(
            pair_up(&source, &[trg]),
            Err(Error::MetadataMismatch(id)) if id == "a"
        ));
    }

    #[test]
    fn reordered_metadata_still_pairs() {
        let mut src = essay("e1", vec![sentence(&["x"])]);
        src.metadata = vec![("essay_id", "e1"), ("age", "19")].into_iter().collect();
        let mut trg = essay("e1", vec![sentence(&["X"])]);
        trg.metadata = vec![("age", "19"), ("essay_id", "e1")].into_iter().collect();

        let pairs = pair_up(&[src], &[trg]).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs[0].metadata.keys().collect::<Vec<_>>(),
            vec!["essay_id", "age"]
        );
    }
}
