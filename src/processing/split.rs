/*! MultiGEC splitting

Builds full essay texts from source and target sentences, and splits essays into dev/test/train sets written as markdown files:

```text
sv-swell_gold-orig-dev.md   sv-swell_gold-ref1-dev.md
sv-swell_gold-orig-test.md  sv-swell_gold-ref1-test.md
sv-swell_gold-orig-train.md sv-swell_gold-ref1-train.md
```
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Error;
use crate::processing::essay::EssaySentences;

/// Full texts of an essay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayTexts {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Which side of an essay is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    fn file_tag(&self) -> &'static str {
        match self {
            Side::Source => "orig",
            Side::Target => "ref1",
        }
    }
}

/// Fix whitespace left by token joining.
pub fn adjust_whitespace(text: &str) -> String {
    let mut text = text.replace("\n ", "\n");
    for punct in [".", ":", ",", ";", "!", "?"] {
        text = text.replace(&format!(" {punct}"), punct);
    }
    for punct in ["(", "[", "{"] {
        text = text.replace(&format!("{punct} "), punct);
    }
    for punct in [")", "]", "}"] {
        text = text.replace(&format!(" {punct}"), punct);
    }
    text
}

/// Build full texts for each source essay that has a target counterpart, keeping source order.
pub fn essay_texts(source: &[EssaySentences], target: &[EssaySentences]) -> Vec<EssayTexts> {
    let target: HashMap<&str, &EssaySentences> =
        target.iter().map(|e| (e.id.as_str(), e)).collect();

    source
        .iter()
        .filter_map(|src| match target.get(src.id.as_str()) {
            Some(trg) => Some(EssayTexts {
                id: src.id.clone(),
                source: src.full_text(),
                target: trg.full_text(),
            }),
            None => {
                warn!("[{}] essay has no target counterpart, skipping", src.id);
                None
            }
        })
        .collect()
}

/// Format essays as markdown sections.
pub fn outformat(essays: &[&EssayTexts], side: Side) -> String {
    essays
        .iter()
        .map(|e| {
            let text = match side {
                Side::Source => &e.source,
                Side::Target => &e.target,
            };
            format!("### essay_id = {}\n{}\n\n", e.id, adjust_whitespace(text))
        })
        .collect()
}

/// Dev/test/train partition of essays.
#[derive(Debug)]
pub struct Splits<'a> {
    pub dev: Vec<&'a EssayTexts>,
    pub test: Vec<&'a EssayTexts>,
    pub train: Vec<&'a EssayTexts>,
}

impl<'a> Splits<'a> {
    /// Shuffle essays and take `dev_size` for dev, `test_size` for test and the rest for train.
    ///
    /// Sets are truncated if there are not enough essays.
    pub fn new<R: Rng + ?Sized>(
        essays: &'a [EssayTexts],
        dev_size: usize,
        test_size: usize,
        rng: &mut R,
    ) -> Self {
        let mut shuffled: Vec<&EssayTexts> = essays.iter().collect();
        shuffled.shuffle(rng);

        let dev_end = dev_size.min(shuffled.len());
        let test_end = (dev_end + test_size).min(shuffled.len());
        let train = shuffled.split_off(test_end);
        let test = shuffled.split_off(dev_end);

        Self {
            dev: shuffled,
            test,
            train,
        }
    }

    fn named(&self) -> [(&'static str, &[&'a EssayTexts]); 3] {
        [
            ("dev", self.dev.as_slice()),
            ("test", self.test.as_slice()),
            ("train", self.train.as_slice()),
        ]
    }

    /// Write the orig/ref1 files of each split into `dst`.
    pub fn write(&self, dst: &Path) -> Result<(), Error> {
        for (name, essays) in self.named() {
            for side in [Side::Source, Side::Target] {
                let path = dst.join(format!("sv-swell_gold-{}-{}.md", side.file_tag(), name));
                info!("writing {} essays to {:?}", essays.len(), path);
                let mut f = File::create(path)?;
                f.write_all(outformat(essays, side).as_bytes())?;
            }
        }
        Ok(())
    }
}
