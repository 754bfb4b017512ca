/*! SweLL XML essays and sentences

Types extracted from the SweLL-gold XML files: essays made of flat elements,
and the sentences of (token, correction label) built from them.
!*/
use itertools::Itertools;

/// Label used for tokens that carry no correction.
pub const NO_LABEL: &str = "_";

/// Ordered attributes of an element.
///
/// Order is kept since it drives TSV columns and CoNLL-U comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new(attributes: Vec<(String, String)>) -> Self {
        Self(attributes)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    /// Same entries, in any order.
    pub fn same_entries(&self, other: &Attributes) -> bool {
        fn sorted(attrs: &Attributes) -> Vec<&(String, String)> {
            let mut entries: Vec<&(String, String)> = attrs.0.iter().collect();
            entries.sort();
            entries
        }
        sorted(self) == sorted(other)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// An XML element inside an essay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Text before the first child element.
    pub text: Option<String>,
    pub attributes: Attributes,
}

/// An essay, holding the attributes of its `text` element and the elements it contains, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Essay {
    pub metadata: Attributes,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub form: String,
    pub label: String,
}

impl Token {
    pub fn new(form: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            label: label.into(),
        }
    }

    pub fn has_label(&self) -> bool {
        self.label != NO_LABEL
    }
}

pub type Sentence = Vec<Token>;

/// Sentences of a single essay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssaySentences {
    pub id: String,
    pub metadata: Attributes,
    pub sentences: Vec<Sentence>,
}

impl EssaySentences {
    /// Tokens joined by spaces, sentences joined by spaces.
    pub fn full_text(&self) -> String {
        self.sentences
            .iter()
            .map(|sent| sentence_text(sent))
            .join(" ")
    }
}

/// Tokens of a sentence, joined by spaces.
pub fn sentence_text(sentence: &[Token]) -> String {
    sentence.iter().map(|t| t.form.as_str()).join(" ")
}

/// A source sentence aligned with its corrected counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    pub original: Sentence,
    pub target: Sentence,
    pub metadata: Attributes,
}

impl SentencePair {
    /// Labels of the original sentence, without [NO_LABEL].
    pub fn labels(&self) -> Vec<&str> {
        self.original
            .iter()
            .filter(|t| t.has_label())
            .map(|t| t.label.as_str())
            .collect()
    }
}
