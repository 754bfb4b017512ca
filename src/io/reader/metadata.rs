/*! Metadata line tokenization

Svala files store essay metadata as an attribute list (`key="value with spaces" key2="..."`)
that has already been split on whitespace, so a quoted value containing spaces arrives as several tokens.
!*/
use std::collections::HashMap;

use log::warn;

/// Result of the tokenization of a metadata line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedMetadata {
    pub values: HashMap<String, String>,
    /// Continuation tokens that appeared before any key.
    pub orphans: Vec<String>,
}

enum State {
    NoKey,
    Key(String),
}

/// Rebuild a key/value mapping from whitespace-split attribute tokens.
///
/// A token containing `=` starts a new key, any other token is appended (space separated) to the value of the current key.
/// One leading and one trailing `"` are stripped from each value once every token has been consumed.
pub fn tokenize_metadata<'a, I>(tokens: I) -> ParsedMetadata
where
    I: IntoIterator<Item = &'a str>,
{
    let mut raw: HashMap<String, String> = HashMap::new();
    let mut orphans = Vec::new();
    let mut state = State::NoKey;

    for token in tokens {
        match (token.split_once('='), &state) {
            (Some((key, value)), _) => {
                raw.insert(key.to_string(), value.to_string());
                state = State::Key(key.to_string());
            }
            (None, State::Key(key)) => {
                if let Some(value) = raw.get_mut(key) {
                    value.push(' ');
                    value.push_str(token);
                }
            }
            (None, State::NoKey) => {
                warn!("metadata token {:?} has no key to attach to", token);
                orphans.push(token.to_string());
            }
        }
    }

    let values = raw
        .into_iter()
        .map(|(k, v)| (k, strip_quotes(&v).to_string()))
        .collect();

    ParsedMetadata { values, orphans }
}

/// Strip exactly one leading and one trailing double quote.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
