/*! Pseudonym substitution

SweLL replaces personal information with placeholders such as `A-stad` or `B-land`.
They are replaced here by readable (but not necessarily coherent) names.
!*/
use std::collections::HashMap;

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;

lazy_static! {
    /// Placeholder category to candidate replacements.
    pub static ref PLACEHOLDERS: HashMap<&'static str, Vec<&'static str>> = vec![
        ("kurs", vec!["kurs"]),
        ("kursen", vec!["kursen"]),
        ("skola", vec!["Buroskola", "Andeskola", "Storeskola", "Bungahjulet"]),
        ("region", vec!["Sydlunda", "Undered", "Hanskim", "Bungalarna"]),
        ("svensk-stad", vec!["Sydden", "Norrebock", "Rosaborg", "Ögglestad"]),
        (
            "institution",
            vec!["Volvodrömen", "Linsbiblioteket", "Forkecentralen", "Bungavård"],
        ),
        ("geoplats", vec!["Fafjällen", "Undberget", "Baraön", "Lokomitt"]),
        ("linjen", vec!["buss"]),
        ("stad-gen", vec!["Syddens", "Norrebocks", "Rosaborgs", "Ögglestads"]),
        ("stad", vec!["Oslo", "Paris", "Bagdad", "Caracas"]),
        ("land", vec!["Danmark", "Mongoliet", "Sudan", "Peru"]),
        ("land-gen", vec!["Danmarks", "Mongoliets", "Sudans", "Perus"]),
        ("hemland", vec!["Brasil", "Spanien", "Irak", "Kina"]),
        ("plats", vec!["Burocentrum", "Andeplats", "Storetorg", "Bungafors"]),
    ]
    .into_iter()
    .collect();
}

const MARKERS: [&str; 4] = ["A-", "B-", "C-", "D-"];

/// Whether `word` looks like a placeholder.
fn is_placeholder(word: &str) -> bool {
    MARKERS.iter().any(|m| word.contains(m))
}

/// Replace a placeholder word by one of its candidates.
///
/// The category is looked up from the third character on.
/// Words that are not placeholders, or of an unknown category, are returned as is.
pub fn substitute<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    if !is_placeholder(word) {
        return word.to_string();
    }

    let category = match word.char_indices().nth(2) {
        Some((idx, _)) => &word[idx..],
        None => return word.to_string(),
    };

    PLACEHOLDERS
        .get(category)
        .and_then(|candidates| candidates.choose(rng))
        .map(|c| c.to_string())
        .unwrap_or_else(|| word.to_string())
}
