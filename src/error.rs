//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Xml(roxmltree::Error),
    WalkDir(walkdir::Error),
    /// Failure while writing a CoNLL-U sentence.
    Conllu(String),
    /// A corpus part directory holds a subdirectory.
    NestedDirectory(PathBuf),
    /// A corpus part directory holds no readable file.
    EmptyDirectory(PathBuf),
    /// An essay element has no `essay_id` attribute.
    MissingEssayId,
    /// Source and target essays disagree on metadata.
    MetadataMismatch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Xml(e) => write!(f, "xml error: {}", e),
            Error::WalkDir(e) => write!(f, "directory walk error: {}", e),
            Error::Conllu(e) => write!(f, "conllu error: {}", e),
            Error::NestedDirectory(p) => {
                write!(f, "found a folder in corpus directory {:?}", p)
            }
            Error::EmptyDirectory(p) => write!(f, "found an empty corpus directory {:?}", p),
            Error::MissingEssayId => write!(f, "essay without an essay_id attribute"),
            Error::MetadataMismatch(id) => {
                write!(f, "source and target metadata differ for essay {}", id)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Error {
        Error::WalkDir(e)
    }
}
