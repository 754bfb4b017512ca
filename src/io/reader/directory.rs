/*! Svala corpus directory reader

The corpus is expected to be laid out on two levels:

```text
root/
├── spIn_v2.0/
│   ├── essay_1.txt
│   └── essay_2.txt
└── TISUS_v2.0/
    └── essay_3.txt
```

Any other shape (nested folders, empty part folders) aborts the reading.
Files that can't be parsed are skipped and reported as [FileError].

Parts and files are visited in file name order.
!*/
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Error;
use crate::processing::Document;

use super::svala::read_swell_file;

/// Cache folder that may sit at the root of the corpus.
const CACHE_DIR: &str = "__pycache__";

/// Prefix of resource-fork/hidden files.
const HIDDEN_PREFIX: &str = "._";

/// A file that could not be read into a valid [Document].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    /// Essay id of the faulty document, if it was read.
    pub id: Option<String>,
    pub path: PathBuf,
}

/// Documents and failures of a corpus reading.
#[derive(Debug, Default)]
pub struct SwellCorpus {
    pub documents: Vec<Document>,
    pub errors: Vec<FileError>,
}

fn is_cache_dir(entry: &DirEntry) -> bool {
    entry.depth() == 1 && entry.file_type().is_dir() && entry.file_name() == CACHE_DIR
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with(HIDDEN_PREFIX))
        .unwrap_or(false)
}

/// List the files of a corpus part, failing if the part holds folders or no file.
fn part_files(part: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(part)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            return Err(Error::NestedDirectory(entry.path()));
        }
        let path = entry.path();
        if is_hidden(&path) {
            debug!("skipping hidden file {:?}", path);
            continue;
        }
        files.push(path);
    }

    if files.is_empty() {
        return Err(Error::EmptyDirectory(part.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// Read every Svala file of a corpus located at `root`.
///
/// Structural problems are returned as errors, and no document is returned in that case.
/// Faulty files are logged and listed in [SwellCorpus::errors].
pub fn read_swell_directory(root: &Path) -> Result<SwellCorpus, Error> {
    let mut corpus = SwellCorpus::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_cache_dir(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let files = part_files(entry.path())?;
        info!(
            "[{}] reading {} files",
            entry.file_name().to_string_lossy(),
            files.len()
        );

        for path in files {
            debug!("reading {:?}", path);
            let (document, error) = match read_swell_file(&path) {
                Ok(parsed) => parsed,
                Err(Error::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                    warn!("{:?} is not valid UTF-8: {}", path, e);
                    corpus.errors.push(FileError { id: None, path });
                    continue;
                }
                Err(e) => return Err(e),
            };

            if error {
                let id = Some(document.id().to_string()).filter(|id| !id.is_empty());
                corpus.errors.push(FileError { id, path });
                continue;
            }
            corpus.documents.push(document);
        }
    }

    info!(
        "read {} documents, {} errors",
        corpus.documents.len(),
        corpus.errors.len()
    );
    Ok(corpus)
}
