/*! JSON lines writer for [Document]s, along with the error list of a corpus reading.
!*/
use std::io::Write;

use crate::error::Error;
use crate::io::reader::FileError;
use crate::processing::Document;

use super::WriterTrait;

/// Writes one JSON [Document] per line.
pub struct WriterDoc<W: Write> {
    handle: W,
}

impl<W: Write> WriterDoc<W> {
    pub fn new(handle: W) -> Self {
        Self { handle }
    }
}

impl<W: Write> WriterTrait for WriterDoc<W> {
    type Item = Document;

    fn write(&mut self, pieces: &[Document]) -> Result<(), Error> {
        let mut piece_str = String::new();
        for piece in pieces {
            piece_str += &serde_json::to_string(piece)?;
            piece_str.push('\n');
        }
        self.handle.write_all(piece_str.as_bytes())?;

        Ok(())
    }

    fn write_single(&mut self, piece: &Document) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, piece)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

/// Write file errors as `<id>\t<path>` lines, `-` standing for an unknown id.
pub fn write_errors<W: Write>(mut handle: W, errors: &[FileError]) -> Result<(), Error> {
    for e in errors {
        writeln!(
            handle,
            "{}\t{}",
            e.id.as_deref().unwrap_or("-"),
            e.path.display()
        )?;
    }
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use serde_json::json;

    use crate::processing::SvalaGraph;

    use super::*;

    fn doc(id: &str) -> Document {
        let metadata: HashMap<String, String> =
            vec![("age".to_string(), "19".to_string())].into_iter().collect();
        Document::new(
            id.to_string(),
            "hej".to_string(),
            "Hej.".to_string(),
            metadata,
            SvalaGraph::Decoded(json!({"edges": {"e-s0-t0": {"labels": ["O"]}}})),
        )
    }

    #[test]
    fn write_lines() {
        let mut buf = Vec::new();
        {
            let mut wr = WriterDoc::new(&mut buf);
            wr.write(&[doc("a"), doc("b")]).unwrap();
            wr.write_single(&doc("c")).unwrap();
            wr.flush().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        let docs: Vec<Document> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(docs, vec![doc("a"), doc("b"), doc("c")]);
    }

    #[test]
    fn error_lines() {
        let mut buf = Vec::new();
        let errors = vec![
            FileError {
                id: Some("A1".to_string()),
                path: PathBuf::from("part/a.txt"),
            },
            FileError {
                id: None,
                path: PathBuf::from("part/b.txt"),
            },
        ];
        write_errors(&mut buf, &errors).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "A1\tpart/a.txt\n-\tpart/b.txt\n"
        );
    }
}
