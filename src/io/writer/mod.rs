/*!
# Writing

Every writer wraps a [std::io::Write] handle and implements [WriterTrait]:

- [WriterDoc] writes parsed Svala documents as JSON lines,
- [TsvWriter] writes sentence pairs as tab-separated rows,
- [ConlluPairWriter] writes sentence pairs as two CoNLL-U streams.
!*/
mod conllu;
mod tsv;
mod writer_doc;
mod writertrait;
pub use conllu::{ConlluPairWriter, ConlluWriter};
pub use tsv::TsvWriter;
pub use writer_doc::{write_errors, WriterDoc};
pub use writertrait::WriterTrait;
