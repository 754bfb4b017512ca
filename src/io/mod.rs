/*!
# IO utilities

Reading of Svala files and SweLL XML files, and writing of documents and sentence pairs.
!*/
pub mod reader;
pub mod writer;
