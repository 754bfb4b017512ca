//! # swell
//!
//! Conversion tool for the SweLL-gold Swedish learner essay corpus.
//!
//! ```sh
//! swell 0.1.0
//! SweLL-gold corpus conversion tool.
//!
//! USAGE:
//!     swell <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help        Prints this message or the help of the given subcommand(s)
//!     multigec    Split SweLL-gold essays into MultiGEC dev/test/train files
//!     pairs       Extract sentence pairs from SweLL-gold XML files
//!     read        Read a directory of Svala files into JSON lines
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info swell read corpus/ out.jsonl`).
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use swell_tools::error::Error;
use swell_tools::io::reader::{read_essays, read_swell_directory};
use swell_tools::io::writer::{write_errors, ConlluPairWriter, TsvWriter, WriterDoc, WriterTrait};
use swell_tools::processing::essay::EssaySentences;
use swell_tools::processing::pairs::pair_up;
use swell_tools::processing::sentences::sentence_index;
use swell_tools::processing::split::{essay_texts, Splits};

#[macro_use]
extern crate log;

mod cli;

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Read a SweLL XML file into sentences.
fn sentences(
    path: &Path,
    restore_newlines: bool,
    rng: &mut StdRng,
) -> Result<Vec<EssaySentences>, Error> {
    info!("reading essays from {:?}", path);
    let essays = read_essays(path)?;
    sentence_index(&essays, restore_newlines, rng)
}

/// Prepend `prefix` to the file name of `path`.
fn prefixed(path: &Path, prefix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}{}", prefix, name))
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Swell::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Swell::Read(r) => {
            let corpus = read_swell_directory(&r.src)?;
            let mut wr = WriterDoc::new(BufWriter::new(File::create(&r.dst)?));
            wr.write(&corpus.documents)?;
            wr.flush()?;

            // write eventual reading errors
            for failure in &corpus.errors {
                error!("Error during reading: {:?}", failure);
            }
            write_errors(BufWriter::new(File::create(&r.errors)?), &corpus.errors)?;
        }

        cli::Swell::Pairs(p) => {
            let mut rng = rng(p.seed);
            let source = sentences(&p.source, false, &mut rng)?;
            let target = sentences(&p.target, false, &mut rng)?;
            let pairs = pair_up(&source, &target)?;

            match p.format {
                cli::Format::Tsv => {
                    let mut wr = TsvWriter::new(BufWriter::new(File::create(&p.outfile)?));
                    wr.write(&pairs)?;
                    wr.flush()?;
                }
                cli::Format::Conllu => {
                    let org = BufWriter::new(File::create(prefixed(&p.outfile, "org-"))?);
                    let trg = BufWriter::new(File::create(prefixed(&p.outfile, "trg-"))?);
                    let mut wr = ConlluPairWriter::new(org, trg);
                    wr.write(&pairs)?;
                    wr.flush()?;
                }
            }
        }

        cli::Swell::Multigec(m) => {
            let mut rng = rng(m.seed);
            let source = sentences(&m.src, true, &mut rng)?;
            let target = sentences(&m.trg, true, &mut rng)?;
            let texts = essay_texts(&source, &target);
            let splits = Splits::new(&texts, m.dev_size, m.test_size, &mut rng);
            splits.write(&m.dst)?;
        }
    };
    Ok(())
}
