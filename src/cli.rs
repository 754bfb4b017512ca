//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "swell", about = "SweLL-gold corpus conversion tool.")]
/// Holds every command that is callable by the `swell` command.
pub enum Swell {
    #[structopt(about = "Read a directory of Svala files into JSON lines")]
    Read(Read),
    #[structopt(about = "Extract sentence pairs from SweLL-gold XML files")]
    Pairs(Pairs),
    #[structopt(about = "Split SweLL-gold essays into MultiGEC dev/test/train files")]
    Multigec(Multigec),
}

#[derive(Debug, StructOpt)]
/// Read command and parameters.
///
/// ```sh
/// USAGE:
///     swell read [OPTIONS] <src> <dst>
///
/// OPTIONS:
///     -e, --errors <errors>    file listing documents that could not be read [default: errors.txt]
///
/// ARGS:
///     <src>    Svala corpus location (one folder per corpus part)
///     <dst>    JSON lines destination file
/// ```
pub struct Read {
    #[structopt(
        parse(from_os_str),
        help = "Svala corpus location (one folder per corpus part)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "JSON lines destination file")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "e",
        long = "errors",
        help = "file listing documents that could not be read",
        default_value = "errors.txt"
    )]
    pub errors: PathBuf,
}

/// Output format of sentence pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tsv,
    Conllu,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tsv" => Ok(Format::Tsv),
            "conllu" => Ok(Format::Conllu),
            other => Err(format!(
                "invalid format {:?}, please select 'conllu' or 'tsv'",
                other
            )),
        }
    }
}

#[derive(Debug, StructOpt)]
/// Pairs command and parameters.
pub struct Pairs {
    #[structopt(parse(from_os_str), help = "The path to the sourceSweLL.xml file")]
    pub source: PathBuf,
    #[structopt(parse(from_os_str), help = "The path to the targetSweLL.xml file")]
    pub target: PathBuf,
    #[structopt(
        long = "format",
        help = "output format (tsv or conllu)",
        default_value = "tsv",
        possible_values = &["tsv", "conllu"]
    )]
    pub format: Format,
    #[structopt(
        parse(from_os_str),
        long = "outfile",
        help = "output file name. With conllu, \"org-\" resp. \"trg-\" are prepended to it",
        default_value = "swell_sent_pairs.tsv"
    )]
    pub outfile: PathBuf,
    #[structopt(long = "seed", help = "seed for pseudonym substitution")]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
/// MultiGEC command and parameters.
pub struct Multigec {
    #[structopt(parse(from_os_str), help = "The path to the sourceSweLL.xml file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "The path to the targetSweLL.xml file")]
    pub trg: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "destination folder",
        default_value = "."
    )]
    pub dst: PathBuf,
    #[structopt(long = "dev-size", help = "number of dev essays", default_value = "50")]
    pub dev_size: usize,
    #[structopt(long = "test-size", help = "number of test essays", default_value = "50")]
    pub test_size: usize,
    #[structopt(long = "seed", help = "seed for shuffling and pseudonym substitution")]
    pub seed: Option<u64>,
}
