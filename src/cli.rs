//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dictsplit", about = "dictionary to JSON conversion tool.")]
/// Holds every command that is callable by the `dictsplit` command.
pub enum DictSplit {
    #[structopt(about = "Convert a dictionary into per-language JSON files")]
    Convert(Convert),
}

#[derive(Debug, StructOpt)]
/// Convert command and parameters.
///
/// ```sh
/// dictsplit-convert 0.1.0
/// Convert a dictionary into per-language JSON files
///
/// USAGE:
///     dictsplit convert [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -c, --common     also write common-only files
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -l, --lang <languages>...    output languages. Use `all` for every language,
///                                  and `+` to group several languages in a file (eng+ger).
///
/// ARGS:
///     <src>    dictionary (JSON Lines, optionally gzipped)
///     <dst>    output directory
/// ```
pub struct Convert {
    #[structopt(parse(from_os_str), help = "dictionary (JSON Lines, optionally gzipped)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output directory")]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        help = "output languages. Use `all` for every language, and `+` to group several languages in a file (eng+ger).",
        default_value = "all"
    )]
    pub languages: Vec<String>,
    #[structopt(short = "c", long = "common", help = "also write common-only files")]
    pub common: bool,
}
