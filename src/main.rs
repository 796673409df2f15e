//! # dictsplit
//!
//! Splits a dictionary into per-language JSON documents, streaming entries
//! so that the whole dictionary never has to fit in memory.
//!
//! ## Getting started
//!
//! ```sh
//! dictsplit 0.1.0
//! dictionary to JSON conversion tool.
//!
//! USAGE:
//!     dictsplit <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     convert    Convert a dictionary into per-language JSON files
//!     help       Prints this message or the help of the given subcommand(s)
//! ```
//!
use structopt::StructOpt;

use dictsplit::error::Error;
use dictsplit::lang::Languages;
use dictsplit::pipelines::{Convert, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::DictSplit::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::DictSplit::Convert(c) => {
            let languages = c
                .languages
                .iter()
                .map(|l| Languages::parse(l.split('+')))
                .collect::<Result<Vec<_>, _>>()?;

            let p = Convert::new(c.src, c.dst, languages, c.common);
            let summary = p.run().map_err(|e| {
                error!("conversion failed: {}", e);
                e
            })?;

            for s in summary {
                info!(
                    "{:?}: {} entries written, {} reported",
                    s.path, s.written, s.reported
                );
            }
        }
    };
    Ok(())
}
