//! Dictionary conversion pipeline.
//!
//! Reads a JSON Lines dictionary and writes one JSON document per requested language,
//! plus a common-only document per language when asked to.
//!
//! Files are named after the dictionary: `<name>-<lang>[-common]-<version>.json`.
use std::path::PathBuf;

use log::{info, warn};

use crate::dictionary::jsonl::{SourceConverter, SourceEntry};
use crate::error::Error;
use crate::io::{file_name, DictReader, JsonHeader, OutputChannel};
use crate::lang::Languages;
use crate::pipelines::fanout::{FanOut, Summary};
use crate::pipelines::handler::drive;
use crate::pipelines::pipeline::Pipeline;

pub struct Convert {
    src: PathBuf,
    dst: PathBuf,
    languages: Vec<Languages>,
    with_common: bool,
}

impl Convert {
    pub fn new(src: PathBuf, dst: PathBuf, languages: Vec<Languages>, with_common: bool) -> Self {
        if languages.is_empty() {
            warn!("No output language specified! Nothing will be written.");
        }
        Self {
            src,
            dst,
            languages,
            with_common,
        }
    }

    /// Output targets, full outputs first.
    fn targets(&self) -> Vec<(Languages, bool)> {
        let mut targets: Vec<(Languages, bool)> =
            self.languages.iter().cloned().map(|l| (l, false)).collect();
        if self.with_common {
            targets.extend(self.languages.iter().cloned().map(|l| (l, true)));
        }
        targets
    }
}

impl Pipeline<Summary> for Convert {
    fn run(&self) -> Result<Summary, Error> {
        let reader: DictReader<_, SourceEntry> = DictReader::from_path(&self.src)?;
        let metadata = reader.metadata().clone();
        info!("Output directory: {:?}", self.dst);
        std::fs::create_dir_all(&self.dst)?;

        let mut channels = Vec::new();
        for (languages, common_only) in self.targets() {
            let name = file_name(&metadata.name, &metadata.version, &languages, common_only);
            channels.push(OutputChannel::new(
                &self.dst.join(name),
                languages,
                common_only,
            )?);
        }

        let mut fanout = FanOut::new(channels, SourceConverter, JsonHeader);
        drive(&metadata, reader, &mut fanout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets() {
        let en = Languages::parse(["eng"]).unwrap();
        let c = Convert::new(
            PathBuf::from("src"),
            PathBuf::from("dst"),
            vec![en.clone(), Languages::All],
            true,
        );
        assert_eq!(
            c.targets(),
            vec![
                (en.clone(), false),
                (Languages::All, false),
                (en, true),
                (Languages::All, true)
            ]
        );
    }

    #[test]
    fn missing_source() {
        let c = Convert::new(
            PathBuf::from("svdkjljlkmjlmdsfljkf"),
            PathBuf::from("fzjoijzoecijzoiej"),
            vec![Languages::All],
            false,
        );
        assert!(c.run().is_err());
    }
}
