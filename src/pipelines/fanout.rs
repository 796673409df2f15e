//! Fan-out of dictionary entries into several outputs.
//!
//! Each entry is converted once, then written in every [OutputChannel] that accepts it,
//! narrowed to the languages of the output.
//!
//! # Entry counts
//!
//! The count written in an output header is not the number of entries in the document:
//!
//! * outputs targeting `all` get the number of source entries,
//! * other outputs get the number of source entries having content in their (first) language,
//!   whether the output is common-only or not.
use std::collections::HashMap;
use std::path::PathBuf;

use itertools::Itertools;
use log::{debug, info};

use crate::dictionary::{Converter, InputEntry, Metadata, OutputEntry};
use crate::error::Error;
use crate::io::{HeaderWriter, OutputChannel, WORDS_CLOSE};
use crate::lang::Languages;
use crate::pipelines::handler::EventHandler;

/// Running entry totals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counters {
    total: u64,
    by_language: HashMap<String, u64>,
}

impl Counters {
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn language(&self, lang: &str) -> u64 {
        self.by_language.get(lang).copied().unwrap_or(0)
    }

    fn add<'a>(&mut self, languages: impl IntoIterator<Item = &'a str>) {
        self.total += 1;
        for lang in languages {
            *self.by_language.entry(lang.to_string()).or_insert(0) += 1;
        }
    }

    /// Count reported in the header of an output targeting `languages`.
    pub fn reported(&self, languages: &Languages) -> u64 {
        match languages {
            Languages::All => self.total,
            only => self.language(only.primary()),
        }
    }
}

/// Outcome for a single output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    pub path: PathBuf,
    pub languages: Languages,
    pub common_only: bool,
    /// Value written in `entryCount`.
    pub reported: u64,
    /// Number of entries actually in the document.
    pub written: u64,
}

pub type Summary = Vec<ChannelSummary>;

pub struct FanOut<C, H> {
    channels: Vec<OutputChannel>,
    converter: C,
    header: H,
    counters: Counters,
}

impl<C: Converter, H: HeaderWriter> FanOut<C, H> {
    pub fn new(channels: Vec<OutputChannel>, converter: C, header: H) -> Self {
        Self {
            channels,
            converter,
            header,
            counters: Counters::default(),
        }
    }

    pub fn channels(&self) -> &[OutputChannel] {
        &self.channels
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }
}

impl<C: Converter, H: HeaderWriter> EventHandler<C::Input> for FanOut<C, H> {
    type Output = Summary;

    fn on_start(&mut self) -> Result<(), Error> {
        info!(
            "Output files:\n{}",
            self.channels
                .iter()
                .map(|c| format!(" - {}", c.path().display()))
                .join("\n")
        );
        Ok(())
    }

    fn on_metadata(&mut self, metadata: &Metadata) -> Result<(), Error> {
        debug!("dictionary {} {}", metadata.name, metadata.version);
        for channel in self.channels.iter_mut() {
            channel.open()?;
            let path = channel.path().to_path_buf();
            self.header
                .write_header(metadata, channel)
                .map_err(|e| e.on_channel(path))?;
        }
        Ok(())
    }

    fn on_entry(&mut self, entry: C::Input) -> Result<(), Error> {
        let word = self.converter.convert(&entry)?;
        self.counters.add(entry.languages());

        for channel in self.channels.iter_mut().filter(|c| c.accepts(&word)) {
            let json = word.only_with_languages(channel.languages()).to_json()?;
            let separator = if channel.wrote_at_least_one() { "," } else { "" };
            channel.write(&format!("{}\n{}", separator, json))?;
            channel.mark_wrote_at_least_one();
        }
        Ok(())
    }

    fn on_finish(&mut self) -> Result<Summary, Error> {
        let mut summary = Vec::with_capacity(self.channels.len());
        for channel in self.channels.iter_mut() {
            let reported = self.counters.reported(channel.languages());
            info!("{} has {} entries.", channel.languages(), reported);

            channel.write(WORDS_CLOSE)?;
            channel.patch_count(reported)?;
            channel.close()?;

            summary.push(ChannelSummary {
                path: channel.path().to_path_buf(),
                languages: channel.languages().clone(),
                common_only: channel.common_only(),
                reported,
                written: channel.written(),
            });
        }
        Ok(summary)
    }
}
