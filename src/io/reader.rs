//! JSON Lines dictionary reader.
//!
//! Reads plain or gzipped (`.gz`) files.
//! The metadata line is read eagerly, entries are then yielded lazily.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::{debug, error};
use serde::de::DeserializeOwned;

use crate::dictionary::Metadata;
use crate::error::Error;

pub struct DictReader<R, E> {
    metadata: Metadata,
    lines: Lines<R>,
    line_number: usize,
    entry: PhantomData<E>,
}

impl<E: DeserializeOwned> DictReader<Box<dyn BufRead>, E> {
    /// Open a dictionary file, using a [MultiGzDecoder] if it ends with `.gz`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if path.extension().map_or(false, |ext| ext == "gz") {
            debug!("reading gzipped dictionary {:?}", path);
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            debug!("reading dictionary {:?}", path);
            Box::new(BufReader::new(file))
        };
        Self::new(reader)
    }
}

impl<R: BufRead, E: DeserializeOwned> DictReader<R, E> {
    /// Read the metadata line.
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines();
        let mut line_number = 0;

        let metadata = loop {
            line_number += 1;
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    break serde_json::from_str::<Metadata>(&line).map_err(|e| {
                        error!("invalid metadata on line {}: {}", line_number, e);
                        e
                    })?;
                }
                None => return Err(Error::Custom("empty dictionary".to_string())),
            }
        };

        Ok(Self {
            metadata,
            lines,
            line_number,
            entry: PhantomData,
        })
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl<R: BufRead, E: DeserializeOwned> Iterator for DictReader<R, E> {
    type Item = Result<E, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&line).map_err(|e| {
                error!("invalid entry on line {}: {}", self.line_number, e);
                e.into()
            }));
        }
    }
}
