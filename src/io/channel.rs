/*! Single output document.

An [OutputChannel] owns one JSON file and streams entries into it.
The file starts with an `entryCount` field whose value is only known once every entry is read:
[OutputChannel::open] reserves room for the widest possible count,
and [OutputChannel::patch_count] overwrites the reserved room in place once the count is known.

```text
{
"entryCount": 42                  ,
...
"words": [
...
] }
```

Content only grows through [OutputChannel::write], which appends at the end of the file.
!*/
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::dictionary::OutputEntry;
use crate::error::Error;
use crate::lang::Languages;

const COUNT_KEY: &str = "entryCount";

/// Width of the count placeholder, enough for any [u64].
pub fn count_width() -> usize {
    u64::MAX.to_string().len()
}

/// Output file name for a given dictionary and target.
///
/// `jmdict-eng-common-3.6.1.json`
pub fn file_name(name: &str, version: &str, languages: &Languages, common_only: bool) -> String {
    if common_only {
        format!("{}-{}-common-{}.json", name, languages, version)
    } else {
        format!("{}-{}-{}.json", name, languages, version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unopened,
    /// Holds the offset of the count placeholder.
    Opened(u64),
    Closed,
}

pub struct OutputChannel {
    path: PathBuf,
    languages: Languages,
    common_only: bool,
    handle: Option<BufWriter<File>>,
    state: State,
    wrote_at_least_one: bool,
    written: u64,
    patched: bool,
}

impl OutputChannel {
    /// Create (or truncate) the file at `path`.
    ///
    /// Nothing is written before [Self::open].
    pub fn new(path: &Path, languages: Languages, common_only: bool) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::from(e).on_channel(path.to_path_buf()))?;

        debug!("created output {:?} ({}, common only: {})", path, languages, common_only);
        Ok(Self {
            path: path.to_path_buf(),
            languages,
            common_only,
            handle: Some(BufWriter::new(file)),
            state: State::Unopened,
            wrote_at_least_one: false,
            written: 0,
            patched: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn common_only(&self) -> bool {
        self.common_only
    }

    pub fn wrote_at_least_one(&self) -> bool {
        self.wrote_at_least_one
    }

    /// Number of entries marked as written.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Offset of the count placeholder, if opened.
    pub fn count_offset(&self) -> Option<u64> {
        match self.state {
            State::Opened(offset) => Some(offset),
            _ => None,
        }
    }

    fn precondition(&self, msg: String) -> Error {
        error!("{:?}: {}", self.path, msg);
        Error::Precondition(msg).on_channel(self.path.clone())
    }

    fn handle(&mut self) -> Result<&mut BufWriter<File>, Error> {
        if self.state == State::Closed {
            return Err(self.precondition("write on a closed output".to_string()));
        }
        match self.handle.as_mut() {
            Some(h) => Ok(h),
            None => Err(Error::Custom("missing file handle".to_string()).on_channel(self.path.clone())),
        }
    }

    /// Write the object start and blank placeholder, returning the placeholder offset.
    fn reserve_count(&mut self) -> Result<u64, Error> {
        let handle = self.handle()?;
        write!(handle, "{{\n\"{}\": ", COUNT_KEY)?;
        let offset = handle.stream_position()?;
        write!(handle, "{:width$},\n", "", width = count_width())?;
        Ok(offset)
    }

    /// Overwrite bytes at `offset`, leaving the cursor at the end of the file.
    fn write_at(&mut self, offset: u64, text: &str) -> Result<(), Error> {
        let handle = self.handle()?;
        let tail = handle.stream_position()?;
        handle.seek(SeekFrom::Start(offset))?;
        handle.write_all(text.as_bytes())?;
        handle.seek(SeekFrom::Start(tail))?;
        Ok(())
    }

    /// Start the JSON object and reserve the count placeholder.
    pub fn open(&mut self) -> Result<(), Error> {
        if self.state != State::Unopened {
            return Err(self.precondition(format!("open on a {:?} output", self.state)));
        }

        let offset = self
            .reserve_count()
            .map_err(|e| e.on_channel(self.path.clone()))?;

        debug!("{:?}: count placeholder at {}", self.path, offset);
        self.state = State::Opened(offset);
        Ok(())
    }

    /// Append raw text at the end of the file.
    pub fn write(&mut self, text: &str) -> Result<(), Error> {
        if self.state == State::Unopened {
            return Err(self.precondition("write on an unopened output".to_string()));
        }
        let path = self.path.clone();
        self.handle()?
            .write_all(text.as_bytes())
            .map_err(|e| Error::from(e).on_channel(path))
    }

    /// true if the entry belongs in this output.
    ///
    /// Either the entry shares a language with the output or the output targets every language,
    /// and the entry is common if the output only accepts common entries.
    pub fn accepts<E: OutputEntry>(&self, entry: &E) -> bool {
        let shares_language = self.languages.is_all() || self.languages.intersects(entry.languages());
        shares_language && (!self.common_only || entry.is_common())
    }

    /// Record an entry write. The first one switches [Self::wrote_at_least_one] on.
    pub fn mark_wrote_at_least_one(&mut self) {
        self.wrote_at_least_one = true;
        self.written += 1;
    }

    /// Overwrite the count placeholder with `value`, space-padded, then go back to the end of the file.
    pub fn patch_count(&mut self, value: u64) -> Result<(), Error> {
        let offset = match self.state {
            State::Opened(offset) => offset,
            state => {
                return Err(self.precondition(format!(
                    "patching count {} on a {:?} output",
                    value, state
                )))
            }
        };

        if self.patched {
            return Err(self.precondition(format!(
                "count at offset {} patched twice (with {})",
                offset, value
            )));
        }

        let count = value.to_string();
        let width = count_width();
        if count.len() > width {
            return Err(self.precondition(format!(
                "count {} at offset {} is wider than its placeholder ({})",
                count, offset, width
            )));
        }

        self.write_at(offset, &format!("{:<width$}", count, width = width))
            .map_err(|e| e.on_channel(self.path.clone()))?;

        self.patched = true;
        debug!("{:?}: patched count {} at {}", self.path, value, offset);
        Ok(())
    }

    /// Flush and release the file.
    pub fn close(&mut self) -> Result<(), Error> {
        if self.state == State::Closed {
            return Err(self.precondition("output closed twice".to_string()));
        }
        self.state = State::Closed;
        if let Some(mut handle) = self.handle.take() {
            handle
                .flush()
                .map_err(|e| Error::from(e).on_channel(self.path.clone()))?;
        }
        Ok(())
    }
}

impl Drop for OutputChannel {
    fn drop(&mut self) {
        if self.state != State::Closed {
            warn!("{:?}: output dropped without being closed", self.path);
        }
    }
}
