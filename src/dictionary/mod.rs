/*!
# Dictionary entries

Interfaces between the source dictionary and the writers.

* [InputEntry] is a parsed source record, only queried for its languages.
* [Converter] turns an [InputEntry] into an [OutputEntry], once per record.
* [OutputEntry] knows its languages and commonness, can be narrowed to a subset of languages and serialized.

[jsonl] provides a concrete dictionary stored as JSON Lines.
!*/
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lang::Languages;

pub mod jsonl;

pub trait InputEntry {
    /// Languages the entry has content in.
    fn languages(&self) -> BTreeSet<&str>;
}

pub trait OutputEntry: Serialize + Sized {
    fn languages(&self) -> BTreeSet<&str>;
    fn is_common(&self) -> bool;

    /// Copy of the entry that only keeps content in the provided languages.
    fn only_with_languages(&self, languages: &Languages) -> Self;

    fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Deterministic conversion from source records to output records.
pub trait Converter {
    type Input: InputEntry;
    type Output: OutputEntry;

    fn convert(&self, entry: &Self::Input) -> Result<Self::Output, Error>;
}

/// Dictionary-level information, read once before any entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub revisions: Vec<String>,
    /// Languages present in the source.
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tags: serde_json::Map<String, serde_json::Value>,
}
