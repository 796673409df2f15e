//! JSON Lines dictionary.
//!
//! The first line holds [super::Metadata], each following line a [SourceEntry]:
//!
//! ```json
//! {"name": "jmdict", "version": "3.6.1", "date": "2024-01-01", "languages": ["eng", "fre"]}
//! {"id": "1000", "kana": ["ゝ"], "common": true, "senses": [{"lang": "eng", "glosses": ["repetition mark"]}]}
//! ```
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Converter, InputEntry, OutputEntry};
use crate::error::Error;
use crate::lang::Languages;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Sense {
    pub lang: String,
    #[serde(default)]
    pub glosses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_of_speech: Vec<String>,
}

/// Record as found in the source file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub id: String,
    #[serde(default)]
    pub kanji: Vec<String>,
    #[serde(default)]
    pub kana: Vec<String>,
    #[serde(default)]
    pub common: bool,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

impl InputEntry for SourceEntry {
    fn languages(&self) -> BTreeSet<&str> {
        self.senses.iter().map(|s| s.lang.as_str()).collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub text: String,
    pub common: bool,
}

/// Record as written in outputs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: String,
    pub kanji: Vec<Text>,
    pub kana: Vec<Text>,
    pub sense: Vec<Sense>,
}

impl OutputEntry for Word {
    fn languages(&self) -> BTreeSet<&str> {
        self.sense.iter().map(|s| s.lang.as_str()).collect()
    }

    fn is_common(&self) -> bool {
        self.kanji.iter().chain(self.kana.iter()).any(|t| t.common)
    }

    fn only_with_languages(&self, languages: &Languages) -> Self {
        Self {
            id: self.id.clone(),
            kanji: self.kanji.clone(),
            kana: self.kana.clone(),
            sense: self
                .sense
                .iter()
                .filter(|s| languages.contains(&s.lang))
                .cloned()
                .collect(),
        }
    }
}

/// Converts [SourceEntry] into [Word].
///
/// The source-level `common` flag is carried on every writing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceConverter;

impl Converter for SourceConverter {
    type Input = SourceEntry;
    type Output = Word;

    fn convert(&self, entry: &SourceEntry) -> Result<Word, Error> {
        if entry.kanji.is_empty() && entry.kana.is_empty() {
            return Err(Error::Custom(format!("entry {} has no writing", entry.id)));
        }
        let text = |t: &String| Text {
            text: t.clone(),
            common: entry.common,
        };
        Ok(Word {
            id: entry.id.clone(),
            kanji: entry.kanji.iter().map(text).collect(),
            kana: entry.kana.iter().map(text).collect(),
            sense: entry.senses.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> SourceEntry {
        serde_json::from_str(
            r#"{"id": "1", "kana": ["ねこ"], "kanji": ["猫"], "common": true,
            "senses": [{"lang": "eng", "glosses": ["cat"]}, {"lang": "fre", "glosses": ["chat"]}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn input_languages() {
        let e = entry();
        let langs: Vec<&str> = e.languages().into_iter().collect();
        assert_eq!(langs, vec!["eng", "fre"]);
    }

    #[test]
    fn convert() {
        let w = SourceConverter.convert(&entry()).unwrap();
        assert!(w.is_common());
        assert_eq!(w.kanji[0].text, "猫");
        assert_eq!(w.sense.len(), 2);
    }

    #[test]
    fn convert_no_writing() {
        let mut e = entry();
        e.kana.clear();
        e.kanji.clear();
        assert!(SourceConverter.convert(&e).is_err());
    }

    #[test]
    fn narrow() {
        let w = SourceConverter.convert(&entry()).unwrap();
        let fre = w.only_with_languages(&Languages::parse(["fre"]).unwrap());
        assert_eq!(fre.sense.len(), 1);
        assert_eq!(fre.sense[0].glosses, vec!["chat".to_string()]);
        // writings are kept
        assert_eq!(fre.kana, w.kana);

        assert_eq!(w.only_with_languages(&Languages::All), w);
    }

    #[test]
    fn to_json() {
        let w = SourceConverter.convert(&entry()).unwrap();
        let json = w.to_json().unwrap();
        assert!(!json.contains('\n'));
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
