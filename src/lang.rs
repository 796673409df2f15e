//! Output language targets.
//!
//! An output either targets every language ([Languages::All], written `all`)
//! or an ordered list of language codes.
//! Codes are validated with [oxilangtag], so both `en` and `eng` style codes are accepted.
use std::fmt;

use itertools::Itertools;
use oxilangtag::LanguageTag;

use crate::error::Error;

/// Wildcard keyword.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Languages {
    All,
    Only(Vec<LanguageTag<String>>),
}

impl Languages {
    /// Build a target set from raw codes.
    ///
    /// Any `all` makes the whole set a wildcard.
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn parse<I, S>(codes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<LanguageTag<String>> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim();
            if code.eq_ignore_ascii_case(ALL) {
                return Ok(Languages::All);
            }
            let tag = LanguageTag::parse(code.to_string())
                .map_err(|e| Error::Language(format!("{}: {}", code, e)))?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        if tags.is_empty() {
            return Err(Error::Language("empty language list".to_string()));
        }
        Ok(Languages::Only(tags))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Languages::All)
    }

    /// Language an output is counted under (`all` for the wildcard).
    pub fn primary(&self) -> &str {
        match self {
            Languages::All => ALL,
            Languages::Only(tags) => tags.first().map(|t| t.as_str()).unwrap_or(ALL),
        }
    }

    /// true if a provided language is targeted.
    pub fn contains(&self, lang: &str) -> bool {
        match self {
            Languages::All => true,
            Languages::Only(tags) => tags.iter().any(|t| t.as_str() == lang),
        }
    }

    /// true if at least one of the provided languages is an explicit target.
    ///
    /// Does not take the wildcard into account.
    pub fn intersects<'a, I>(&self, langs: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Languages::All => false,
            Languages::Only(_) => langs.into_iter().any(|l| self.contains(l)),
        }
    }

    /// Codes as written in output headers.
    pub fn codes(&self) -> Vec<&str> {
        match self {
            Languages::All => vec![ALL],
            Languages::Only(tags) => tags.iter().map(|t| t.as_str()).collect(),
        }
    }
}

impl fmt::Display for Languages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codes().iter().join("-"))
    }
}
