//! Document header writing.
//!
//! Runs right after [OutputChannel::open] and has to leave the output
//! ready to receive entries, i.e. inside the `words` array.
use serde_json::json;

use super::OutputChannel;
use crate::dictionary::Metadata;
use crate::error::Error;

/// Token opening the entries array.
pub const WORDS_OPEN: &str = "\"words\": [";
/// Tokens closing the entries array and the document.
pub const WORDS_CLOSE: &str = "\n] }";

pub trait HeaderWriter {
    fn write_header(&self, metadata: &Metadata, channel: &mut OutputChannel) -> Result<(), Error>;
}

/// Writes version, languages, commonness, date, revisions and tags,
/// one field per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonHeader;

impl HeaderWriter for JsonHeader {
    fn write_header(&self, metadata: &Metadata, channel: &mut OutputChannel) -> Result<(), Error> {
        let fields = [
            ("version", json!(metadata.version)),
            ("languages", json!(channel.languages().codes())),
            ("commonOnly", json!(channel.common_only())),
            ("dictDate", json!(metadata.date)),
            ("dictRevisions", json!(metadata.revisions)),
            ("tags", json!(metadata.tags)),
        ];

        let mut header = String::new();
        for (key, value) in fields.iter() {
            header.push_str(&format!("\"{}\": {},\n", key, serde_json::to_string(value)?));
        }
        header.push_str(WORDS_OPEN);

        channel.write(&header)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::lang::Languages;

    #[test]
    fn header_then_empty_array() {
        let dst = tempdir().unwrap();
        let path = dst.path().join("h.json");
        let mut c = OutputChannel::new(&path, Languages::parse(["eng"]).unwrap(), true).unwrap();
        let metadata = Metadata {
            name: "jmdict".to_string(),
            version: "3.6.1".to_string(),
            date: "2024-01-01".to_string(),
            revisions: vec!["1.09".to_string()],
            ..Default::default()
        };

        c.open().unwrap();
        JsonHeader.write_header(&metadata, &mut c).unwrap();
        c.write(WORDS_CLOSE).unwrap();
        c.patch_count(0).unwrap();
        c.close().unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["entryCount"], 0);
        assert_eq!(v["version"], "3.6.1");
        assert_eq!(v["languages"], json!(["eng"]));
        assert_eq!(v["commonOnly"], true);
        assert_eq!(v["dictRevisions"], json!(["1.09"]));
        assert_eq!(v["words"], json!([]));
    }
}
