//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// Invalid language code in an output configuration.
    Language(String),
    /// Sequencing error on an output channel (patching before opening, writing after closing,
    /// count too wide for its placeholder). The produced document can't be trusted anymore.
    Precondition(String),
    /// Failure on a given output, wrapping the underlying error.
    Channel { path: PathBuf, source: Box<Error> },
    Custom(String),
}

impl Error {
    /// Attach the output path to an error raised while handling it.
    pub fn on_channel(self, path: PathBuf) -> Self {
        match self {
            // don't nest contexts
            e @ Error::Channel { .. } => e,
            e => Error::Channel {
                path,
                source: Box::new(e),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Language(l) => write!(f, "invalid language: {}", l),
            Error::Precondition(msg) => write!(f, "precondition violated: {}", msg),
            Error::Channel { path, source } => write!(f, "output {:?}: {}", path, source),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Channel { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_context_not_nested() {
        let e = Error::Custom("boom".to_string())
            .on_channel(PathBuf::from("a.json"))
            .on_channel(PathBuf::from("b.json"));
        match e {
            Error::Channel { path, source } => {
                assert_eq!(path, PathBuf::from("a.json"));
                assert!(matches!(*source, Error::Custom(_)));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn display_mentions_path() {
        let e = Error::Precondition("count too wide".to_string())
            .on_channel(PathBuf::from("out.json"));
        let msg = e.to_string();
        assert!(msg.contains("out.json"));
        assert!(msg.contains("count too wide"));
    }
}
