//! Dictionary events.
//!
//! A dictionary is consumed as a start signal, its metadata, its entries in source order,
//! then an end signal. [drive] feeds these events to an [EventHandler].
use crate::dictionary::Metadata;
use crate::error::Error;

pub trait EventHandler<I> {
    type Output;

    fn on_start(&mut self) -> Result<(), Error>;
    fn on_metadata(&mut self, metadata: &Metadata) -> Result<(), Error>;
    fn on_entry(&mut self, entry: I) -> Result<(), Error>;
    fn on_finish(&mut self) -> Result<Self::Output, Error>;
}

/// Run a handler over a whole dictionary.
///
/// Stops at the first error, be it from the entries or from the handler.
pub fn drive<I, H, E>(metadata: &Metadata, entries: E, handler: &mut H) -> Result<H::Output, Error>
where
    H: EventHandler<I>,
    E: IntoIterator<Item = Result<I, Error>>,
{
    handler.on_start()?;
    handler.on_metadata(metadata)?;
    for entry in entries {
        handler.on_entry(entry?)?;
    }
    handler.on_finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl EventHandler<u32> for Recorder {
        type Output = Vec<String>;

        fn on_start(&mut self) -> Result<(), Error> {
            self.0.push("start".to_string());
            Ok(())
        }
        fn on_metadata(&mut self, metadata: &Metadata) -> Result<(), Error> {
            self.0.push(format!("meta {}", metadata.name));
            Ok(())
        }
        fn on_entry(&mut self, entry: u32) -> Result<(), Error> {
            self.0.push(format!("entry {}", entry));
            Ok(())
        }
        fn on_finish(&mut self) -> Result<Vec<String>, Error> {
            self.0.push("finish".to_string());
            Ok(self.0.clone())
        }
    }

    fn metadata() -> Metadata {
        Metadata {
            name: "d".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn order() {
        let mut r = Recorder::default();
        let events = drive(&metadata(), vec![Ok(1), Ok(2)], &mut r).unwrap();
        assert_eq!(events, vec!["start", "meta d", "entry 1", "entry 2", "finish"]);
    }

    #[test]
    fn stops_on_error() {
        let mut r = Recorder::default();
        let entries = vec![Ok(1), Err(Error::Custom("bad".to_string())), Ok(3)];
        assert!(drive(&metadata(), entries, &mut r).is_err());
        assert_eq!(r.0, vec!["start", "meta d", "entry 1"]);
    }
}
