/*!
# IO utilities

Dictionary loading and JSON document writing.

* [DictReader] reads a JSON Lines dictionary, gzipped or not.
* [OutputChannel] streams entries into a single JSON document, patching its entry count at the end.
* [HeaderWriter] fills the document header between the entry count and the entries.
!*/
mod channel;
mod header;
mod reader;
pub use channel::{count_width, file_name, OutputChannel};
pub use header::{HeaderWriter, JsonHeader, WORDS_CLOSE, WORDS_OPEN};
pub use reader::DictReader;
