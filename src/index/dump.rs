//! Flat text serialization of the word index.
//!
//! The persisted format is one line per live entry, in table order:
//!
//! ```text
//! <keyword>: <offset> <offset> ...
//! ```
//!
//! Every offset is followed by a single space, the last one included;
//! there is no header or trailing metadata, and each entry line is
//! newline-terminated.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;

use super::WordIndex;

/// Render the index's live entries as dump lines.
pub fn serialize(index: &WordIndex) -> Vec<String> {
    index
        .entries()
        .iter()
        .map(|(keyword, locations)| {
            let mut line = format!("{keyword}: ");
            for loc in locations.iter() {
                line.push_str(&loc.to_string());
                line.push(' ');
            }
            line
        })
        .collect()
}

/// Write the index dump to a file, one newline-terminated line per entry.
pub fn write_index<P: AsRef<Path>>(index: &WordIndex, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in serialize(index) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    debug!("wrote {} index entries to {}", index.len(), path.display());
    Ok(())
}
