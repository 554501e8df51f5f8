//! JSON output of transcoded documents.

use std::io::Write;

use crate::error::Result;
use crate::kson::KsonDocument;

/// Serialize a document, compact or pretty.
pub fn to_json_string(document: &KsonDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Write a document followed by a newline.
pub fn write_document<W: Write>(mut writer: W, document: &KsonDocument, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writeln!(writer)?;
    Ok(())
}
