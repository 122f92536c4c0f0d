//! CSV record writer.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to CSV with a semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Date`, `Time`, `Author`, `Message`, `IsMedia`
/// - `Author` is empty for system messages
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a CSV string in the same layout as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, records)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    // The writer only ever receives UTF-8 strings
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[MessageRecord],
) -> Result<()> {
    writer.write_record(["Timestamp", "Date", "Time", "Author", "Message", "IsMedia"])?;

    for record in records {
        writer.write_record([
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.date.clone(),
            record.time.clone(),
            record.author.clone().unwrap_or_default(),
            record.message.clone(),
            record.is_media.to_string(),
        ])?;
    }

    Ok(())
}
