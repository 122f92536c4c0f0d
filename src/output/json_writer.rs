//! JSON writers for records and insight reports.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analytics::ChatInsights;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSON file as a pretty-printed array.
pub fn write_json(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array string.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the analyzer's combined report to a JSON file.
pub fn write_insights_json(insights: &ChatInsights, output_path: impl AsRef<Path>) -> Result<()> {
    let json = insights_to_json(insights)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the combined report to a pretty-printed JSON string.
pub fn insights_to_json(insights: &ChatInsights) -> Result<String> {
    Ok(serde_json::to_string_pretty(insights)?)
}
