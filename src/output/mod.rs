//! Export writers for parsed records and insight reports.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited CSV of records,
//!   requires the `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records, requires the
//!   `json-output` feature
//! - [`write_insights_json`] / [`insights_to_json`] - the analyzer's
//!   combined report as JSON, requires the `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatscope::Result<()> {
//! use chatscope::output::{write_csv, write_json};
//! use chatscope::parser::parse_chat_text;
//! use chatscope::platform::PlatformHint;
//!
//! let transcript = "12/31/2023, 10:15 PM - Alice: Hello!";
//! let records = parse_chat_text(transcript, PlatformHint::Auto)?;
//!
//! write_csv(&records, "chat.csv")?;
//! write_json(&records, "chat.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{insights_to_json, to_json, write_insights_json, write_json};
