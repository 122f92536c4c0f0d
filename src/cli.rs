//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`PlatformArg`] - platform selection flag values
//! - [`ExportFormat`] - export format options
//!
//! The argument types convert into their library counterparts, so the
//! binary stays a thin shell over the library API.

use clap::{ArgGroup, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::platform::PlatformHint;

/// Analyze WhatsApp chat exports: message statistics, activity
/// patterns, response times, and word/emoji frequency.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscope")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "stdin", "demo"])))]
#[command(after_help = "EXAMPLES:
    chatscope --file chat.txt
    chatscope --file chat.txt --platform ios
    cat chat.txt | chatscope --stdin --export report.json --format insights
    chatscope --demo --threshold-hours 2")]
pub struct Args {
    /// Path to a WhatsApp chat export file (.txt)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Read the chat export from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Analyze built-in demo data
    #[arg(long)]
    pub demo: bool,

    /// Export platform (auto-detected by default)
    #[arg(short, long, value_enum, default_value = "auto")]
    pub platform: PlatformArg,

    /// Include media placeholder messages in the analysis
    #[arg(long)]
    pub include_media: bool,

    /// Hours of silence after which the next message starts a new
    /// conversation
    #[arg(long, value_name = "HOURS", default_value_t = 1)]
    pub threshold_hours: i64,

    /// Export results to a file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub export: Option<String>,

    /// What to export with --export
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Suppress the printed report (exports still run)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging (repeat for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Platform selection flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformArg {
    /// Detect the platform from the transcript
    #[default]
    Auto,
    /// Android TXT export
    Android,
    /// iOS TXT export
    Ios,
}

impl From<PlatformArg> for PlatformHint {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Auto => PlatformHint::Auto,
            PlatformArg::Android => PlatformHint::Android,
            PlatformArg::Ios => PlatformHint::Ios,
        }
    }
}

impl std::fmt::Display for PlatformArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformArg::Auto => write!(f, "auto"),
            PlatformArg::Android => write!(f, "android"),
            PlatformArg::Ios => write!(f, "ios"),
        }
    }
}

/// Export format options for `--export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Parsed records as semicolon-delimited CSV (default)
    #[default]
    Csv,

    /// Parsed records as a JSON array
    Json,

    /// The combined insight report as JSON
    Insights,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json | ExportFormat::Insights => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "insights"]
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Insights => write!(f, "insights JSON"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "insights" => Ok(ExportFormat::Insights),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Built-in demo transcript for the given platform flag.
///
/// The iOS sample deliberately carries narrow no-break spaces and
/// directionality marks, matching what real iOS exports contain.
pub fn demo_data(platform: PlatformArg) -> &'static [u8] {
    match platform {
        PlatformArg::Ios => "[4/20/23,\u{202f}4:21:43\u{202f}AM] 343: \u{200e}Messages and calls are end-to-end encrypted.\n\
             [4/20/23,\u{202f}4:21:55\u{202f}AM] Shrey Khandelwal: Ek kaam Karo...\n\
             [4/20/23,\u{202f}4:21:59\u{202f}AM] Sayantan: Bruh \u{1f5ff}\n"
            .as_bytes(),
        PlatformArg::Auto | PlatformArg::Android => "12/31/2023, 10:15 PM - Alice: Happy New Year \u{1f600}\n\
             12/31/2023, 10:16 PM - Bob: Same to you!\n\
             12/31/2023, 10:17 PM - Alice: <Media omitted>\n"
            .as_bytes(),
    }
}
