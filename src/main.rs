//! # chatscope CLI
//!
//! Command-line interface for the chatscope library.

use std::io::Read;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatscope::analytics::{emoji, ChatAnalyzer};
use chatscope::cli::{demo_data, Args, ExportFormat};
use chatscope::config::ParseConfig;
use chatscope::output;
use chatscope::parser::parse_chat_with_config;
use chatscope::ChatscopeError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        if e.is_detection() {
            eprintln!("   Hint: retry with --platform android or --platform ios");
        } else if e.is_parse() {
            eprintln!("   Hint: check that the input is a WhatsApp TXT export");
        }
        process::exit(1);
    }
}

fn run() -> Result<(), ChatscopeError> {
    let args = Args::parse();
    init_logging(&args);

    println!("💬 chatscope v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bytes = read_input(&args)?;
    let config = ParseConfig::new().with_conversation_gap_hours(args.threshold_hours);
    let mut records = parse_chat_with_config(&bytes, args.platform.into(), &config)?;
    let parsed_count = records.len();

    if !args.include_media {
        records.retain(|record| !record.is_media);
        let dropped = parsed_count - records.len();
        if dropped > 0 {
            println!("🖼️  Excluded {} media placeholder(s)", dropped);
        }
    }

    let analyzer = ChatAnalyzer::new(records)?;

    if !args.quiet {
        print_basic_stats(&analyzer);
        print_participants(&analyzer);
        print_activity(&analyzer);
        print_response_times(&analyzer, args.threshold_hours);
        print_conversation_starters(&analyzer, args.threshold_hours);
        print_emoji_analysis(&analyzer);
    }

    if let Some(ref path) = args.export {
        export_results(&analyzer, path, args.format)?;
    }

    Ok(())
}

fn init_logging(args: &Args) {
    let default_level = match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatscope={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(args: &Args) -> Result<Vec<u8>, ChatscopeError> {
    if args.demo {
        println!("📂 Input:   built-in demo data");
        return Ok(demo_data(args.platform).to_vec());
    }
    if args.stdin {
        println!("📂 Input:   stdin");
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        return Ok(bytes);
    }
    // The input group guarantees exactly one source is set
    let path = args.file.as_deref().unwrap_or_default();
    println!("📂 Input:   {}", path);
    Ok(std::fs::read(path)?)
}

fn print_basic_stats(analyzer: &ChatAnalyzer) {
    let stats = analyzer.basic_stats();
    println!();
    println!("📊 Basic statistics");
    println!("   Messages:       {}", stats.total_messages);
    println!("   Participants:   {}", stats.total_participants);
    println!("   Days active:    {}", stats.days_active);
    println!("   Date range:     {} → {}", stats.first_date, stats.last_date);
    println!("   Avg words/msg:  {}", stats.avg_words_per_message);
}

fn print_participants(analyzer: &ChatAnalyzer) {
    let stats = analyzer.participant_stats();
    println!();
    println!("👥 Top participants");
    for (i, p) in stats.iter().take(10).enumerate() {
        println!(
            "   {}. {} — {} messages, {} words ({} avg), {} media",
            i + 1,
            p.author,
            p.messages,
            p.words,
            p.avg_words,
            p.media_sent
        );
    }
}

fn print_activity(analyzer: &ChatAnalyzer) {
    println!();
    println!("⏰ Activity patterns");

    let hours = analyzer.hourly_activity();
    if let Some((peak_hour, peak_count)) = hours
        .iter()
        .enumerate()
        .max_by_key(|&(_, count)| *count)
    {
        println!("   Peak hour:    {:02}:00 ({} messages)", peak_hour, peak_count);
    }

    let weekdays = analyzer.weekday_activity();
    if let Some((day, count)) = weekdays.iter().max_by_key(|&&(_, count)| count) {
        println!("   Peak day:     {} ({} messages)", day, count);
    }

    if let Some((date, count)) = analyzer
        .date_activity()
        .into_iter()
        .max_by_key(|&(_, count)| count)
    {
        println!("   Busiest date: {} ({} messages)", date, count);
    }
}

fn print_response_times(analyzer: &ChatAnalyzer, threshold_hours: i64) {
    let times = analyzer.response_times(threshold_hours);
    if times.is_empty() {
        return;
    }
    println!();
    println!("⚡ Response times (gaps under {}h)", threshold_hours);
    for (author, secs) in &times {
        println!("   {}: {:.0}s average", author, secs);
    }
}

fn print_conversation_starters(analyzer: &ChatAnalyzer, threshold_hours: i64) {
    let starters = analyzer.conversation_starters(threshold_hours);
    if starters.is_empty() {
        return;
    }
    println!();
    println!("💬 Conversation starters (after {}h+ silence)", threshold_hours);
    for (i, (author, count)) in starters.iter().take(5).enumerate() {
        println!("   {}. {}: {} conversations", i + 1, author, count);
    }
}

fn print_emoji_analysis(analyzer: &ChatAnalyzer) {
    let analysis = analyzer.emoji_analysis(emoji::extract_emojis);
    if analysis.total_emojis == 0 {
        return;
    }
    println!();
    println!("😀 Emoji usage");
    println!(
        "   {} total, {} unique",
        analysis.total_emojis, analysis.unique_emojis
    );
    for (emoji, count) in &analysis.top_emojis {
        println!("   {}  x{}", emoji, count);
    }
}

fn export_results(
    analyzer: &ChatAnalyzer,
    path: &str,
    format: ExportFormat,
) -> Result<(), ChatscopeError> {
    match format {
        ExportFormat::Csv => output::write_csv(analyzer.records(), path)?,
        ExportFormat::Json => output::write_json(analyzer.records(), path)?,
        ExportFormat::Insights => output::write_insights_json(&analyzer.all_insights(), path)?,
    }
    println!();
    println!("💾 Exported {} to {}", format, path);
    Ok(())
}
