//! Insight extraction over parsed records.
//!
//! [`ChatAnalyzer`] takes ownership of a record set and answers aggregate
//! questions about it: who talks, when, how fast they respond, what words
//! and emojis dominate. All aggregations work on the chronologically sorted
//! set the parser produces; the constructor re-sorts defensively so callers
//! that built records by hand get correct gap arithmetic too.
//!
//! Emoji extraction and sentiment scoring are injected as closures rather
//! than baked in, so callers can swap detection strategies without touching
//! the aggregation code. [`emoji::extract_emojis`] is the bundled extractor.
//!
//! # Example
//!
//! ```rust
//! use chatscope::analytics::ChatAnalyzer;
//! use chatscope::parser::parse_chat_text;
//! use chatscope::platform::PlatformHint;
//!
//! let transcript = "12/31/2023, 10:15 PM - Alice: Hello there!\n\
//!                   12/31/2023, 10:16 PM - Bob: Hi Alice!";
//! let records = parse_chat_text(transcript, PlatformHint::Auto).unwrap();
//! let analyzer = ChatAnalyzer::new(records).unwrap();
//! assert_eq!(analyzer.basic_stats().total_messages, 2);
//! ```

pub mod emoji;

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChatscopeError, ParseReason, Result};
use crate::record::MessageRecord;

/// Words too common to be interesting in frequency rankings.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "in", "is", "it", "to", "for", "of", "on", "and", "i", "you", "that", "be",
    "with", "was", "are", "this", "have", "but", "not", "at", "my", "me",
];

/// Headline numbers for a whole transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Total messages, system and media included
    pub total_messages: usize,
    /// Distinct named senders (system messages carry no sender)
    pub total_participants: usize,
    /// Distinct calendar dates with at least one message
    pub days_active: usize,
    /// Mean word count over non-media messages, rounded to 2 decimals
    pub avg_words_per_message: f64,
    /// Earliest calendar date in the transcript
    pub first_date: NaiveDate,
    /// Latest calendar date in the transcript
    pub last_date: NaiveDate,
}

/// Per-sender aggregate counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Sender display name
    pub author: String,
    /// Messages sent, media included
    pub messages: usize,
    /// Total words across text messages
    pub words: usize,
    /// Media placeholders sent
    pub media_sent: usize,
    /// Mean words per text message, rounded to 2 decimals
    pub avg_words: f64,
}

/// Emoji usage summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiAnalysis {
    pub total_emojis: usize,
    pub unique_emojis: usize,
    /// Up to 10 most frequent emojis with counts
    pub top_emojis: Vec<(String, usize)>,
}

/// Word frequency summary over non-media messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// Words counted after stop-word filtering
    pub total_words: usize,
    pub unique_words: usize,
    /// Most frequent words with counts
    pub top_words: Vec<(String, usize)>,
}

/// The combined insight report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatInsights {
    pub basic_stats: BasicStats,
    pub participant_stats: Vec<ParticipantStats>,
    pub word_analysis: WordAnalysis,
}

/// Aggregate analysis over a parsed record set.
#[derive(Debug)]
pub struct ChatAnalyzer {
    records: Vec<MessageRecord>,
}

impl ChatAnalyzer {
    /// Creates an analyzer over `records`.
    ///
    /// Fails on an empty set; every aggregate below assumes at least one
    /// record. The records are sorted by timestamp on the way in.
    pub fn new(mut records: Vec<MessageRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChatscopeError::parse(ParseReason::NoRecords));
        }
        records.sort_by_key(|record| record.timestamp);
        debug!(count = records.len(), "analyzer initialized");
        Ok(Self { records })
    }

    /// Returns the records under analysis, in chronological order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Headline statistics for the transcript.
    pub fn basic_stats(&self) -> BasicStats {
        let mut participants: Vec<&str> = self
            .records
            .iter()
            .filter_map(|r| r.author.as_deref())
            .collect();
        participants.sort_unstable();
        participants.dedup();

        let text: Vec<&MessageRecord> = self.records.iter().filter(|r| !r.is_media).collect();
        let avg_words = if text.is_empty() {
            0.0
        } else {
            let total: usize = text.iter().map(|r| r.word_count()).sum();
            round2(total as f64 / text.len() as f64)
        };

        // Non-empty by construction, so min/max always exist
        let first_date = self.records.iter().map(|r| r.calendar_date).min();
        let last_date = self.records.iter().map(|r| r.calendar_date).max();

        BasicStats {
            total_messages: self.records.len(),
            total_participants: participants.len(),
            days_active: self.date_activity().len(),
            avg_words_per_message: avg_words,
            first_date: first_date.unwrap_or_default(),
            last_date: last_date.unwrap_or_default(),
        }
    }

    /// Message count per calendar date, in date order.
    pub fn date_activity(&self) -> BTreeMap<NaiveDate, usize> {
        let mut activity = BTreeMap::new();
        for record in &self.records {
            *activity.entry(record.calendar_date).or_insert(0) += 1;
        }
        activity
    }

    /// Message count per hour of day, index 0 through 23.
    pub fn hourly_activity(&self) -> [usize; 24] {
        let mut hours = [0usize; 24];
        for record in &self.records {
            hours[record.hour_of_day as usize] += 1;
        }
        hours
    }

    /// Message count per weekday, Monday through Sunday.
    pub fn weekday_activity(&self) -> [(Weekday, usize); 7] {
        let mut counts = [0usize; 7];
        for record in &self.records {
            counts[record.day_of_week.num_days_from_monday() as usize] += 1;
        }
        [
            (Weekday::Mon, counts[0]),
            (Weekday::Tue, counts[1]),
            (Weekday::Wed, counts[2]),
            (Weekday::Thu, counts[3]),
            (Weekday::Fri, counts[4]),
            (Weekday::Sat, counts[5]),
            (Weekday::Sun, counts[6]),
        ]
    }

    /// Per-participant statistics, most messages first.
    ///
    /// System messages have no sender and are excluded.
    pub fn participant_stats(&self) -> Vec<ParticipantStats> {
        struct Tally {
            messages: usize,
            words: usize,
            media_sent: usize,
        }

        let mut tallies: HashMap<&str, Tally> = HashMap::new();
        for record in &self.records {
            let Some(author) = record.author.as_deref() else {
                continue;
            };
            let tally = tallies.entry(author).or_insert(Tally {
                messages: 0,
                words: 0,
                media_sent: 0,
            });
            tally.messages += 1;
            if record.is_media {
                tally.media_sent += 1;
            } else {
                tally.words += record.word_count();
            }
        }

        let mut stats: Vec<ParticipantStats> = tallies
            .into_iter()
            .map(|(author, tally)| {
                let text_messages = tally.messages - tally.media_sent;
                let avg_words = if text_messages == 0 {
                    0.0
                } else {
                    round2(tally.words as f64 / text_messages as f64)
                };
                ParticipantStats {
                    author: author.to_string(),
                    messages: tally.messages,
                    words: tally.words,
                    media_sent: tally.media_sent,
                    avg_words,
                }
            })
            .collect();
        stats.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.author.cmp(&b.author)));
        stats
    }

    /// Mean response time in seconds per participant, fastest first.
    ///
    /// A response is a message from a different sender than the previous
    /// one, arriving within `threshold_hours`. Longer gaps are treated as
    /// conversation breaks, not responses.
    pub fn response_times(&self, threshold_hours: i64) -> Vec<(String, f64)> {
        let threshold_secs = threshold_hours * 3600;
        let mut sums: HashMap<&str, (i64, usize)> = HashMap::new();

        for pair in self.records.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            let Some(author) = curr.author.as_deref() else {
                continue;
            };
            if prev.author.as_deref() == Some(author) {
                continue;
            }
            let gap = (curr.timestamp - prev.timestamp).num_seconds();
            if gap < threshold_secs {
                let entry = sums.entry(author).or_insert((0, 0));
                entry.0 += gap;
                entry.1 += 1;
            }
        }

        let mut averages: Vec<(String, f64)> = sums
            .into_iter()
            .map(|(author, (total, count))| {
                (author.to_string(), round2(total as f64 / count as f64))
            })
            .collect();
        averages.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        averages
    }

    /// Conversation-opening counts per participant, most first.
    ///
    /// A message opens a conversation when more than `threshold_hours` of
    /// silence precede it. The first message of the transcript has no
    /// preceding gap and is not counted.
    pub fn conversation_starters(&self, threshold_hours: i64) -> Vec<(String, usize)> {
        let threshold_secs = threshold_hours * 3600;
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for pair in self.records.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            let Some(author) = curr.author.as_deref() else {
                continue;
            };
            if (curr.timestamp - prev.timestamp).num_seconds() > threshold_secs {
                *counts.entry(author).or_insert(0) += 1;
            }
        }

        let mut starters: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(author, count)| (author.to_string(), count))
            .collect();
        starters.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        starters
    }

    /// Emoji usage across all messages, using the supplied extractor.
    pub fn emoji_analysis<F>(&self, extract: F) -> EmojiAnalysis
    where
        F: Fn(&str) -> Vec<String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;
        for record in &self.records {
            for emoji in extract(&record.message) {
                *counts.entry(emoji).or_insert(0) += 1;
                total += 1;
            }
        }

        let unique = counts.len();
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(10);

        EmojiAnalysis {
            total_emojis: total,
            unique_emojis: unique,
            top_emojis: ranked,
        }
    }

    /// Word frequency over non-media messages, stop words excluded.
    pub fn word_analysis(&self, top_n: usize) -> WordAnalysis {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;

        for record in self.records.iter().filter(|r| !r.is_media) {
            let lowered = record.message.to_lowercase();
            for word in lowered
                .split(|c: char| !c.is_alphanumeric() && c != '_')
                .filter(|w| !w.is_empty())
            {
                if STOP_WORDS.contains(&word) {
                    continue;
                }
                *counts.entry(word.to_string()).or_insert(0) += 1;
                total += 1;
            }
        }

        let unique = counts.len();
        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top_n);

        WordAnalysis {
            total_words: total,
            unique_words: unique,
            top_words: ranked,
        }
    }

    /// Daily sentiment trend as a rolling mean over `window` days.
    ///
    /// `score` maps message text to a signed score (negative to positive).
    /// Each day's scores are averaged, then smoothed with a trailing window
    /// that shrinks at the start of the series rather than emitting gaps.
    pub fn sentiment_trend<F>(&self, score: F, window: usize) -> Vec<(NaiveDate, f64)>
    where
        F: Fn(&str) -> f64,
    {
        let mut daily: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for record in &self.records {
            let entry = daily.entry(record.calendar_date).or_insert((0.0, 0));
            entry.0 += score(&record.message);
            entry.1 += 1;
        }

        let means: Vec<(NaiveDate, f64)> = daily
            .into_iter()
            .map(|(date, (sum, count))| (date, sum / count as f64))
            .collect();

        let window = window.max(1);
        means
            .iter()
            .enumerate()
            .map(|(i, &(date, _))| {
                let start = i.saturating_sub(window - 1);
                let slice = &means[start..=i];
                let avg = slice.iter().map(|(_, m)| m).sum::<f64>() / slice.len() as f64;
                (date, round2(avg))
            })
            .collect()
    }

    /// The combined report: basic stats, participants, and word frequency.
    pub fn all_insights(&self) -> ChatInsights {
        ChatInsights {
            basic_stats: self.basic_stats(),
            participant_stats: self.participant_stats(),
            word_analysis: self.word_analysis(20),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
