//! Final record construction.
//!
//! Applies the timestamp resolver to every assembled record, drops the ones
//! that cannot be placed on the timeline, sorts the survivors
//! chronologically, and derives the calendar fields and media flag.

use tracing::{info, warn};

use crate::error::{ChatscopeError, ParseReason, Result};
use crate::parser::assemble::RawRecord;
use crate::parser::timestamp::resolve_timestamp;
use crate::platform::Platform;
use crate::record::MessageRecord;

/// Builds the final ordered record set from assembled raw records.
///
/// Records with an unresolvable timestamp are logged and excluded; if that
/// excludes everything, the templates evidently do not fit the export and a
/// [`ParseReason::NoValidTimestamps`] error is returned. The sort is stable,
/// so records sharing a timestamp keep their original transcript order.
pub fn build_records(raw: Vec<RawRecord>, platform: Platform) -> Result<Vec<MessageRecord>> {
    let total = raw.len();
    let mut records: Vec<MessageRecord> = Vec::with_capacity(total);

    for record in raw {
        match resolve_timestamp(&record.date, &record.time, platform) {
            Some(timestamp) => {
                records.push(MessageRecord::new(
                    record.date,
                    record.time,
                    record.author,
                    record.message,
                    timestamp,
                ));
            }
            None => {
                warn!(
                    date = %record.date,
                    time = %record.time,
                    "dropping record with unresolvable timestamp"
                );
            }
        }
    }

    if records.is_empty() {
        return Err(ChatscopeError::parse(ParseReason::NoValidTimestamps));
    }

    records.sort_by_key(|record| record.timestamp);

    info!(
        parsed = records.len(),
        dropped = total - records.len(),
        "built message records"
    );
    Ok(records)
}
