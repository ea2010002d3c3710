//! Countdown command.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use tides_core::{WeddingRecord, demo_record, remaining, seed};

/// Write the time left from `now` until the ceremony.
///
/// # Errors
///
/// Returns an error if the seed file cannot be loaded or the write fails.
pub fn print(
    seed_file: Option<&Path>,
    now: DateTime<Utc>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = match seed_file {
        Some(path) => seed::load_record(path)?,
        None => demo_record(),
    };
    writeln!(out, "{}", describe(&record, now))?;
    Ok(())
}

fn describe(record: &WeddingRecord, now: DateTime<Utc>) -> String {
    let target = record.ceremony_instant();
    let left = remaining(now, target);
    if left.is_zero() {
        format!("{} were married on {}", record.couple.names(), record.date)
    } else {
        format!(
            "{} days, {} hours, {} minutes, {} seconds until {} ({})",
            left.days,
            left.hours,
            left.minutes,
            left.seconds,
            record.couple.names(),
            target.to_rfc3339(),
        )
    }
}
