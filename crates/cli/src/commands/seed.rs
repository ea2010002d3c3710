//! Seed file commands.

use std::io::Write;
use std::path::Path;

use tracing::info;

use tides_core::{demo_record, seed};

/// Write the demo wedding record as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn print_demo(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&demo_record())?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Load a seed file and report what it contains.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a wedding record,
/// or has duplicate ids or out-of-order guestbook timestamps.
pub fn check(path: &Path, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let record = seed::load_record(path)?;

    info!(path = %path.display(), "Seed file is valid");
    writeln!(
        out,
        "{}: {} on {} at {} ({} RSVPs, {} guestbook entries)",
        path.display(),
        record.couple.names(),
        record.date,
        record.venue.name,
        record.rsvps.len(),
        record.guestbook.len(),
    )?;
    Ok(())
}
