use crate::errors::AppResult;
use crate::models::AttendanceEntry;
use csv::Writer;
use std::io;

/// Write the session log as CSV to the file at `path`. Header is
/// `Name,Status,Time`; the csv writer quotes fields as needed, so names
/// containing commas survive a round trip.
pub fn write_csv(path: &str, entries: &[AttendanceEntry], time_format: &str) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(file, entries, time_format)
}

pub fn write_csv_to<W: io::Write>(
    out: W,
    entries: &[AttendanceEntry],
    time_format: &str,
) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(["Name", "Status", "Time"])?;

    for entry in entries {
        let time = entry.local_time_str(time_format);
        wtr.write_record([entry.name.as_str(), entry.status.as_str(), time.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
