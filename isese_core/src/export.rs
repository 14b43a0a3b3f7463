//! Export of the whole calendar as JSON or flat CSV.
//!
//! Files are written atomically: a temp file in the destination directory
//! is synced and then renamed over the target.

use crate::{Calendar, CalendarDay, CalendarMonth, Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Supported export formats
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::Config(format!("Unknown export format '{}'", other))),
        }
    }
}

/// A row in the CSV output, one per month/day
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    month_index: usize,
    month: &'a str,
    patron: &'static str,
    day_number: u8,
    label: &'a str,
    moon_phase: &'static str,
    activity: &'a str,
    offering_1: &'a str,
    offering_2: &'a str,
    prayer: Option<&'a str>,
}

impl<'a> CsvRow<'a> {
    fn new(month_index: usize, month: &'a CalendarMonth, day: &'a CalendarDay) -> Self {
        CsvRow {
            month_index,
            month: &month.name,
            patron: month.patron.name(),
            day_number: day.day_number,
            label: &day.label,
            moon_phase: day.moon_phase.display_name(),
            activity: &day.activity,
            offering_1: &day.offerings[0],
            offering_2: &day.offerings[1],
            prayer: day.prayer.as_deref(),
        }
    }
}

/// Write the calendar as CSV to any writer
///
/// Returns the number of rows written (excluding the header).
pub fn write_csv<W: Write>(calendar: &Calendar, writer: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for (index, month) in calendar.months.iter().enumerate() {
        for day in &month.days {
            writer.serialize(CsvRow::new(index, month, day))?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Write the calendar as pretty-printed JSON to any writer
pub fn write_json<W: Write>(calendar: &Calendar, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, calendar)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Export the calendar to `path` in the given format
pub fn export_to(calendar: &Calendar, format: ExportFormat, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Temp file in the same directory for atomic rename
    let temp = NamedTempFile::new_in(parent)?;
    {
        let writer = std::io::BufWriter::new(temp.as_file());
        match format {
            ExportFormat::Json => write_json(calendar, writer)?,
            ExportFormat::Csv => {
                let rows = write_csv(calendar, writer)?;
                tracing::debug!("Wrote {} CSV rows", rows);
            }
        }
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Exported calendar as {:?} to {:?}", format, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::calendar;

    #[test]
    fn test_csv_has_row_per_day() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("calendar.csv");

        export_to(calendar().unwrap(), ExportFormat::Csv, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "month_index");
        assert_eq!(&headers[9], "prayer");

        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 13 * 28);
        assert_eq!(&records[0][1], "Ṣẹ̀rẹ̀");
        assert_eq!(&records[0][5], "New Moon");
        assert!(records[1][9].is_empty());
    }

    #[test]
    fn test_json_export_reads_back() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out").join("calendar.json");

        let original = calendar().unwrap();
        export_to(original, ExportFormat::Json, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: Calendar = serde_json::from_str(&contents).unwrap();
        assert_eq!(&parsed, original);
    }

    #[test]
    fn test_export_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("calendar.json");

        export_to(calendar().unwrap(), ExportFormat::Json, &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(entries.len(), 1, "Expected only calendar.json: {:?}", entries);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
