use std::io::Error;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 4] = ["command", "branch", "customer", "amount"];

/// Writes a command script to a temporary CSV file.
pub fn write_script(rows: &[[&str; 4]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_path(file.path())?;

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(file)
}
