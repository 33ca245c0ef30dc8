//! CSV output: the pipeline's result file and the helpers around it.

use crate::error::Result;
use crate::extract::SummaryRecord;
use std::path::Path;
use tracing::debug;

/// Write `records` to `path` as CSV, overwriting any existing file.
///
/// The header row comes from [`SummaryRecord`]'s serde renames.
pub fn write_csv(records: &[SummaryRecord], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    debug!(path = %path.display(), rows = records.len(), "Wrote CSV");
    Ok(())
}

/// Default output filename for a query: spaces become underscores.
pub fn default_output_name(query: &str) -> String {
    format!("papers_{}.csv", query.replace(' ', "_"))
}

/// Names of the `.csv` files directly inside `dir`, sorted.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
