// src/file/export.rs
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::comparison::ComparisonTable;

pub fn write_comparison_csv<W: Write>(table: &ComparisonTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.header_row())?;
    for row in &table.rows {
        let record = std::iter::once(row.label.clone())
            .chain(row.cells.iter().map(|cell| cell.display_text()));
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn save_comparison_csv(table: &ComparisonTable, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_comparison_csv(table, file)
        .with_context(|| format!("Failed to write comparison to {}", path.display()))?;
    tracing::info!(path = %path.display(), "Exported comparison");
    Ok(())
}
