//! CSV export of plotted data.
//!
//! Each plot becomes one block introduced by a `# plot <id>` line. Every curve
//! contributes an x and a y column; shorter curves are padded with empty cells.
//! Blocks are separated by a blank line.

use std::path::Path;

use crate::canvas::{PlotCanvas, PlotRecord};
use crate::clipboard::copy_to_clipboard;
use crate::error::{PlotCanvasError, Result};

/// Render every plot on the canvas as CSV.
pub fn canvas_to_csv(canvas: &PlotCanvas) -> Result<String> {
    let blocks = canvas
        .records()
        .map(plot_block)
        .collect::<Result<Vec<_>>>()?;
    Ok(blocks.join("\n"))
}

/// Write the canvas CSV to `path`.
pub fn write_csv(canvas: &PlotCanvas, path: &Path) -> Result<()> {
    let csv = canvas_to_csv(canvas)?;
    std::fs::write(path, csv).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "export failed");
        PlotCanvasError::export_write(path.to_path_buf(), e)
    })?;
    tracing::info!(path = %path.display(), "exported canvas");
    Ok(())
}

/// Copy the canvas CSV to the system clipboard.
pub fn copy_csv_to_clipboard(canvas: &PlotCanvas) -> Result<()> {
    copy_to_clipboard(&canvas_to_csv(canvas)?)
}

fn plot_block(record: &PlotRecord) -> Result<String> {
    let curves: Vec<_> = record
        .plot()
        .curves()
        .iter()
        .map(|c| {
            let c = c.borrow();
            (c.label().to_string(), c.points().collect::<Vec<_>>())
        })
        .collect();

    // The `# plot` line has one field, the data rows have two per curve.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record([format!("# plot {}", record.id())])?;
    if !curves.is_empty() {
        writer.write_record(
            curves
                .iter()
                .flat_map(|(label, _)| [format!("{} x", label), format!("{} y", label)]),
        )?;
    }

    let rows = curves.iter().map(|(_, p)| p.len()).max().unwrap_or(0);
    for row in 0..rows {
        writer.write_record(curves.iter().flat_map(|(_, points)| match points.get(row) {
            Some((x, y)) => [x.to_string(), y.to_string()],
            None => [String::new(), String::new()],
        }))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
