//! Summary of a render pass.

use serde::Serialize;
use std::fmt;

use super::row::RowStats;

/// Totals collected over every row of a render.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderStats {
    /// Number of output lines.
    pub rows: usize,
    /// Cells written as code spans.
    pub filled_cells: usize,
    /// Cells written as space runs.
    pub blank_cells: usize,
    /// Total non-breaking spaces emitted.
    pub nbsp_count: usize,
    /// Worst horizontal misalignment seen in any row, in rendered px.
    pub max_drift_px: f64,
}

impl RenderStats {
    /// Folds one finished row into the totals.
    pub fn add_row(&mut self, row: &RowStats) {
        self.rows += 1;
        self.filled_cells += row.filled_cells;
        self.blank_cells += row.blank_cells;
        self.nbsp_count += row.nbsp_count;
        self.max_drift_px = self.max_drift_px.max(row.max_drift_px);
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} rows, {} filled cells, {} blank cells",
            self.rows, self.filled_cells, self.blank_cells
        )?;
        writeln!(
            f,
            "  {} non-breaking spaces, max drift {:.1}px",
            self.nbsp_count, self.max_drift_px
        )
    }
}
