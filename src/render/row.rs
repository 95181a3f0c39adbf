//! Per-row layout with a proportional-position accumulator.

use super::{FormattingConfig, CODE_DELIMITER, LINE_BREAK, NBSP};

/// Counters collected while writing one row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowStats {
    pub filled_cells: usize,
    pub blank_cells: usize,
    pub nbsp_count: usize,
    /// Largest `|rendered_x - goal_x|` seen after any cell, in rendered px.
    pub max_drift_px: f64,
}

/// Writes one image row as Markdown, cell by cell, left to right.
///
/// Filled cells become inline code spans, which render at a known fixed
/// width. Blank cells become runs of non-breaking spaces in the surrounding
/// proportional font. Because a space does not evenly divide a block, the
/// number of spaces for each blank cell is recomputed against the absolute
/// goal position `block_px * (x + 1)` rather than added as a constant. That
/// keeps `|rendered_x - goal_x| <= space_px / 2` after every blank cell, so
/// drift never builds up along the row.
#[derive(Debug)]
pub struct RowWriter {
    span: String,
    block_px: f64,
    space_px: f64,
    line: String,
    column: u32,
    rendered_x: f64,
    stats: RowStats,
}

impl RowWriter {
    /// Starts an empty row with the accumulator at 0.
    pub fn new(config: &FormattingConfig) -> Self {
        Self {
            span: config.code_span(),
            block_px: config.monospace_block_width_px(),
            space_px: config.space_char_width_px,
            line: String::new(),
            column: 0,
            rendered_x: 0.0,
            stats: RowStats::default(),
        }
    }

    /// Number of cells written so far.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Horizontal position the row occupies when rendered, in px.
    pub fn rendered_x(&self) -> f64 {
        self.rendered_x
    }

    /// Where the row would end if it were entirely monospace.
    pub fn goal_x(&self) -> f64 {
        self.block_px * self.column as f64
    }

    /// The text written so far, without the line terminator.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Appends a cell.
    pub fn push(&mut self, filled: bool) {
        if filled {
            self.push_filled();
        } else {
            self.push_blank();
        }
    }

    /// Appends a code span. Code spans render at an exact width, so this adds
    /// no rounding error.
    pub fn push_filled(&mut self) {
        self.line.push_str(&self.span);
        self.rendered_x += self.block_px;
        self.column += 1;
        self.stats.filled_cells += 1;
        self.track_drift();
    }

    /// One aligned trace column set: start, end, goal, then the end
    /// positions for `spaces - 1`, `spaces` and `spaces + 1`.
    fn trace_line(&self, goal_x: f64, spaces: usize) -> String {
        let end = |n: f64| self.rendered_x + self.space_px * n;
        let n = spaces as f64;
        format!(
            "{:>7.1}px -> {:>7.1}px / {:>7.1}px  {:>7.1}px, ({:>7.1}px), {:>7.1}px",
            self.rendered_x,
            end(n),
            goal_x,
            end(n - 1.0),
            end(n),
            end(n + 1.0),
        )
    }

    /// Appends the spaces needed to reach the next goal position and returns
    /// how many were written.
    ///
    /// Ties round away from zero. The count is zero when an earlier overshoot
    /// already covers this cell.
    pub fn push_blank(&mut self) -> usize {
        let goal_x = self.block_px * (self.column + 1) as f64;
        let spaces = ((goal_x - self.rendered_x) / self.space_px).round().max(0.0) as usize;

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", self.trace_line(goal_x, spaces));
        }

        self.line.extend(std::iter::repeat(NBSP).take(spaces));
        self.rendered_x += self.space_px * spaces as f64;
        self.column += 1;
        self.stats.blank_cells += 1;
        self.stats.nbsp_count += spaces;
        self.track_drift();
        spaces
    }

    /// Terminates the row with a Markdown hard break.
    pub fn finish(mut self) -> (String, RowStats) {
        self.line.push_str(LINE_BREAK);
        (self.line, self.stats)
    }

    fn track_drift(&mut self) {
        let drift = (self.rendered_x - self.goal_x()).abs();
        if drift > self.stats.max_drift_px {
            self.stats.max_drift_px = drift;
        }
    }
}

/// Counts code spans in a rendered line.
pub fn count_code_spans(line: &str) -> usize {
    line.matches(CODE_DELIMITER).count() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nbsp(n: usize) -> String {
        NBSP.to_string().repeat(n)
    }

    #[test]
    fn test_single_blank_cell_with_defaults() {
        let mut row = RowWriter::new(&FormattingConfig::default());
        // 30px block / 5px space
        assert_eq!(row.push_blank(), 6);
        let (line, stats) = row.finish();
        assert_eq!(line, format!("{}  \n", nbsp(6)));
        assert_eq!(stats.nbsp_count, 6);
        assert_eq!(stats.max_drift_px, 0.0);
    }

    #[test]
    fn test_filled_then_blank_with_defaults() {
        let mut row = RowWriter::new(&FormattingConfig::default());
        row.push_filled();
        assert_eq!(row.rendered_x(), 30.0);
        assert_eq!(row.push_blank(), 6);
        let (line, _) = row.finish();
        assert_eq!(line, format!("`##`{}  \n", nbsp(6)));
    }

    #[test]
    fn test_spaces_track_absolute_goal() {
        // block_width 1 gives a 22px block, which 5px spaces do not divide
        let config = FormattingConfig {
            block_width: 1,
            ..Default::default()
        };
        let mut row = RowWriter::new(&config);

        // 22/5=4.4 -> 4 (20), 24/5=4.8 -> 5 (45), 21/5=4.2 -> 4 (65), 23/5=4.6 -> 5 (90)
        let counts: Vec<usize> = (0..4).map(|_| row.push_blank()).collect();
        assert_eq!(counts, vec![4, 5, 4, 5]);
        assert_eq!(row.rendered_x(), 90.0);
        assert_eq!(row.goal_x(), 88.0);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let config = FormattingConfig {
            block_width: 1,
            space_char_width_px: 4.0,
            ..Default::default()
        };
        let mut row = RowWriter::new(&config);

        // 22/4 = 5.5 -> 6, then (44-24)/4 = 5
        assert_eq!(row.push_blank(), 6);
        assert_eq!(row.push_blank(), 5);
        assert_eq!(row.rendered_x(), 44.0);
    }

    #[test]
    fn test_blank_can_add_zero_spaces() {
        // A block narrower than half a space: the first blank rounds down to 0
        let config = FormattingConfig {
            block_width: 1,
            char_width_px: 1.0,
            container_overhead_px: 1.0,
            space_char_width_px: 5.0,
            ..Default::default()
        };
        let mut row = RowWriter::new(&config);
        assert_eq!(row.push_blank(), 0);
        assert_eq!(row.push_blank(), 1);
        assert_eq!(row.as_str(), nbsp(1));
    }

    #[test]
    fn test_drift_stays_within_half_a_space() {
        let config = FormattingConfig {
            block_width: 1,
            ..Default::default()
        };
        let mut row = RowWriter::new(&config);
        for x in 0..200 {
            row.push(x % 3 == 0);
            assert!(
                (row.rendered_x() - row.goal_x()).abs() <= config.space_char_width_px / 2.0,
                "drift too large at column {}",
                x
            );
        }
        let (_, stats) = row.finish();
        assert!(stats.max_drift_px <= 2.5);
    }

    #[test]
    fn test_filled_row_has_only_code_spans() {
        let mut row = RowWriter::new(&FormattingConfig::default());
        for _ in 0..5 {
            row.push_filled();
        }
        let (line, stats) = row.finish();
        assert_eq!(count_code_spans(&line), 5);
        assert!(!line.contains(NBSP));
        assert_eq!(stats.filled_cells, 5);
    }

    #[test]
    fn test_trace_columns_stay_aligned() {
        let mut row = RowWriter::new(&FormattingConfig::default());
        let first = row.trace_line(30.0, 6);
        assert_eq!(
            first,
            "    0.0px ->    30.0px /    30.0px     25.0px, (   30.0px),    35.0px"
        );

        for _ in 0..40 {
            row.push_filled();
        }
        let later = row.trace_line(1230.0, 6);
        assert!(later.starts_with(" 1200.0px -> "));
        assert_eq!(later.len(), first.len());
    }

    #[test]
    fn test_custom_block_char() {
        let config = FormattingConfig {
            block_char: '%',
            block_width: 3,
            ..Default::default()
        };
        let mut row = RowWriter::new(&config);
        row.push_filled();
        assert_eq!(row.as_str(), "`%%%`");
        assert_eq!(row.rendered_x(), 14.0 + 24.0);
    }
}
