//! Shared formatting helpers for the text report.
//!
//! Pure formatting functions and the tab-stop column aligner used by the
//! table renderer live here.

const MB: u64 = 1024 * 1024;

/// Format a byte count as whole megabytes, truncating.
///
/// `4_096_000_000` -> `"3906 MB"`, `1_048_575` -> `"0 MB"`
pub fn human_mb(bytes: u64) -> String {
    format!("{} MB", bytes / MB)
}

/// Format a fractional core count with two decimals.
///
/// `0.5` -> `"0.50 cores"`
pub fn format_cores(cores: f64) -> String {
    format!("{:.2} cores", cores)
}

/// Elastic tab-stop writer.
///
/// Lines are buffered and split into cells at `\t`. A cell terminated by a tab
/// belongs to a column; the last cell of a line does not and is written as
/// is. A column is aligned across each run of consecutive lines that have a
/// cell in it, padded to the widest cell plus `padding` spaces. A line with
/// no tabs (e.g. an empty one) therefore ends every open column.
#[derive(Debug, Clone)]
pub struct TabWriter {
    buf: String,
    padding: usize,
}

impl Default for TabWriter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl TabWriter {
    pub fn new(padding: usize) -> Self {
        Self {
            buf: String::new(),
            padding,
        }
    }

    /// Buffers one line; `line` must not contain `\n`.
    pub fn line(&mut self, line: &str) {
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Aligns the buffered text and returns it.
    pub fn into_string(self) -> String {
        let lines: Vec<Vec<&str>> = self.buf.split_terminator('\n').map(split_cells).collect();

        // widths[line][col] for every tab-terminated cell
        let mut widths: Vec<Vec<usize>> = lines
            .iter()
            .map(|cells| vec![0; cells.len().saturating_sub(1)])
            .collect();

        let columns = widths.iter().map(Vec::len).max().unwrap_or(0);
        for col in 0..columns {
            let mut start = 0;
            while start < lines.len() {
                if widths[start].len() <= col {
                    start += 1;
                    continue;
                }
                let mut end = start;
                while end < lines.len() && widths[end].len() > col {
                    end += 1;
                }
                let width = lines[start..end]
                    .iter()
                    .map(|cells| cells[col].chars().count() + self.padding)
                    .max()
                    .unwrap_or(0);
                for w in &mut widths[start..end] {
                    w[col] = width;
                }
                start = end;
            }
        }

        let mut out = String::with_capacity(self.buf.len() * 2);
        for (cells, line_widths) in lines.iter().zip(&widths) {
            for (cell, width) in cells.iter().zip(line_widths) {
                out.push_str(cell);
                let pad = width - cell.chars().count();
                out.extend(std::iter::repeat_n(' ', pad));
            }
            if let Some(last) = cells.last() {
                out.push_str(last);
            }
            out.push('\n');
        }
        out
    }
}

fn split_cells(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}
