//! Text output for the index listing and the histogram.

use crate::histogram::FrequencyHistogram;
use crate::index::{OccurrenceIndex, OccurrenceList};
use std::fmt;

/// `"<stem> :[doc,count] -> [doc,count]"`
pub fn render_line(stem: &str, list: &OccurrenceList) -> String {
    format!("{stem} :{list}")
}

/// One line per stem, in first-seen order.
pub fn render_lines(index: &OccurrenceIndex) -> Vec<String> {
    index.iter().map(|(stem, list)| render_line(stem, list)).collect()
}

/// Horizontal bar chart: count values down the side, frequency as bar length.
///
/// Bars are scaled so the largest frequency spans `width` cells; any non-zero
/// frequency gets at least one cell.
pub struct BarChart<'a> {
    pub histogram: &'a FrequencyHistogram,
    pub width: usize,
}

impl fmt::Display for BarChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distribution word frequency")?;
        if self.histogram.is_empty() {
            return writeln!(f, "(no data)");
        }
        let max = self.histogram.max_frequency();
        let label_width = self
            .histogram
            .iter()
            .map(|(value, _)| value.to_string().len())
            .max()
            .unwrap_or(0)
            .max("Values".len());
        writeln!(f, "{:>label_width$} | Frequency", "Values")?;
        for (value, freq) in self.histogram.iter() {
            let cells = ((freq as u128 * self.width as u128).div_ceil(max as u128)) as usize;
            writeln!(f, "{value:>label_width$} | {} {freq}", "#".repeat(cells))?;
        }
        Ok(())
    }
}

pub fn render_bar_chart(histogram: &FrequencyHistogram, width: usize) -> String {
    BarChart { histogram, width }.to_string()
}
