/// Per-run counters reported once a conversion finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub lines_read: usize,
    pub short_lines: usize,
    pub zero_range_skipped: usize,
    pub malformed_skipped: usize,
    pub records_written: usize,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_line(&mut self) {
        self.lines_read += 1;
    }

    pub fn record_short(&mut self) {
        self.short_lines += 1;
    }

    pub fn record_zero_range(&mut self) {
        self.zero_range_skipped += 1;
    }

    pub fn record_malformed(&mut self) {
        self.malformed_skipped += 1;
    }

    pub fn skipped(&self) -> usize {
        self.short_lines + self.zero_range_skipped + self.malformed_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_sums_every_drop_reason() {
        let mut stats = ConversionStats::new();
        stats.record_short();
        stats.record_zero_range();
        stats.record_zero_range();
        stats.record_malformed();
        assert_eq!(stats.skipped(), 4);
    }
}
