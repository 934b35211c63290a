use serde::{Deserialize, Serialize};

/// One signal entry as consumed by the frequency visualizer.
///
/// Field order matters: it is the key order of the emitted JSON object and
/// must stay lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub description: String,
    #[serde(rename = "freqStart")]
    pub freq_start: i64,
    #[serde(rename = "freqStop")]
    pub freq_stop: i64,
    pub url: String,
}

impl SignalRecord {
    pub fn new(
        description: impl Into<String>,
        freq_start: i64,
        freq_stop: i64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            freq_start,
            freq_stop,
            url: url.into(),
        }
    }

    /// `freq_stop - freq_start`, widened so it cannot overflow.
    pub fn bandwidth(&self) -> i128 {
        i128::from(self.freq_stop) - i128::from(self.freq_start)
    }

    /// Catalog placeholder entries carry no frequency range at all.
    pub fn is_zero_range(&self) -> bool {
        self.freq_start == 0 && self.freq_stop == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bandwidth_handles_inverted_and_extreme_ranges() {
        assert_eq!(SignalRecord::new("a", 10, 4, "").bandwidth(), -6);
        let wide = SignalRecord::new("b", i64::MIN, i64::MAX, "");
        assert_eq!(wide.bandwidth(), i128::from(u64::MAX));
    }

    #[test]
    fn zero_range_requires_both_bounds_zero() {
        assert!(SignalRecord::new("z", 0, 0, "").is_zero_range());
        assert!(!SignalRecord::new("z", 0, 5, "").is_zero_range());
        assert!(!SignalRecord::new("z", 5, 0, "").is_zero_range());
    }

    #[test]
    fn serializes_with_camel_case_keys_in_order() {
        let record = SignalRecord::new("FM Radio", 88_000_000, 108_000_000, "http://example.com/fm");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"description":"FM Radio","freqStart":88000000,"freqStop":108000000,"url":"http://example.com/fm"}"#
        );
    }
}
