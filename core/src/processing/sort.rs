use crate::catalog::SignalRecord;

/// Orders records widest-first so narrow signals are drawn on top.
///
/// Stable: records of equal bandwidth keep their catalog order.
pub fn sort_by_bandwidth(records: &mut [SignalRecord]) {
    records.sort_by(|a, b| b.bandwidth().cmp(&a.bandwidth()));
}
