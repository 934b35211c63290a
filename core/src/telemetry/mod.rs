pub mod stats;

pub use stats::ConversionStats;
