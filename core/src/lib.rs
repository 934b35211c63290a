//! Parsing and export for the signal identification catalog.
//!
//! The catalog is a `*`-delimited text export; this crate turns it into the
//! bandwidth-sorted JSON array consumed by the frequency visualizer.

pub mod catalog;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use catalog::SignalRecord;
pub use prelude::{ConvertError, ConvertOptions, ConvertResult, MalformedPolicy};
pub use processing::Converter;
