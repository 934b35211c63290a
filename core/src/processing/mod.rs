pub mod converter;
pub mod sort;

pub use converter::Converter;
pub use sort::sort_by_bandwidth;
