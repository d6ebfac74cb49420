mod export;
mod format;
mod summary;

pub use export::{export_csv, ProjectionCsvWriter, EXPORT_CSV_HEADER};
pub use format::{format_count, format_usd, format_whole, format_year_month};
pub use summary::Summary;
