pub mod formatter;
pub mod writer;

pub use formatter::{format_duration, format_timestamp, parse_duration, parse_timestamp};
pub use writer::{write_csv, write_records, HEADERS};
