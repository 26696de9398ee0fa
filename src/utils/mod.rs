pub mod date;
pub mod text;

pub use date::{format_date_only, parse_iso_millis};
pub use text::truncate_string;
