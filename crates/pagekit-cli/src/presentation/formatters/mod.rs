pub mod time;

pub use time::{format_event_date, format_event_datetime, format_offset};
