pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_hours;
