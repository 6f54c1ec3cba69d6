//! Output formatting for recommendations

pub mod console;
pub mod export;
pub mod formatter;
pub mod markdown;
pub mod report;
