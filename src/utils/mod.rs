// Display formatting utilities
pub mod byte_formatter;
pub mod percent_formatter;
pub mod time_formatter;

// Template helpers
pub mod placeholders;

// URL handling utilities
pub mod url_parser;

// Re-export all utilities for convenient access
pub use byte_formatter::format_bytes;
pub use percent_formatter::format_percent;
pub use time_formatter::{format_time_diff, format_time_from_minutes};
pub use placeholders::replace_placeholders;
pub use url_parser::hostname_from_url;
