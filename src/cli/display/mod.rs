//! Display module for formatted CLI output

pub mod colors;
pub mod json;
pub mod printer;

pub use colors::ColorTheme;
pub use json::JsonFormatter;
pub use printer::EventPrinter;
