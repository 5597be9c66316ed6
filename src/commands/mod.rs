//! CLI command implementations.

pub mod quote;
pub mod table;
pub mod types;

pub use quote::{QuoteCommand, QuoteOptions};
pub use table::TableCommand;
pub use types::{parse_size_variant, TypesCommand};
