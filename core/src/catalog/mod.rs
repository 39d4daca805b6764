pub mod record;
pub mod source;

pub use record::ProductRecord;
pub use source::{distinct_categories, load_catalog, parse_catalog};
