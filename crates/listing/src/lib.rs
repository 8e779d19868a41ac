mod error;
mod parse;
mod source;

pub use catalog_protocol::ListingRecord;
pub use error::{FetchError, Result};
pub use parse::parse_listing;
pub use source::{list_entries, HttpListingSource, ListingSource, StaticListingSource};
