pub mod constants;
pub mod filter;
pub mod validate;

pub use constants::api_url;
pub use filter::{apply_filters, SearchField};
