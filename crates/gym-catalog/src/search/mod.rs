//! Search module.
//!
//! Contains the query-string codec, filter facets, sort modes and pagination.

mod codec;
mod filter;
mod query;
mod results;

pub use codec::{decode_component, encode_component, QueryMap};
pub use filter::{encode_titles, FacetSet, PriceRange};
pub use query::{find_path, params, paths, CatalogRequest, SortMode};
pub use results::Pagination;
