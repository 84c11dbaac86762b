//! Everything having to do with building queries for PeeringDB collection APIs.

mod builder;
mod query;
mod searches;
mod url;

pub use builder::SearchBuilder;
pub use query::*;
pub use searches::*;
pub(crate) use url::build_url;
