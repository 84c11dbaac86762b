/// Public PeeringDB API endpoint.
pub const DEFAULT_URL: &str = "https://www.peeringdb.com/api/";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("peeringdb-rs/", env!("CARGO_PKG_VERSION"));

/// Expands sets of related objects as lists of IDs instead of nested objects.
pub(crate) const DEPTH: &str = "depth=1";
