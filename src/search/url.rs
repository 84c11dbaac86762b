use super::{encode_query, SearchParams};
use crate::constants::DEPTH;
use crate::types::{ApiUrl, Namespace};

/// Create the URL to query a collection, e.g.
/// `https://www.peeringdb.com/api/net?depth=1&asn=65536`
pub(crate) fn build_url(base: &ApiUrl, namespace: Namespace, search: Option<&SearchParams>) -> String {
    format!("{}{}?{}{}", base, namespace, DEPTH, encode_query(search))
}
