//! Client library for the [PeeringDB API](https://www.peeringdb.com/apidocs/).
//!
//! PeeringDB is a REST API which returns JSON. This crate queries it with the
//! correct URL and parameters, parses the JSON response, and converts it into
//! Rust structs. Only GET requests are supported: this crate cannot be used to
//! modify any PeeringDB records.
//!
//! All calls use the `depth=1` parameter. Sets of related objects are therefore
//! returned as lists of IDs instead of lists of structs, which speeds up the
//! API processing time. To get the structs of a given set, iterate over the set
//! and call the matching `get_*_by_id` method.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use peeringdb::{types::Asn, PeeringDbClient};
//!
//! let client = PeeringDbClient::new()?;
//! let network = client.get_asn(Asn(201281)).await?;
//! for id in &network.netixlan_set {
//!     if let Some(netixlan) = client.get_network_internet_exchange_lan_by_id(*id).await? {
//!         println!("{:?} {:?}", netixlan.ipaddr4, netixlan.ipaddr6);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
pub mod errors;
pub mod models;
pub mod search;
pub mod types;

pub use client::{PeeringDbClient, PeeringDbClientBuilder};
pub use constants::{DEFAULT_URL, USER_AGENT};
pub use errors::{ClientBuildError, PeeringDbError, QueryError};
pub use models::*;
pub use search::{SearchBuilder, SearchParams};
pub use tokio_util::sync::CancellationToken;
