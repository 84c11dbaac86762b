pub(crate) mod builder;
mod fetch;
mod resources;
mod transport;

pub use builder::{PeeringDbClient, PeeringDbClientBuilder};
