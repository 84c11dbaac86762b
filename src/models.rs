//! Definitions of structs describing response data from the PeeringDB API.
//!
//! Decoding is lenient: fields missing from a response take their default
//! value, so a record may be decoded from any subset of its fields.
//!
//! Sets of related objects (`*_set` fields) are lists of IDs since every query
//! is made with `depth=1`.

mod campus;
mod carrier;
mod common;
mod contact;
mod envelope;
mod facility;
mod ix;
mod network;
mod organization;

pub use campus::*;
pub use carrier::*;
pub use common::*;
pub use contact::*;
pub(crate) use envelope::Envelope;
pub use facility::*;
pub use ix::*;
pub use network::*;
pub use organization::*;
