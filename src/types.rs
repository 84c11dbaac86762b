//! Primitive PeeringDB API data types and NewType-patterns.
mod enums;
mod ids;
mod namespace;
mod strings;
mod urls;

pub use enums::*;
pub use ids::*;
pub use namespace::*;
pub use strings::*;
pub use urls::*;
