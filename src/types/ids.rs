use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;

macro_rules! resource_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

resource_id!(
    /// Organization ID
    OrganizationId
);
resource_id!(
    /// Network ID
    NetworkId
);
resource_id!(
    /// Network-facility link ID
    NetworkFacilityId
);
resource_id!(
    /// Network-IX LAN link ID
    NetworkInternetExchangeLanId
);
resource_id!(
    /// Network contact ID
    NetworkContactId
);
resource_id!(
    /// Facility ID
    FacilityId
);
resource_id!(
    /// Campus ID
    CampusId
);
resource_id!(
    /// Carrier ID
    CarrierId
);
resource_id!(
    /// Carrier-facility link ID
    CarrierFacilityId
);
resource_id!(
    /// Internet exchange ID
    InternetExchangeId
);
resource_id!(
    /// Internet exchange LAN ID
    InternetExchangeLanId
);
resource_id!(
    /// Internet exchange prefix ID
    InternetExchangePrefixId
);
resource_id!(
    /// Internet exchange-facility link ID
    InternetExchangeFacilityId
);

/// Autonomous System number
#[derive(
    Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd,
)]
#[serde(transparent)]
pub struct Asn(pub u32);

impl std::fmt::Display for Asn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS{}", self.0)
    }
}
