//! Getters for every PeeringDB collection.

use super::PeeringDbClient;
use crate::errors::PeeringDbError;
use crate::models::*;
use crate::search::{SearchBuilder, SearchParams};
use crate::types::*;

macro_rules! resource_getters {
    (
        $record:ident, $id:ident, $namespace:ident,
        $get:ident, $get_all:ident, $get_by_id:ident, $search:ident
    ) => {
        impl PeeringDbClient {
            #[doc = concat!("Get the [", stringify!($record), "]s matching the given search parameters.")]
            pub async fn $get(&self, search: &SearchParams) -> Result<Vec<$record>, PeeringDbError> {
                self.fetch(Namespace::$namespace, search).await
            }

            #[doc = concat!("Get all [", stringify!($record), "]s.")]
            pub async fn $get_all(&self) -> Result<Vec<$record>, PeeringDbError> {
                self.$get(&SearchParams::new()).await
            }

            #[doc = concat!("Get the [", stringify!($record), "] with the given ID, or `None` if not found.")]
            pub async fn $get_by_id(&self, id: $id) -> Result<Option<$record>, PeeringDbError> {
                self.fetch_by_id(Namespace::$namespace, id.0).await
            }

            #[doc = concat!("Search for [", stringify!($record), "]s.")]
            pub fn $search(&self) -> SearchBuilder<'_, $record> {
                SearchBuilder::new(self, Namespace::$namespace)
            }
        }
    };
}

resource_getters!(
    Campus, CampusId, Campus,
    get_campus, get_all_campuses, get_campus_by_id, search_campuses
);
resource_getters!(
    Carrier, CarrierId, Carrier,
    get_carrier, get_all_carriers, get_carrier_by_id, search_carriers
);
resource_getters!(
    CarrierFacility, CarrierFacilityId, CarrierFacility,
    get_carrier_facility, get_all_carrier_facilities, get_carrier_facility_by_id,
    search_carrier_facilities
);
resource_getters!(
    Facility, FacilityId, Facility,
    get_facility, get_all_facilities, get_facility_by_id, search_facilities
);
resource_getters!(
    InternetExchange, InternetExchangeId, InternetExchange,
    get_internet_exchange, get_all_internet_exchanges, get_internet_exchange_by_id,
    search_internet_exchanges
);
resource_getters!(
    InternetExchangeFacility, InternetExchangeFacilityId, InternetExchangeFacility,
    get_internet_exchange_facility, get_all_internet_exchange_facilities,
    get_internet_exchange_facility_by_id, search_internet_exchange_facilities
);
resource_getters!(
    InternetExchangeLan, InternetExchangeLanId, InternetExchangeLan,
    get_internet_exchange_lan, get_all_internet_exchange_lans, get_internet_exchange_lan_by_id,
    search_internet_exchange_lans
);
resource_getters!(
    InternetExchangePrefix, InternetExchangePrefixId, InternetExchangePrefix,
    get_internet_exchange_prefix, get_all_internet_exchange_prefixes,
    get_internet_exchange_prefix_by_id, search_internet_exchange_prefixes
);
resource_getters!(
    Network, NetworkId, Network,
    get_network, get_all_networks, get_network_by_id, search_networks
);
resource_getters!(
    NetworkContact, NetworkContactId, NetworkContact,
    get_network_contact, get_all_network_contacts, get_network_contact_by_id,
    search_network_contacts
);
resource_getters!(
    NetworkFacility, NetworkFacilityId, NetworkFacility,
    get_network_facility, get_all_network_facilities, get_network_facility_by_id,
    search_network_facilities
);
resource_getters!(
    NetworkInternetExchangeLan, NetworkInternetExchangeLanId, NetworkInternetExchangeLan,
    get_network_internet_exchange_lan, get_all_network_internet_exchange_lans,
    get_network_internet_exchange_lan_by_id, search_network_internet_exchange_lans
);
resource_getters!(
    Organization, OrganizationId, Organization,
    get_organization, get_all_organizations, get_organization_by_id, search_organizations
);

impl PeeringDbClient {
    /// Get the [Network] of an AS number.
    ///
    /// Unlike `get_*_by_id`, finding nothing is an error.
    pub async fn get_asn(&self, asn: Asn) -> Result<Network, PeeringDbError> {
        let search = SearchParams::from([("asn", asn.0)]);
        self.get_network(&search)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| PeeringDbError::NotFound {
                namespace: Namespace::Network,
                query: format!("asn={}", asn.0),
            })
    }
}
