use super::SearchBuilder;
use crate::models::*;
use crate::types::*;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Campus search query
pub type CampusSearchBuilder<'a> = SearchBuilder<'a, Campus>;

impl CampusSearchBuilder<'_> {
    /// Search for campus by name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add_string("name", name)
    }

    /// Search for campuses of an organization
    pub fn org_id(self, org_id: OrganizationId) -> Self {
        self.add_u32("org_id", org_id.0)
    }

    /// Search for campuses by ISO 3166-1 country code
    pub fn country(self, country: impl Into<String>) -> Self {
        self.add_string("country", country)
    }
}

/// Carrier search query
pub type CarrierSearchBuilder<'a> = SearchBuilder<'a, Carrier>;

impl CarrierSearchBuilder<'_> {
    /// Search for carrier by name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add_string("name", name)
    }

    /// Search for carriers of an organization
    pub fn org_id(self, org_id: OrganizationId) -> Self {
        self.add_u32("org_id", org_id.0)
    }
}

/// Carrier facility search query
pub type CarrierFacilitySearchBuilder<'a> = SearchBuilder<'a, CarrierFacility>;

impl CarrierFacilitySearchBuilder<'_> {
    pub fn carrier_id(self, carrier_id: CarrierId) -> Self {
        self.add_u32("carrier_id", carrier_id.0)
    }

    pub fn fac_id(self, fac_id: FacilityId) -> Self {
        self.add_u32("fac_id", fac_id.0)
    }
}

/// Facility search query
pub type FacilitySearchBuilder<'a> = SearchBuilder<'a, Facility>;

impl FacilitySearchBuilder<'_> {
    /// Search for facility by name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add_string("name", name)
    }

    /// Search for facility by name (contains case-insensitive)
    pub fn name_contains(self, name: impl Into<String>) -> Self {
        self.add_string("name__contains", name)
    }

    /// Search for facilities of an organization
    pub fn org_id(self, org_id: OrganizationId) -> Self {
        self.add_u32("org_id", org_id.0)
    }

    /// Search for facilities of a campus
    pub fn campus_id(self, campus_id: CampusId) -> Self {
        self.add_u32("campus_id", campus_id.0)
    }

    pub fn city(self, city: impl Into<String>) -> Self {
        self.add_string("city", city)
    }

    /// Search for facilities by ISO 3166-1 country code
    pub fn country(self, country: impl Into<String>) -> Self {
        self.add_string("country", country)
    }

    pub fn clli(self, clli: impl Into<String>) -> Self {
        self.add_string("clli", clli)
    }
}

/// Internet exchange search query
pub type InternetExchangeSearchBuilder<'a> = SearchBuilder<'a, InternetExchange>;

impl InternetExchangeSearchBuilder<'_> {
    /// Search for internet exchange by name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add_string("name", name)
    }

    /// Search for internet exchange by name (contains case-insensitive)
    pub fn name_contains(self, name: impl Into<String>) -> Self {
        self.add_string("name__contains", name)
    }

    /// Search for internet exchanges of an organization
    pub fn org_id(self, org_id: OrganizationId) -> Self {
        self.add_u32("org_id", org_id.0)
    }

    pub fn city(self, city: impl Into<String>) -> Self {
        self.add_string("city", city)
    }

    /// Search for internet exchanges by ISO 3166-1 country code
    pub fn country(self, country: impl Into<String>) -> Self {
        self.add_string("country", country)
    }

    /// Search for internet exchanges by region, e.g. `Europe`
    pub fn region_continent(self, region: impl Into<String>) -> Self {
        self.add_string("region_continent", region)
    }
}

/// Internet exchange facility search query
pub type InternetExchangeFacilitySearchBuilder<'a> = SearchBuilder<'a, InternetExchangeFacility>;

impl InternetExchangeFacilitySearchBuilder<'_> {
    pub fn ix_id(self, ix_id: InternetExchangeId) -> Self {
        self.add_u32("ix_id", ix_id.0)
    }

    pub fn fac_id(self, fac_id: FacilityId) -> Self {
        self.add_u32("fac_id", fac_id.0)
    }
}

/// Internet exchange LAN search query
pub type InternetExchangeLanSearchBuilder<'a> = SearchBuilder<'a, InternetExchangeLan>;

impl InternetExchangeLanSearchBuilder<'_> {
    pub fn ix_id(self, ix_id: InternetExchangeId) -> Self {
        self.add_u32("ix_id", ix_id.0)
    }
}

/// Internet exchange prefix search query
pub type InternetExchangePrefixSearchBuilder<'a> = SearchBuilder<'a, InternetExchangePrefix>;

impl InternetExchangePrefixSearchBuilder<'_> {
    pub fn ixlan_id(self, ixlan_id: InternetExchangeLanId) -> Self {
        self.add_u32("ixlan_id", ixlan_id.0)
    }

    /// Search for prefixes by protocol, `IPv4` or `IPv6`
    pub fn protocol(self, protocol: impl Into<String>) -> Self {
        self.add_string("protocol", protocol)
    }

    /// Search for prefix in CIDR notation, e.g. `192.0.2.0/24`
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        self.add_string("prefix", prefix)
    }
}

/// Network search query
pub type NetworkSearchBuilder<'a> = SearchBuilder<'a, Network>;

impl NetworkSearchBuilder<'_> {
    /// Search for network by AS number
    pub fn asn(self, asn: Asn) -> Self {
        self.add_u32("asn", asn.0)
    }

    /// Search for network by name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add_string("name", name)
    }

    /// Search for network by name (contains case-insensitive)
    pub fn name_contains(self, name: impl Into<String>) -> Self {
        self.add_string("name__contains", name)
    }

    /// Search for networks of an organization
    pub fn org_id(self, org_id: OrganizationId) -> Self {
        self.add_u32("org_id", org_id.0)
    }

    /// Search for network by IRR AS-SET, e.g. `AS-EXAMPLE`
    pub fn irr_as_set(self, irr_as_set: impl Into<String>) -> Self {
        self.add_string("irr_as_set", irr_as_set)
    }

    /// Search for networks by general peering policy, e.g. `Open`
    pub fn policy_general(self, policy: impl Into<String>) -> Self {
        self.add_string("policy_general", policy)
    }
}

/// Network contact search query
pub type NetworkContactSearchBuilder<'a> = SearchBuilder<'a, NetworkContact>;

impl NetworkContactSearchBuilder<'_> {
    pub fn net_id(self, net_id: NetworkId) -> Self {
        self.add_u32("net_id", net_id.0)
    }

    /// Search for contacts by role, e.g. `Technical` or `NOC`
    pub fn role(self, role: impl Into<String>) -> Self {
        self.add_string("role", role)
    }
}

/// Network facility search query
pub type NetworkFacilitySearchBuilder<'a> = SearchBuilder<'a, NetworkFacility>;

impl NetworkFacilitySearchBuilder<'_> {
    pub fn net_id(self, net_id: NetworkId) -> Self {
        self.add_u32("net_id", net_id.0)
    }

    pub fn fac_id(self, fac_id: FacilityId) -> Self {
        self.add_u32("fac_id", fac_id.0)
    }

    pub fn local_asn(self, local_asn: Asn) -> Self {
        self.add_u32("local_asn", local_asn.0)
    }
}

/// Network internet exchange LAN search query
pub type NetworkInternetExchangeLanSearchBuilder<'a> = SearchBuilder<'a, NetworkInternetExchangeLan>;

impl NetworkInternetExchangeLanSearchBuilder<'_> {
    pub fn net_id(self, net_id: NetworkId) -> Self {
        self.add_u32("net_id", net_id.0)
    }

    pub fn ix_id(self, ix_id: InternetExchangeId) -> Self {
        self.add_u32("ix_id", ix_id.0)
    }

    pub fn ixlan_id(self, ixlan_id: InternetExchangeLanId) -> Self {
        self.add_u32("ixlan_id", ixlan_id.0)
    }

    pub fn asn(self, asn: Asn) -> Self {
        self.add_u32("asn", asn.0)
    }

    pub fn ipaddr4(self, ipaddr4: Ipv4Addr) -> Self {
        self.add_string("ipaddr4", ipaddr4.to_string())
    }

    pub fn ipaddr6(self, ipaddr6: Ipv6Addr) -> Self {
        self.add_string("ipaddr6", ipaddr6.to_string())
    }
}

/// Organization search query
pub type OrganizationSearchBuilder<'a> = SearchBuilder<'a, Organization>;

impl OrganizationSearchBuilder<'_> {
    /// Search for organization by name
    pub fn name(self, name: impl Into<String>) -> Self {
        self.add_string("name", name)
    }

    /// Search for organization by name (contains case-insensitive)
    pub fn name_contains(self, name: impl Into<String>) -> Self {
        self.add_string("name__contains", name)
    }

    pub fn city(self, city: impl Into<String>) -> Self {
        self.add_string("city", city)
    }

    /// Search for organizations by ISO 3166-1 country code
    pub fn country(self, country: impl Into<String>) -> Self {
        self.add_string("country", country)
    }
}

#[cfg(test)]
mod tests {
    use crate::search::QueryValue;
    use crate::types::*;
    use crate::PeeringDbClient;
    use rstest::*;

    #[fixture]
    fn client() -> PeeringDbClient {
        PeeringDbClient::new().unwrap()
    }

    #[rstest]
    fn test_network_search_params(client: PeeringDbClient) {
        let search = client
            .search_networks()
            .asn(Asn(65536))
            .name_contains("Example")
            .status(StatusFilter::Ok);
        assert_eq!(
            search.params().encode(),
            "&asn=65536&name__contains=Example&status=ok"
        );
        assert_eq!(search.namespace(), Namespace::Network);
    }

    #[rstest]
    fn test_later_param_replaces_earlier(client: PeeringDbClient) {
        let search = client
            .search_network_internet_exchange_lans()
            .net_id(NetworkId(1))
            .net_id(NetworkId(2))
            .ipaddr4("192.0.2.1".parse().unwrap());
        assert_eq!(search.params().get("net_id"), Some(&QueryValue::Integer(2)));
        assert_eq!(search.params().encode(), "&ipaddr4=192.0.2.1&net_id=2");
    }

    #[rstest]
    fn test_since_is_unix_timestamp(client: PeeringDbClient) {
        let since = time::OffsetDateTime::from_unix_timestamp(1700000000).unwrap();
        let search = client.search_organizations().country("NL").since(since);
        assert_eq!(search.params().encode(), "&country=NL&since=1700000000");
    }

    #[rstest]
    fn test_id_and_raw_param(client: PeeringDbClient) {
        let search = client
            .search_facilities()
            .id(FacilityId(18))
            .param("info_prefixes4__gt", 100);
        assert_eq!(search.params().encode(), "&id=18&info_prefixes4__gt=100");
    }
}
