use super::{Facility, InternetExchange, InternetExchangeLan, Organization, SocialMedia};
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use std::net::{Ipv4Addr, Ipv6Addr};
use time::OffsetDateTime;

/// An Autonomous System identified by its AS number.
///
/// A network belongs to an [Organization], has [super::NetworkContact]s,
/// and is present at several [Facility] and [InternetExchangeLan].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: NetworkId,
    pub org_id: OrganizationId,
    pub org: Option<Box<Organization>>,
    pub name: String,
    pub aka: String,
    pub name_long: String,
    pub website: String,
    pub asn: Asn,
    pub looking_glass: String,
    pub route_server: String,
    pub irr_as_set: String,
    pub info_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub info_types: Vec<String>,
    pub info_prefixes4: Option<u32>,
    pub info_prefixes6: Option<u32>,
    pub info_traffic: String,
    pub info_ratio: String,
    pub info_scope: String,
    pub info_unicast: bool,
    pub info_multicast: bool,
    pub info_ipv6: bool,
    pub info_never_via_route_servers: bool,
    pub ix_count: u32,
    pub fac_count: u32,
    pub notes: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub netixlan_updated: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub netfac_updated: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub poc_updated: Option<OffsetDateTime>,
    pub policy_url: String,
    pub policy_general: String,
    pub policy_locations: String,
    pub policy_ratio: bool,
    pub policy_contracts: String,
    #[serde_as(as = "DefaultOnNull")]
    pub netfac_set: Vec<NetworkFacilityId>,
    #[serde_as(as = "DefaultOnNull")]
    pub netixlan_set: Vec<NetworkInternetExchangeLanId>,
    #[serde_as(as = "DefaultOnNull")]
    pub poc_set: Vec<NetworkContactId>,
    pub allow_ixp_update: bool,
    pub status_dashboard: Option<String>,
    pub rir_status: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub rir_status_updated: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
    #[serde_as(as = "DefaultOnNull")]
    pub social_media: Vec<SocialMedia>,
}

/// Presence of a [Network] in a [Facility]. Searching these for several
/// networks tells where they can interconnect directly.
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkFacility {
    pub id: NetworkFacilityId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub net_id: NetworkId,
    pub net: Option<Box<Network>>,
    pub fac_id: FacilityId,
    pub fac: Option<Box<Facility>>,
    pub local_asn: Asn,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
}

/// Connection of a [Network] to an [InternetExchangeLan]. Searching these for
/// several networks tells which IX LANs they have in common.
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkInternetExchangeLan {
    pub id: NetworkInternetExchangeLanId,
    pub net_id: NetworkId,
    pub net: Option<Box<Network>>,
    pub ix_id: InternetExchangeId,
    pub ix: Option<Box<InternetExchange>>,
    pub name: String,
    pub ixlan_id: InternetExchangeLanId,
    pub ixlan: Option<Box<InternetExchangeLan>>,
    pub notes: String,
    /// Port speed in Mbit/s
    pub speed: u64,
    pub asn: Asn,
    pub ipaddr4: Option<Ipv4Addr>,
    pub ipaddr6: Option<Ipv6Addr>,
    pub is_rs_peer: bool,
    pub bfd_support: bool,
    pub operational: bool,
    pub net_side_id: Option<FacilityId>,
    pub ix_side_id: Option<FacilityId>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
}
