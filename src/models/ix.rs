use super::{Facility, Organization, SocialMedia};
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use time::OffsetDateTime;

/// An internet exchange point, managed by an [Organization].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InternetExchange {
    pub id: InternetExchangeId,
    pub org_id: OrganizationId,
    pub org: Option<Box<Organization>>,
    pub name: String,
    pub aka: String,
    pub name_long: String,
    pub city: String,
    pub country: String,
    pub region_continent: String,
    pub media: String,
    pub notes: String,
    pub proto_unicast: bool,
    pub proto_multicast: bool,
    pub proto_ipv6: bool,
    pub website: String,
    pub url_stats: String,
    pub tech_email: String,
    pub tech_phone: String,
    pub policy_email: String,
    pub policy_phone: String,
    pub sales_phone: String,
    pub sales_email: String,
    #[serde_as(as = "DefaultOnNull")]
    pub fac_set: Vec<FacilityId>,
    #[serde_as(as = "DefaultOnNull")]
    pub ixlan_set: Vec<InternetExchangeLanId>,
    pub net_count: u32,
    pub fac_count: u32,
    pub ixf_net_count: u32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ixf_last_import: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ixf_import_request: Option<OffsetDateTime>,
    pub ixf_import_request_status: String,
    pub service_level: String,
    pub terms: String,
    pub status_dashboard: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
    #[serde_as(as = "DefaultOnNull")]
    pub social_media: Vec<SocialMedia>,
}

/// One of the LANs of an [InternetExchange].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InternetExchangeLan {
    pub id: InternetExchangeLanId,
    pub ix_id: InternetExchangeId,
    pub ix: Option<Box<InternetExchange>>,
    pub name: String,
    pub descr: String,
    pub mtu: Option<u32>,
    pub dot1q_support: bool,
    pub rs_asn: Option<Asn>,
    pub arp_sponge: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub net_set: Vec<NetworkId>,
    #[serde_as(as = "DefaultOnNull")]
    pub ixpfx_set: Vec<InternetExchangePrefixId>,
    pub ixf_ixp_member_list_url: Option<String>,
    pub ixf_ixp_member_list_url_visible: String,
    pub ixf_ixp_import_enabled: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
}

/// A prefix used on an [InternetExchangeLan].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InternetExchangePrefix {
    pub id: InternetExchangePrefixId,
    pub ixlan_id: InternetExchangeLanId,
    pub ixlan: Option<Box<InternetExchangeLan>>,
    /// `IPv4` or `IPv6`
    pub protocol: String,
    /// CIDR notation, e.g. `192.0.2.0/24`
    pub prefix: String,
    pub in_dfz: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
}

/// Presence of an [InternetExchange] in a [Facility].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InternetExchangeFacility {
    pub id: InternetExchangeFacilityId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub ix_id: InternetExchangeId,
    pub ix: Option<Box<InternetExchange>>,
    pub fac_id: FacilityId,
    pub fac: Option<Box<Facility>>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_ixlan() {
        let ixlan: InternetExchangeLan = serde_json::from_value(json!({
            "id": 1,
            "ix_id": 26,
            "mtu": 1500,
            "rs_asn": 6777,
            "arp_sponge": null,
            "ixpfx_set": [1, 2],
            "ixf_ixp_member_list_url": null
        }))
        .unwrap();
        assert_eq!(ixlan.ix_id, InternetExchangeId(26));
        assert_eq!(ixlan.rs_asn, Some(Asn(6777)));
        assert_eq!(ixlan.ixpfx_set.len(), 2);
        assert!(ixlan.ixf_ixp_member_list_url.is_none());
    }

    #[test]
    fn test_deserialize_ix_timestamps() {
        let ix: InternetExchange = serde_json::from_value(json!({
            "id": 26,
            "name": "AMS-IX",
            "ixf_last_import": "2024-05-01T12:00:00Z",
            "ixf_import_request": null
        }))
        .unwrap();
        assert!(ix.ixf_last_import.is_some());
        assert!(ix.ixf_import_request.is_none());
    }
}
