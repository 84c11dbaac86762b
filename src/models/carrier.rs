use super::{Facility, Organization, SocialMedia};
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use time::OffsetDateTime;

/// A network able to provide transport from one [Facility] to another.
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Carrier {
    pub id: CarrierId,
    pub org_id: OrganizationId,
    pub org_name: String,
    pub organization: Option<Box<Organization>>,
    pub name: String,
    pub aka: String,
    pub name_long: String,
    pub website: String,
    pub notes: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
    #[serde_as(as = "DefaultOnNull")]
    pub social_media: Vec<SocialMedia>,
}

/// Presence of a [Carrier] in a [Facility].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarrierFacility {
    pub id: CarrierFacilityId,
    pub name: String,
    pub carrier_id: CarrierId,
    pub carrier: Option<Box<Carrier>>,
    pub fac_id: FacilityId,
    pub fac: Option<Box<Facility>>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
}
