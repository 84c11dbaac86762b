use super::SocialMedia;
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use time::OffsetDateTime;

/// An enterprise which owns networks, facilities, internet exchanges,
/// carriers and campuses.
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub aka: String,
    pub name_long: String,
    pub website: String,
    pub notes: String,
    pub require_2fa: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub net_set: Vec<NetworkId>,
    #[serde_as(as = "DefaultOnNull")]
    pub fac_set: Vec<FacilityId>,
    #[serde_as(as = "DefaultOnNull")]
    pub ix_set: Vec<InternetExchangeId>,
    #[serde_as(as = "DefaultOnNull")]
    pub carrier_set: Vec<CarrierId>,
    #[serde_as(as = "DefaultOnNull")]
    pub campus_set: Vec<CampusId>,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
    pub state: String,
    pub zipcode: String,
    pub floor: String,
    pub suite: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
    #[serde_as(as = "DefaultOnNull")]
    pub social_media: Vec<SocialMedia>,
}
