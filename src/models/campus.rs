use super::{Organization, SocialMedia};
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use time::OffsetDateTime;

/// A site made of several [super::Facility].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Campus {
    pub id: CampusId,
    pub org_id: OrganizationId,
    pub org_name: String,
    pub organization: Option<Box<Organization>>,
    pub name: String,
    pub name_long: String,
    pub aka: String,
    pub website: String,
    pub notes: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
    pub city: String,
    pub country: String,
    pub state: String,
    pub zipcode: String,
    #[serde_as(as = "DefaultOnNull")]
    pub fac_set: Vec<FacilityId>,
    #[serde_as(as = "DefaultOnNull")]
    pub social_media: Vec<SocialMedia>,
}
