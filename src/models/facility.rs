use super::{Campus, Organization, SocialMedia};
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use time::OffsetDateTime;

/// A location where networks and internet exchanges are present, most of the
/// time a datacenter.
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Facility {
    pub id: FacilityId,
    pub org_id: OrganizationId,
    pub org_name: String,
    pub organization: Option<Box<Organization>>,
    pub campus_id: Option<CampusId>,
    pub campus: Option<Box<Campus>>,
    pub name: String,
    pub aka: String,
    pub name_long: String,
    pub website: String,
    pub clli: String,
    pub rencode: String,
    pub npanxx: String,
    pub notes: String,
    pub net_count: u32,
    pub ix_count: u32,
    pub carrier_count: u32,
    pub sales_email: String,
    pub sales_phone: String,
    pub tech_email: String,
    pub tech_phone: String,
    #[serde_as(as = "DefaultOnNull")]
    pub available_voltage_services: Vec<String>,
    pub diverse_serving_substations: Option<bool>,
    pub property: Option<String>,
    pub region_continent: Option<String>,
    pub status_dashboard: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
    pub status: Status,
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
    #[serde_as(as = "DefaultOnNull")]
    pub social_media: Vec<SocialMedia>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_facility() {
        let facility: Facility = serde_json::from_value(json!({
            "id": 1,
            "org_id": 2,
            "campus_id": null,
            "name": "Equinix AM7",
            "available_voltage_services": null,
            "diverse_serving_substations": null,
            "latitude": 52.3,
            "longitude": null,
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(facility.campus_id, None);
        assert!(facility.available_voltage_services.is_empty());
        assert_eq!(facility.latitude, Some(52.3));
        assert_eq!(facility.longitude, None);
        assert_eq!(facility.status, Status::Pending);
    }
}
