use super::Network;
use crate::types::*;
use serde::Deserialize;
use serde_with::DefaultOnNull;
use time::OffsetDateTime;

/// A point of contact of a [Network].
///
/// Most contacts are only visible to authenticated users, see
/// [crate::PeeringDbClientBuilder::api_key].
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkContact {
    pub id: NetworkContactId,
    pub net_id: NetworkId,
    pub net: Option<Box<Network>>,
    pub role: String,
    pub visible: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub url: String,
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
    fn test_null_fields_take_default() {
        let contact: NetworkContact = serde_json::from_value(json!({
            "id": 1,
            "net_id": 20,
            "role": "Technical",
            "name": null,
            "email": null,
            "phone": null
        }))
        .unwrap();
        assert_eq!(contact.id, NetworkContactId(1));
        assert_eq!(contact.role, "Technical");
        assert_eq!(contact.email, "");
        assert_eq!(contact.name, "");
    }
}
