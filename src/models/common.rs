use serde::Deserialize;
use serde_with::DefaultOnNull;

/// A social media link of a PeeringDB object.
#[serde_with::apply(
    String => #[serde_as(as = "DefaultOnNull")],
    bool => #[serde_as(as = "DefaultOnNull")],
    u32 => #[serde_as(as = "DefaultOnNull")],
    u64 => #[serde_as(as = "DefaultOnNull")],
)]
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub service: String,
    pub identifier: String,
}
