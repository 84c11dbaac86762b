use serde::Deserialize;
use serde_with::DefaultOnNull;

/// Top-level structure of every response from a PeeringDB collection API,
/// e.g. `{"meta": {}, "data": [...]}`.
#[serde_with::serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[allow(unused)]
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub meta: Meta,
    pub data: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Meta {
    #[allow(unused)]
    pub generated: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: u32,
    }

    #[test]
    fn test_data_keeps_order() {
        let body = json!({"meta": {"generated": 1700000000.5}, "data": [{"id": 3}, {"id": 1}, {"id": 2}]});
        let envelope: Envelope<Thing> = serde_json::from_value(body).unwrap();
        let ids: Vec<_> = envelope.data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_meta_is_optional() {
        let envelope: Envelope<Thing> = serde_json::from_value(json!({"data": []})).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_null_meta_is_ignored() {
        let body = json!({"meta": null, "data": [{"id": 1}]});
        let envelope: Envelope<Thing> = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.data, vec![Thing { id: 1 }]);
    }

    #[test]
    fn test_data_must_be_a_list() {
        assert!(serde_json::from_value::<Envelope<Thing>>(json!({"data": {"id": 1}})).is_err());
        assert!(serde_json::from_value::<Envelope<Thing>>(json!({"meta": {}})).is_err());
    }
}
