use peeringdb::types::*;
use peeringdb::{Network, Organization, PeeringDbError, SearchParams};
use serde_json::json;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_get_network_by_id() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/net"))
        .and(query_param("depth", "1"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([test_net()]))))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let network = client
        .get_network_by_id(NetworkId(42))
        .await?
        .expect("network not found");
    assert_eq!(network.id, NetworkId(42));
    assert_eq!(network.name, "Test Net");
    assert_eq!(network.asn, Asn(65536));
    Ok(())
}

#[tokio::test]
async fn test_not_found_is_not_an_error() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/net"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let networks: Vec<Network> = client
        .fetch(Namespace::Network, &SearchParams::from([("name", "nothing")]))
        .await?;
    assert!(networks.is_empty());

    let network = client.get_network_by_id(NetworkId(999)).await?;
    assert!(network.is_none());

    let err = client.get_asn(Asn(64496)).await.unwrap_err();
    assert!(matches!(
        err,
        PeeringDbError::NotFound {
            namespace: Namespace::Network,
            ..
        }
    ));
    assert_eq!(err.to_string(), "no net found for asn=64496");
    Ok(())
}

#[tokio::test]
async fn test_zero_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.get_facility_by_id(FacilityId(0)).await.unwrap_err();
    assert!(matches!(err, PeeringDbError::InvalidId));
    let err = client
        .fetch_by_id::<Organization>(Namespace::Organization, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, PeeringDbError::InvalidId));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_by_id_takes_first_of_several() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/org"))
        .and(query_param("id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"id": 7, "name": "first"},
            {"id": 7, "name": "second"}
        ]))))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let org = client.get_organization_by_id(OrganizationId(7)).await?.unwrap();
    assert_eq!(org.name, "first");
    Ok(())
}

#[tokio::test]
async fn test_get_asn() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/net"))
        .and(query_param("asn", "65536"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([test_net()]))))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let network = client.get_asn(Asn(65536)).await?;
    assert_eq!(network.id, NetworkId(42));
    Ok(())
}

#[tokio::test]
async fn test_get_all_keeps_response_order() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/ix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"id": 26, "name": "AMS-IX", "ixlan_set": [1]},
            {"id": 31, "name": "DE-CIX Frankfurt", "ixlan_set": [2]},
            {"id": 18, "name": "LINX LON1", "ixlan_set": null}
        ]))))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let exchanges = client.get_all_internet_exchanges().await?;
    let ids: Vec<u32> = exchanges.iter().map(|ix| ix.id.0).collect();
    assert_eq!(ids, vec![26, 31, 18]);
    assert!(exchanges[2].ixlan_set.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("depth=1"));
    Ok(())
}

#[tokio::test]
async fn test_search_query_string_is_sorted() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/netixlan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;
    let client = client_for(&server);

    client
        .search_network_internet_exchange_lans()
        .net_id(NetworkId(42))
        .asn(Asn(65536))
        .ix_id(InternetExchangeId(26))
        .fetch()
        .await?;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("depth=1&asn=65536&ix_id=26&net_id=42")
    );
    Ok(())
}

#[tokio::test]
async fn test_search_only() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/fac"))
        .and(query_param("name", "one"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": 1}]))))
        .mount(&server)
        .await;
    Mock::given(path("/api/fac"))
        .and(query_param("name", "two"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": 1}, {"id": 2}]))),
        )
        .mount(&server)
        .await;
    Mock::given(path("/api/fac"))
        .and(query_param("name", "none"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let facility = client.search_facilities().name("one").only().await?;
    assert_eq!(facility.id, FacilityId(1));

    let err = client.search_facilities().name("two").only().await.unwrap_err();
    assert!(matches!(
        err,
        PeeringDbError::MoreThanOne {
            namespace: Namespace::Facility
        }
    ));

    let err = client.search_facilities().name("none").only().await.unwrap_err();
    match err {
        PeeringDbError::NotFound { namespace, query } => {
            assert_eq!(namespace, Namespace::Facility);
            assert_eq!(query, "name=none");
        }
        other => panic!("unexpected error: {other}"),
    }

    let first = client.search_facilities().name("none").first().await?;
    assert!(first.is_none());
    Ok(())
}

#[tokio::test]
async fn test_search_first_asks_for_one() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(path("/api/org"))
        .and(query_param("country", "NL"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([{"id": 9, "name": "Ninth"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let org = client.search_organizations().country("NL").first().await?;
    assert_eq!(org.map(|o| o.id), Some(OrganizationId(9)));
    Ok(())
}

#[tokio::test]
async fn test_getters_use_their_collection() -> AnyResult {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;
    let client = client_for(&server);

    client.get_all_campuses().await?;
    client.get_all_carriers().await?;
    client.get_all_carrier_facilities().await?;
    client.get_all_facilities().await?;
    client.get_all_internet_exchanges().await?;
    client.get_all_internet_exchange_facilities().await?;
    client.get_all_internet_exchange_lans().await?;
    client.get_all_internet_exchange_prefixes().await?;
    client.get_all_networks().await?;
    client.get_all_network_contacts().await?;
    client.get_all_network_facilities().await?;
    client.get_all_network_internet_exchange_lans().await?;
    client.get_all_organizations().await?;

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    let expected: Vec<String> = Namespace::ALL
        .iter()
        .map(|ns| format!("/api/{}", ns))
        .collect();
    assert_eq!(paths, expected);
    Ok(())
}
