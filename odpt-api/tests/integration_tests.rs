//! Request/response tests for the ODPT client against a local mock server.
//!
//! These check the URL layout for each API generation, how filters are
//! mapped onto query parameters, and how responses are decoded.

use odpt_api::geojson::Geometry;
use odpt_api::ids::{OperatorId, RailwayId, StationId};
use odpt_api::models::{BusstopPole, Station};
use odpt_api::query::{PlacesQuery, RailwayQuery, StationQuery, TrainInformationQuery};
use odpt_api::{ApiVersion, Configuration, OdptClient, OdptError};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a client pointed at the mock server
fn create_test_client(server: &MockServer, api_version: ApiVersion) -> OdptClient {
    let config = Arc::new(Configuration {
        base_path: server.uri(),
        api_version,
        consumer_key: Some("test-key".to_string()),
        user_agent: Some("odpt-api-test/1.0".to_string()),
        client: reqwest::Client::new(),
    });

    OdptClient::new(config)
}

fn station_json(same_as: &str, code: &str) -> serde_json::Value {
    json!({
        "@context": "http://vocab.odpt.org/context_odpt.jsonld",
        "@id": "urn:ucode:_00001C000000000000010000030FD7E5",
        "@type": "odpt:Station",
        "dc:date": "2019-04-01T00:00:00+09:00",
        "owl:sameAs": same_as,
        "dc:title": "浅草橋",
        "odpt:stationTitle": {"ja": "浅草橋", "en": "Asakusabashi"},
        "odpt:operator": "odpt.Operator:Toei",
        "odpt:railway": "odpt.Railway:Toei.Asakusa",
        "odpt:stationCode": code,
        "geo:long": 139.786,
        "geo:lat": 35.6975
    })
}

#[tokio::test]
async fn test_v4_filters_become_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odpt:Station"))
        .and(query_param("odpt:operator", "odpt.Operator:Toei"))
        .and(query_param(
            "odpt:railway",
            "odpt.Railway:Toei.Asakusa,odpt.Railway:Toei.Oedo",
        ))
        .and(query_param("acl:consumerKey", "test-key"))
        .and(query_param_is_missing("odpt:stationCode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            station_json("odpt.Station:Toei.Asakusa.Asakusabashi", "A-16"),
            station_json("odpt.Station:Toei.Asakusa.Kuramae", "A-17"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let stations = client
        .stations(&StationQuery {
            operator: vec![OperatorId::new("odpt.Operator:Toei")],
            railway: vec![
                RailwayId::new("odpt.Railway:Toei.Asakusa"),
                RailwayId::new("odpt.Railway:Toei.Oedo"),
            ],
            ..Default::default()
        })
        .await
        .expect("Station query should succeed");

    assert_eq!(stations.len(), 2);
    assert_eq!(
        stations[0].same_as,
        StationId::new("odpt.Station:Toei.Asakusa.Asakusabashi")
    );
    assert_eq!(stations[0].display_title(), "Asakusabashi");
    assert_eq!(stations[1].station_code.as_deref(), Some("A-17"));
}

#[tokio::test]
async fn test_v2_uses_datapoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/datapoints"))
        .and(query_param("rdf:type", "odpt:TrainInformation"))
        .and(query_param("odpt:operator", "odpt.Operator:TokyoMetro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "@context": "http://vocab.tokyometroapp.jp/context_odpt_TrainInformation.json",
            "@id": "urn:ucode:_00001C000000000000010000030C3BE4",
            "@type": "odpt:TrainInformation",
            "dc:date": "2014-07-14T13:00:00+09:00",
            "dct:valid": "2014-07-14T13:05:00+09:00",
            "odpt:operator": "odpt.Operator:TokyoMetro",
            "odpt:railway": "odpt.Railway:TokyoMetro.Ginza",
            "odpt:timeOfOrigin": "2014-07-14T10:00:00+09:00",
            "odpt:trainInformationText": "現在、平常どおり運転しています。"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V2);
    let information = client
        .train_information(&TrainInformationQuery {
            operator: vec![OperatorId::new("odpt.Operator:TokyoMetro")],
            ..Default::default()
        })
        .await
        .expect("v2 train information should succeed");

    assert_eq!(information.len(), 1);
    let entry = &information[0];
    assert!(entry.same_as.is_none());
    assert!(!entry.is_disrupted());
    assert_eq!(
        entry.text.as_ref().and_then(|t| t.ja()),
        Some("現在、平常どおり運転しています。")
    );
}

#[tokio::test]
async fn test_get_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odpt:Station"))
        .and(query_param("@id", "urn:ucode:_00001C000000000000010000030FD7E5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([station_json(
            "odpt.Station:Toei.Asakusa.Asakusabashi",
            "A-16"
        )])))
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let station = client
        .get_by_id::<Station>("urn:ucode:_00001C000000000000010000030FD7E5")
        .await
        .unwrap();

    assert!(station.is_some());
    assert_eq!(
        station.unwrap().meta.id,
        "urn:ucode:_00001C000000000000010000030FD7E5"
    );
}

#[tokio::test]
async fn test_v2_get_by_id_uses_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/datapoints/urn%3Aucode%3A_00001C000000000000010000030FD7E5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V2);
    let station = client
        .get_by_id::<Station>("urn:ucode:_00001C000000000000010000030FD7E5")
        .await
        .unwrap();

    assert!(station.is_none());
}

#[tokio::test]
async fn test_dump() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odpt:Station.json"))
        .and(query_param("acl:consumerKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([station_json(
            "odpt.Station:Toei.Asakusa.Asakusabashi",
            "A-16"
        )])))
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let stations = client.dump::<Station>().await.unwrap();
    assert_eq!(stations.len(), 1);
}

#[tokio::test]
async fn test_dump_is_v4_only() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, ApiVersion::V2);

    let err = client.dump::<Station>().await.unwrap_err();
    assert!(matches!(
        err,
        OdptError::Unsupported {
            version: ApiVersion::V2,
            ..
        }
    ));
}

#[tokio::test]
async fn test_places_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/odpt:BusstopPole"))
        .and(query_param("lon", "139.7766"))
        .and(query_param("lat", "35.6975"))
        .and(query_param("radius", "300"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "@id": "urn:ucode:_00001C00000000000001000003100B4C",
            "@type": "odpt:BusstopPole",
            "owl:sameAs": "odpt.BusstopPole:Toei.Asakusabashi.123.1",
            "dc:title": "浅草橋",
            "title": {"ja": "浅草橋", "en": "Asakusabashi"},
            "odpt:kana": "あさくさばし",
            "geo:long": 139.7765,
            "geo:lat": 35.6974,
            "odpt:operator": ["odpt.Operator:Toei"],
            "odpt:busroutePattern": ["odpt.BusroutePattern:Toei.Kusa24.1.1"],
            "odpt:busstopPoleNumber": "1"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let poles = client
        .places::<BusstopPole>(&PlacesQuery::new(139.7766, 35.6975, 300), &Default::default())
        .await
        .unwrap();

    assert_eq!(poles.len(), 1);
    assert_eq!(poles[0].display_title(), "Asakusabashi");
    assert_eq!(poles[0].operators, vec![OperatorId::new("odpt.Operator:Toei")]);
}

#[tokio::test]
async fn test_fetch_geometry_appends_consumer_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/odpt.Railway:Toei.Asakusa.geojson"))
        .and(query_param("acl:consumerKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "MultiLineString",
            "coordinates": [[[139.7985, 35.7107], [139.7962, 35.7068]]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let geometry = client
        .fetch_geometry(&format!(
            "{}/region/odpt.Railway:Toei.Asakusa.geojson",
            server.uri()
        ))
        .await
        .unwrap();

    assert_eq!(geometry.type_name(), "MultiLineString");
}

#[tokio::test]
async fn test_fetch_geometries_batch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shapes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "Point", "coordinates": [139.786, 35.6975]},
            {"type": "Point", "coordinates": [139.790, 35.7003]}
        ])))
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let geometries = client
        .fetch_geometries(&format!("{}/shapes", server.uri()))
        .await
        .unwrap();

    assert_eq!(geometries.len(), 2);
    assert!(matches!(geometries[0], Geometry::Point(_)));
}

#[tokio::test]
async fn test_unknown_geometry_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/bogus.geojson"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"type": "NotAGeometry"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let err = client
        .fetch_geometry(&format!("{}/region/bogus.geojson", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, OdptError::Geometry(_)));
    assert!(err.to_string().contains("unknown geometry type: NotAGeometry"));
}

#[tokio::test]
async fn test_invalid_geometry_url() {
    let server = MockServer::start().await;
    let client = create_test_client(&server, ApiVersion::V4);

    let err = client.fetch_geometry("not a url").await.unwrap_err();
    assert!(matches!(err, OdptError::Url(_)));
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odpt:Railway"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid acl:consumerKey"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let result = client.railways(&RailwayQuery::default()).await;

    match result {
        Err(OdptError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.contains("consumerKey"));
        }
        other => panic!("Expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odpt:Railway"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, ApiVersion::V4);
    let err = client
        .railways(&RailwayQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, OdptError::Parse(_)));
}

#[tokio::test]
async fn test_request_without_consumer_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odpt:Railway"))
        .and(query_param_is_missing("acl:consumerKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Arc::new(Configuration {
        base_path: format!("{}/", server.uri()),
        ..Configuration::default()
    });
    let client = OdptClient::new(config);

    let railways = client.railways(&RailwayQuery::default()).await.unwrap();
    assert!(railways.is_empty());
}
