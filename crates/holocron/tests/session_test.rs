use holocron::{Navigate, Session, Source};
use holocron_client::{ClientConfig, Person, ResourceClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(server: &MockServer) -> Session {
    let client = ResourceClient::new(ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();
    Session::new(client)
}

#[tokio::test]
async fn search_results_serve_later_card_from_cache() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("search", "Skywalker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "results": [
                {"name": "Luke Skywalker", "birth_year": "19BBY", "gender": "male",
                 "url": format!("{base}/people/1/")},
                {"name": "Anakin Skywalker", "birth_year": "41.9BBY", "gender": "male",
                 "url": format!("{base}/people/11/")}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session(&server);

    let page = session.home(Some("Skywalker"), 1).await;
    assert_eq!(page.source, Source::Network);
    assert!(page.text.starts_with("Search Results for \"Skywalker\""));
    assert!(page.text.contains("[person 1] Luke Skywalker"));
    assert!(page.text.contains("[person 11] Anakin Skywalker"));

    // Same query again: no second request
    let again = session.home(Some("Skywalker"), 1).await;
    assert_eq!(again.source, Source::Cache);
    assert_eq!(again.text, page.text);

    // Direct navigation to a match is a hit
    let card = session.person_card("1").await;
    assert_eq!(card.source, Source::Cache);
    assert_eq!(card.text, "[person 1] Luke Skywalker (born 19BBY, male)");
}

#[tokio::test]
async fn missing_person_renders_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/999999/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&server)
        .await;

    let session = session(&server);
    let page = session
        .navigate(&Navigate::Person {
            id: "999999".into(),
        })
        .await;

    assert!(page.is_failure());
    assert!(page.text.starts_with("Not found"));
    assert!(session.cache().is_empty());
}

#[tokio::test]
async fn body_without_url_renders_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Luke"})))
        .mount(&server)
        .await;

    let session = session(&server);

    let card = session.person_card("1").await;
    assert_eq!(card.source, Source::Failed);
    assert!(card.text.starts_with("Not found"));

    let page = session.person("1").await;
    assert_eq!(page.source, Source::Failed);
    assert!(session.cache().is_empty());
}

#[tokio::test]
async fn planet_page_caches_its_residents() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/planets/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Tatooine",
            "climate": "arid",
            "residents": [format!("{base}/people/2/")],
            "url": format!("{base}/planets/1/")
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "C-3PO",
            "birth_year": "112BBY",
            "gender": "n/a",
            "url": format!("{base}/people/2/")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session(&server);

    let page = session.planet("1").await;
    assert_eq!(page.source, Source::Network);
    assert!(page.text.contains("Tatooine"));
    assert!(page.text.contains("[person 2] C-3PO"));

    let card = session.person_card("2").await;
    assert_eq!(card.source, Source::Cache);
    assert_eq!(session.cache().get_entity::<Person>("2").unwrap().name, "C-3PO");
}

#[tokio::test]
async fn empty_query_lists_characters() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/people/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"name": "Luke Skywalker", "url": format!("{base}/people/1/")}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session(&server);
    let page = session.home(Some(""), 1).await;

    assert!(page.text.starts_with("All Characters"));
    assert_eq!(session.cache().stats().entities, 1);
    assert_eq!(session.cache().stats().searches, 0);
}

#[tokio::test]
async fn failed_link_renders_generic_view() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/films/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "A New Hope",
            "characters": [format!("{base}/people/1/")],
            "url": format!("{base}/films/1/")
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session(&server);
    let page = session.film("1").await;

    assert_eq!(page.source, Source::Failed);
    assert!(page.text.starts_with("Not found"));
    // Nothing from a failed page is cached
    assert!(session.cache().is_empty());
}
