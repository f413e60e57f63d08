use async_trait::async_trait;
use holocron_client::{
    sanitize_id, ClientConfig, FetchError, Resource, ResourceClient, ResourceKind, Target,
};
use holocron_sdk::{AggregationError, GraphAggregator, ResourceCache, ResourceFetcher};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "https://swapi.test/api";

fn url(kind: &str, id: u32) -> String {
    format!("{BASE}/{kind}/{id}/")
}

// ── Scripted fetcher ────────────────────────────────────────────

enum Reply {
    Body { body: Value, delay: Duration },
    Fail,
}

/// Serves canned bodies by URL, each after its own delay, so completion
/// order can be made to differ from link order.
#[derive(Default)]
struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    fn reply(mut self, url: String, body: Value) -> Self {
        self.replies.insert(
            url,
            Reply::Body {
                body,
                delay: Duration::ZERO,
            },
        );
        self
    }

    fn delayed(mut self, url: String, body: Value, millis: u64) -> Self {
        self.replies.insert(
            url,
            Reply::Body {
                body,
                delay: Duration::from_millis(millis),
            },
        );
        self
    }

    fn failing(mut self, url: String) -> Self {
        self.replies.insert(url, Reply::Fail);
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceFetcher for ScriptedFetcher {
    async fn fetch<T: Resource>(&self, target: Target<'_>) -> holocron_client::Result<T> {
        let url = match target {
            Target::Url(url) => url.to_string(),
            Target::Id(raw) => format!("{BASE}/{}/{}/", T::KIND.path(), sanitize_id(raw)),
        };
        self.requests.lock().unwrap().push(url.clone());

        match self.replies.get(&url) {
            Some(Reply::Body { body, delay }) => {
                tokio::time::sleep(*delay).await;
                serde_json::from_value(body.clone())
                    .map_err(|source| FetchError::Decode { kind: T::KIND, source })
            }
            Some(Reply::Fail) => Err(FetchError::Server {
                kind: T::KIND,
                status: 500,
                message: "scripted failure".into(),
            }),
            None => Err(FetchError::NotFound { kind: T::KIND, url }),
        }
    }
}

fn person(id: u32, name: &str, homeworld: u32) -> Value {
    json!({
        "name": name,
        "homeworld": url("planets", homeworld),
        "url": url("people", id)
    })
}

fn planet(id: u32, name: &str, residents: &[u32]) -> Value {
    json!({
        "name": name,
        "residents": residents.iter().map(|r| url("people", *r)).collect::<Vec<_>>(),
        "url": url("planets", id)
    })
}

fn film(id: u32, title: &str, characters: &[u32]) -> Value {
    json!({
        "title": title,
        "episode_id": 4,
        "characters": characters.iter().map(|c| url("people", *c)).collect::<Vec<_>>(),
        "url": url("films", id)
    })
}

// ── Ordering ────────────────────────────────────────────────────

#[tokio::test]
async fn film_characters_keep_link_order() {
    // A completes last, C completes first
    let fetcher = ScriptedFetcher::default()
        .reply(url("films", 1), film(1, "A New Hope", &[1, 2, 3]))
        .delayed(url("people", 1), person(1, "A", 1), 60)
        .delayed(url("people", 2), person(2, "B", 1), 30)
        .delayed(url("people", 3), person(3, "C", 1), 0);

    let aggregator = GraphAggregator::new(fetcher);
    let view = aggregator.film("1").await.unwrap();

    let names: Vec<_> = view.characters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(view.planets.is_empty());
    assert!(view.starships.is_empty());
}

#[tokio::test]
async fn fan_out_runs_concurrently() {
    let fetcher = ScriptedFetcher::default()
        .reply(url("films", 1), film(1, "A New Hope", &[1, 2, 3]))
        .delayed(url("people", 1), person(1, "A", 1), 200)
        .delayed(url("people", 2), person(2, "B", 1), 200)
        .delayed(url("people", 3), person(3, "C", 1), 200);

    let aggregator = GraphAggregator::new(fetcher);
    let started = std::time::Instant::now();
    aggregator.film("1").await.unwrap();

    // Sequential reads would take at least 600ms
    assert!(started.elapsed() < Duration::from_millis(550));
}

// ── Failure ─────────────────────────────────────────────────────

#[tokio::test]
async fn one_failed_link_fails_aggregation() {
    let fetcher = ScriptedFetcher::default()
        .reply(url("films", 1), film(1, "A New Hope", &[1, 2, 3]))
        .reply(url("people", 1), person(1, "A", 1))
        .failing(url("people", 2))
        .reply(url("people", 3), person(3, "C", 1));

    let aggregator = GraphAggregator::new(fetcher);
    let err = aggregator.film("1").await.unwrap_err();

    match err {
        AggregationError::Link { kind, id, field, .. } => {
            assert_eq!(kind, ResourceKind::Films);
            assert_eq!(id, "1");
            assert_eq!(field, "characters");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn failed_link_does_not_wait_for_slow_siblings() {
    let fetcher = ScriptedFetcher::default()
        .reply(url("films", 1), film(1, "A New Hope", &[1, 2]))
        .delayed(url("people", 1), person(1, "A", 1), 3_000)
        .failing(url("people", 2));

    let aggregator = GraphAggregator::new(fetcher);
    let started = std::time::Instant::now();
    let err = aggregator.film("1").await.unwrap_err();

    assert!(matches!(err, AggregationError::Link { field: "characters", .. }));
    // The 3s sibling is dropped, not awaited
    assert!(started.elapsed() < Duration::from_millis(1_000));
}

#[tokio::test]
async fn missing_primary_fails_without_fan_out() {
    let fetcher = ScriptedFetcher::default();

    let aggregator = GraphAggregator::new(fetcher);
    let err = aggregator.person("999999").await.unwrap_err();

    assert!(matches!(err, AggregationError::Primary { .. }));
    assert!(err.is_not_found());
    assert_eq!(aggregator.fetcher().requested(), [url("people", 999999)]);
}

#[tokio::test]
async fn route_id_is_sanitized_for_primary() {
    let fetcher = ScriptedFetcher::default().reply(url("planets", 1), planet(1, "Tatooine", &[]));

    let aggregator = GraphAggregator::new(fetcher);
    let view = aggregator.planet("1?x=y").await.unwrap();

    assert_eq!(view.planet.name, "Tatooine");
    assert!(view.residents.is_empty());
}

// ── Person and neighbors ────────────────────────────────────────

#[tokio::test]
async fn person_neighbors_exclude_self() {
    let fetcher = ScriptedFetcher::default()
        .reply(url("people", 1), person(1, "Luke Skywalker", 1))
        .reply(url("planets", 1), planet(1, "Tatooine", &[1, 2, 3]))
        .delayed(url("people", 2), person(2, "C-3PO", 1), 20)
        .reply(url("people", 3), person(3, "R2-D2", 8));

    let aggregator = GraphAggregator::new(fetcher);
    let view = aggregator.person("1").await.unwrap();

    assert_eq!(view.homeworld.name, "Tatooine");
    let neighbors: Vec<_> = view.neighbors.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(neighbors, ["C-3PO", "R2-D2"]);

    // The person is read once, as the primary
    let reads = aggregator.fetcher().requested();
    assert_eq!(reads.iter().filter(|u| **u == url("people", 1)).count(), 1);
}

#[tokio::test]
async fn failed_neighbor_fails_person() {
    let fetcher = ScriptedFetcher::default()
        .reply(url("people", 1), person(1, "Luke Skywalker", 1))
        .reply(url("planets", 1), planet(1, "Tatooine", &[1, 2]))
        .failing(url("people", 2));

    let aggregator = GraphAggregator::new(fetcher);
    let err = aggregator.person("1").await.unwrap_err();

    assert!(matches!(err, AggregationError::Link { field: "neighbors", .. }));
}

#[tokio::test]
async fn starship_resolves_pilots_and_films() {
    let fetcher = ScriptedFetcher::default()
        .reply(
            url("starships", 12),
            json!({
                "name": "X-wing",
                "pilots": [url("people", 1)],
                "films": [url("films", 1)],
                "url": url("starships", 12)
            }),
        )
        .reply(url("people", 1), person(1, "Luke Skywalker", 1))
        .reply(url("films", 1), film(1, "A New Hope", &[]));

    let aggregator = GraphAggregator::new(fetcher);
    let view = aggregator.starship("12").await.unwrap();

    assert_eq!(view.pilots[0].name, "Luke Skywalker");
    assert_eq!(view.films[0].title, "A New Hope");
    assert_eq!(view.entities().len(), 3);
}

// ── Against a mock API ──────────────────────────────────────────

#[tokio::test]
async fn person_aggregate_over_http_populates_cache() {
    let server = MockServer::start().await;
    let base = server.uri();

    let routes = [
        (
            "/people/1/",
            json!({
                "name": "Luke Skywalker",
                "homeworld": format!("{base}/planets/1/"),
                "films": [format!("{base}/films/1/")],
                "vehicles": [format!("{base}/vehicles/14/")],
                "starships": [],
                "url": format!("{base}/people/1/")
            }),
        ),
        (
            "/planets/1/",
            json!({
                "name": "Tatooine",
                "residents": [format!("{base}/people/1/"), format!("{base}/people/2/")],
                "url": format!("{base}/planets/1/")
            }),
        ),
        (
            "/people/2/",
            json!({"name": "C-3PO", "url": format!("{base}/people/2/")}),
        ),
        (
            "/films/1/",
            json!({"title": "A New Hope", "url": format!("{base}/films/1/")}),
        ),
        (
            "/vehicles/14/",
            json!({"name": "Snowspeeder", "url": format!("{base}/vehicles/14/")}),
        ),
    ];
    for (route, body) in routes {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
    }

    let client = ResourceClient::new(ClientConfig {
        base_url: base.clone(),
        ..Default::default()
    })
    .unwrap();
    let aggregator = GraphAggregator::new(client);
    let view = aggregator.person("1").await.unwrap();

    assert_eq!(view.neighbors.len(), 1);
    assert_eq!(view.vehicles[0].name, "Snowspeeder");

    let cache = ResourceCache::new();
    cache.put_all(view.entities());
    assert_eq!(cache.stats().entities, 5);
    assert_eq!(
        cache.get_entity::<holocron_client::Planet>("1").unwrap().name,
        "Tatooine"
    );
}
