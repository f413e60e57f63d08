//! A browsing session
//!
//! Owns the API client, the graph aggregator and one resource cache for the
//! whole session. Every page operation renders text and never fails: read
//! errors are logged and shown as the generic not-found view.
//!
//! Pages populate the cache after rendering with every entity they display,
//! so later navigations to those entities can be served locally.

use crate::render;
use clap::Subcommand;
use holocron_client::{sanitize_id, Entity, Person, ResourceClient};
use holocron_sdk::{AggregationError, GraphAggregator, ResourceCache};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Where a page's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Served entirely from the session cache
    Cache,
    /// Read from the API
    Network,
    /// Loading failed; the generic error view was rendered
    Failed,
}

/// A rendered page
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub source: Source,
}

impl Rendered {
    pub fn is_failure(&self) -> bool {
        self.source == Source::Failed
    }
}

/// Pages a session can navigate to
#[derive(Debug, Clone, Subcommand)]
pub enum Navigate {
    /// List all characters
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search characters by name
    Search {
        /// Search text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show a character summary, from cache when available
    Card { id: String },
    /// Show a character with homeworld, neighbors, films and craft
    Person { id: String },
    /// Show a film with its characters, planets and craft
    Film { id: String },
    /// Show a planet with its residents
    Planet { id: String },
    /// Show a starship with its pilots and films
    Starship { id: String },
    /// Show a vehicle with its pilots and films
    Vehicle { id: String },
}

pub struct Session {
    client: ResourceClient,
    aggregator: GraphAggregator<ResourceClient>,
    cache: ResourceCache,
}

impl Session {
    pub fn new(client: ResourceClient) -> Self {
        Self::with_cache(client, ResourceCache::new())
    }

    /// Create a session over an existing cache
    pub fn with_cache(client: ResourceClient, cache: ResourceCache) -> Self {
        Self {
            aggregator: GraphAggregator::new(client.clone()),
            client,
            cache,
        }
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    pub async fn navigate(&self, to: &Navigate) -> Rendered {
        match to {
            Navigate::List { page } => self.home(None, *page).await,
            Navigate::Search { query } => self.home(Some(&query.join(" ")), 1).await,
            Navigate::Card { id } => self.person_card(id).await,
            Navigate::Person { id } => self.person(id).await,
            Navigate::Film { id } => self.film(id).await,
            Navigate::Planet { id } => self.planet(id).await,
            Navigate::Starship { id } => self.starship(id).await,
            Navigate::Vehicle { id } => self.vehicle(id).await,
        }
    }

    /// Character list, or search matches when a non-empty query is given
    pub async fn home(&self, query: Option<&str>, page: u32) -> Rendered {
        let query = query.filter(|q| !q.is_empty());

        let Some(query) = query else {
            return match self.client.list::<Person>(page).await {
                Ok(page) => {
                    let text = render::person_list(None, &page.results);
                    for person in &page.results {
                        self.cache.put_entity(person);
                    }
                    network(text)
                }
                Err(e) => failed(e),
            };
        };

        if let Some(results) = self.cache.get_search_results::<Person>(query) {
            debug!(query, "search served from cache");
            return Rendered {
                text: render::person_list(Some(query), &results),
                source: Source::Cache,
            };
        }

        match self.client.search::<Person>(query).await {
            Ok(page) => {
                let text = render::person_list(Some(query), &page.results);
                self.cache.put_search_results(query, &page.results);
                network(text)
            }
            Err(e) => failed(e),
        }
    }

    /// One-line character summary, from cache when present
    pub async fn person_card(&self, id: &str) -> Rendered {
        if let Some(person) = self.cache.get_entity::<Person>(&sanitize_id(id)) {
            return Rendered {
                text: render::person_card(&person),
                source: Source::Cache,
            };
        }

        match self.client.fetch_id::<Person>(id).await {
            Ok(person) => {
                let text = render::person_card(&person);
                self.cache.put_entity(&person);
                network(text)
            }
            Err(e) => failed(e),
        }
    }

    pub async fn person(&self, id: &str) -> Rendered {
        let view = self.aggregator.person(id).await;
        self.present(view, render::person, |v| v.entities())
    }

    pub async fn film(&self, id: &str) -> Rendered {
        let view = self.aggregator.film(id).await;
        self.present(view, render::film, |v| v.entities())
    }

    pub async fn planet(&self, id: &str) -> Rendered {
        let view = self.aggregator.planet(id).await;
        self.present(view, render::planet, |v| v.entities())
    }

    pub async fn starship(&self, id: &str) -> Rendered {
        let view = self.aggregator.starship(id).await;
        self.present(view, render::starship, |v| v.entities())
    }

    pub async fn vehicle(&self, id: &str) -> Rendered {
        let view = self.aggregator.vehicle(id).await;
        self.present(view, render::vehicle, |v| v.entities())
    }

    /// Render an aggregate, then cache everything it displayed
    fn present<A>(
        &self,
        view: Result<A, AggregationError>,
        render: impl FnOnce(&A) -> String,
        entities: impl FnOnce(&A) -> Vec<Entity>,
    ) -> Rendered {
        match view {
            Ok(view) => {
                let text = render(&view);
                let shown = entities(&view);
                info!(entities = shown.len(), "page loaded");
                self.cache.put_all(shown);
                network(text)
            }
            Err(e) => failed(e),
        }
    }
}

fn network(text: String) -> Rendered {
    Rendered {
        text,
        source: Source::Network,
    }
}

fn failed(error: impl Display) -> Rendered {
    warn!(error = %error, "page failed to load");
    Rendered {
        text: render::not_found(),
        source: Source::Failed,
    }
}
