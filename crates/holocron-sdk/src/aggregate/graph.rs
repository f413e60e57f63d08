//! Fan-out resolution of an entity's links
//!
//! Each aggregation reads the primary entity, then reads every entry of every
//! link field concurrently. The join is fail-fast: the first failed read
//! fails the whole aggregation and the remaining reads are dropped. Results
//! are assembled in link order regardless of completion order.

use super::views::*;
use crate::error::{AggregationError, Result};
use crate::traits::ResourceFetcher;
use futures::future::try_join_all;
use futures::try_join;
use holocron_client::{
    resolve_id, FetchError, Film, Person, Planet, Resource, ResourceKind, Starship, Target,
    Vehicle,
};
use tracing::debug;

/// The primary entity of an aggregation, for error attribution
struct Origin {
    kind: ResourceKind,
    id: String,
}

impl Origin {
    fn new(kind: ResourceKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }

    fn link_error(&self, field: &'static str, source: FetchError) -> AggregationError {
        AggregationError::Link {
            kind: self.kind,
            id: self.id.clone(),
            field,
            source,
        }
    }
}

/// Resolves entities together with their 1-hop links
///
/// Stateless apart from the fetcher: it neither reads nor fills any cache.
/// Callers populate their cache from the returned view.
///
/// # Example
///
/// ```rust,ignore
/// use holocron_sdk::GraphAggregator;
///
/// let aggregator = GraphAggregator::new(client);
///
/// let view = aggregator.person("1").await?;
/// println!("{} is from {}", view.person.name, view.homeworld.name);
/// for neighbor in &view.neighbors {
///     println!("  neighbor: {}", neighbor.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GraphAggregator<F> {
    fetcher: F,
}

impl<F: ResourceFetcher> GraphAggregator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Film with characters, planets, starships and vehicles
    pub async fn film(&self, id: &str) -> Result<FilmAggregate> {
        let film: Film = self.primary(id).await?;
        let origin = Origin::new(Film::KIND, id);

        let (characters, planets, starships, vehicles) = try_join!(
            self.follow_ids::<Person>(&origin, "characters", &film.characters),
            self.follow_ids::<Planet>(&origin, "planets", &film.planets),
            self.follow_urls::<Starship>(&origin, "starships", &film.starships),
            self.follow_urls::<Vehicle>(&origin, "vehicles", &film.vehicles),
        )?;

        Ok(FilmAggregate {
            film,
            characters,
            planets,
            starships,
            vehicles,
        })
    }

    /// Person with homeworld, films, vehicles and starships, then the
    /// homeworld's other residents as neighbors.
    pub async fn person(&self, id: &str) -> Result<PersonAggregate> {
        let person: Person = self.primary(id).await?;
        let origin = Origin::new(Person::KIND, id);

        let (homeworld, films, vehicles, starships) = try_join!(
            self.follow_url::<Planet>(&origin, "homeworld", &person.homeworld),
            self.follow_urls::<Film>(&origin, "films", &person.films),
            self.follow_urls::<Vehicle>(&origin, "vehicles", &person.vehicles),
            self.follow_urls::<Starship>(&origin, "starships", &person.starships),
        )?;

        // Second hop: the homeworld's residents, minus this person
        let others: Vec<String> = homeworld
            .residents
            .iter()
            .filter(|url| **url != person.url)
            .cloned()
            .collect();
        let neighbors = self.follow_ids::<Person>(&origin, "neighbors", &others).await?;

        Ok(PersonAggregate {
            person,
            homeworld,
            films,
            vehicles,
            starships,
            neighbors,
        })
    }

    /// Planet with its residents
    pub async fn planet(&self, id: &str) -> Result<PlanetAggregate> {
        let planet: Planet = self.primary(id).await?;
        let origin = Origin::new(Planet::KIND, id);

        let residents = self
            .follow_ids::<Person>(&origin, "residents", &planet.residents)
            .await?;

        Ok(PlanetAggregate { planet, residents })
    }

    /// Starship with its pilots and films
    pub async fn starship(&self, id: &str) -> Result<StarshipAggregate> {
        let starship: Starship = self.primary(id).await?;
        let origin = Origin::new(Starship::KIND, id);

        let (pilots, films) = try_join!(
            self.follow_ids::<Person>(&origin, "pilots", &starship.pilots),
            self.follow_urls::<Film>(&origin, "films", &starship.films),
        )?;

        Ok(StarshipAggregate {
            starship,
            pilots,
            films,
        })
    }

    /// Vehicle with its pilots and films
    pub async fn vehicle(&self, id: &str) -> Result<VehicleAggregate> {
        let vehicle: Vehicle = self.primary(id).await?;
        let origin = Origin::new(Vehicle::KIND, id);

        let (pilots, films) = try_join!(
            self.follow_ids::<Person>(&origin, "pilots", &vehicle.pilots),
            self.follow_urls::<Film>(&origin, "films", &vehicle.films),
        )?;

        Ok(VehicleAggregate {
            vehicle,
            pilots,
            films,
        })
    }

    // === Private Implementation ===

    async fn primary<T: Resource>(&self, id: &str) -> Result<T> {
        debug!(kind = %T::KIND, id, "aggregating");
        self.fetcher
            .fetch::<T>(Target::Id(id))
            .await
            .map_err(|source| AggregationError::Primary {
                kind: T::KIND,
                id: id.to_string(),
                source,
            })
    }

    async fn follow_url<T: Resource>(&self, origin: &Origin, field: &'static str, url: &str) -> Result<T> {
        self.fetcher
            .fetch::<T>(Target::Url(url))
            .await
            .map_err(|source| origin.link_error(field, source))
    }

    /// Follow every URL of a multi-valued link field
    async fn follow_urls<T: Resource>(
        &self,
        origin: &Origin,
        field: &'static str,
        urls: &[String],
    ) -> Result<Vec<T>> {
        debug!(kind = %origin.kind, id = %origin.id, field, count = urls.len(), "fan-out");
        try_join_all(urls.iter().map(|url| self.fetcher.fetch::<T>(Target::Url(url))))
            .await
            .map_err(|source| origin.link_error(field, source))
    }

    /// Follow a multi-valued link field by each URL's local identifier,
    /// entering through the route-identifier path.
    async fn follow_ids<T: Resource>(
        &self,
        origin: &Origin,
        field: &'static str,
        urls: &[String],
    ) -> Result<Vec<T>> {
        debug!(kind = %origin.kind, id = %origin.id, field, count = urls.len(), "fan-out");
        try_join_all(
            urls.iter()
                .map(|url| self.fetcher.fetch::<T>(Target::Id(resolve_id(url)))),
        )
        .await
        .map_err(|source| origin.link_error(field, source))
    }
}
