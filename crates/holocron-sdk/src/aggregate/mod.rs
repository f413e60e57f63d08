//! Hypermedia graph aggregation
//!
//! Resolves a primary entity together with everything it links to, producing
//! one view per entity kind:
//! - `film`: characters, planets, starships, vehicles
//! - `person`: homeworld, films, vehicles, starships, plus neighbors (the
//!   homeworld's other residents)
//! - `planet`: residents
//! - `starship` / `vehicle`: pilots, films

mod graph;
mod views;

pub use graph::GraphAggregator;
pub use views::{
    FilmAggregate, PersonAggregate, PlanetAggregate, StarshipAggregate, VehicleAggregate,
};
