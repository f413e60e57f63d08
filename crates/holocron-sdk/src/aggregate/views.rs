//! Assembled aggregate views

use holocron_client::{Entity, Film, Person, Planet, Starship, Vehicle};
use serde::{Deserialize, Serialize};

fn collect<'a, T>(items: &'a [T]) -> impl Iterator<Item = Entity> + 'a
where
    T: Clone + Into<Entity>,
{
    items.iter().cloned().map(Into::into)
}

/// A film with its linked entities, in the film's link order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmAggregate {
    pub film: Film,
    pub characters: Vec<Person>,
    pub planets: Vec<Planet>,
    pub starships: Vec<Starship>,
    pub vehicles: Vec<Vehicle>,
}

impl FilmAggregate {
    /// Every entity in this view, primary first
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::from(self.film.clone()))
            .chain(collect(&self.characters))
            .chain(collect(&self.planets))
            .chain(collect(&self.starships))
            .chain(collect(&self.vehicles))
            .collect()
    }
}

/// A person with their linked entities and their homeworld's other residents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonAggregate {
    pub person: Person,
    pub homeworld: Planet,
    pub films: Vec<Film>,
    pub vehicles: Vec<Vehicle>,
    pub starships: Vec<Starship>,
    /// Residents of `homeworld` other than `person`, in residents order
    pub neighbors: Vec<Person>,
}

impl PersonAggregate {
    /// Every entity in this view, primary first
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::from(self.person.clone()))
            .chain(std::iter::once(Entity::from(self.homeworld.clone())))
            .chain(collect(&self.films))
            .chain(collect(&self.vehicles))
            .chain(collect(&self.starships))
            .chain(collect(&self.neighbors))
            .collect()
    }
}

/// A planet with its residents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetAggregate {
    pub planet: Planet,
    pub residents: Vec<Person>,
}

impl PlanetAggregate {
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::from(self.planet.clone()))
            .chain(collect(&self.residents))
            .collect()
    }
}

/// A starship with its pilots and films
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarshipAggregate {
    pub starship: Starship,
    pub pilots: Vec<Person>,
    pub films: Vec<Film>,
}

impl StarshipAggregate {
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::from(self.starship.clone()))
            .chain(collect(&self.pilots))
            .chain(collect(&self.films))
            .collect()
    }
}

/// A vehicle with its pilots and films
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAggregate {
    pub vehicle: Vehicle,
    pub pilots: Vec<Person>,
    pub films: Vec<Film>,
}

impl VehicleAggregate {
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::from(self.vehicle.clone()))
            .chain(collect(&self.pilots))
            .chain(collect(&self.films))
            .collect()
    }
}
