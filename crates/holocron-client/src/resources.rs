//! Entity records served by the API
//!
//! Each kind is deserialized into a fixed record. Scalar attributes are kept
//! as the strings the API sends; link fields hold absolute URLs of related
//! entities rather than the entities themselves.
//!
//! Every field but `url` defaults when absent. A body without `url` is not
//! an entity and fails to decode.

use crate::id::resolve_id;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

/// Kinds of entity exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    People,
    Films,
    Planets,
    Starships,
    Vehicles,
}

impl ResourceKind {
    /// Collection path segment (e.g. `people` in `/people/1/`)
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::People => "people",
            ResourceKind::Films => "films",
            ResourceKind::Planets => "planets",
            ResourceKind::Starships => "starships",
            ResourceKind::Vehicles => "vehicles",
        }
    }

    /// Singular, human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::People => "person",
            ResourceKind::Films => "film",
            ResourceKind::Planets => "planet",
            ResourceKind::Starships => "starship",
            ResourceKind::Vehicles => "vehicle",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    /// Link to the planet this person was born on
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    /// Species links are displayed as-is and never followed
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    /// Canonical URL; the only field decoding requires
    pub url: String,
}

/// A film
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    /// Canonical URL; the only field decoding requires
    pub url: String,
}

/// A planet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rotation_period: String,
    #[serde(default)]
    pub orbital_period: String,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub gravity: String,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub surface_water: String,
    #[serde(default)]
    pub population: String,
    /// People whose homeworld is this planet
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    /// Canonical URL; the only field decoding requires
    pub url: String,
}

/// A hyperdrive-capable starship
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub cost_in_credits: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cargo_capacity: String,
    #[serde(default)]
    pub consumables: String,
    #[serde(default)]
    pub hyperdrive_rating: String,
    #[serde(default, rename = "MGLT")]
    pub mglt: String,
    #[serde(default)]
    pub starship_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    /// Canonical URL; the only field decoding requires
    pub url: String,
}

/// A vehicle without hyperdrive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub cost_in_credits: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cargo_capacity: String,
    #[serde(default)]
    pub consumables: String,
    #[serde(default)]
    pub vehicle_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
    /// Canonical URL; the only field decoding requires
    pub url: String,
}

/// Any entity, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Entity {
    Person(Person),
    Film(Film),
    Planet(Planet),
    Starship(Starship),
    Vehicle(Vehicle),
}

impl Entity {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Entity::Person(_) => ResourceKind::People,
            Entity::Film(_) => ResourceKind::Films,
            Entity::Planet(_) => ResourceKind::Planets,
            Entity::Starship(_) => ResourceKind::Starships,
            Entity::Vehicle(_) => ResourceKind::Vehicles,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Entity::Person(e) => &e.url,
            Entity::Film(e) => &e.url,
            Entity::Planet(e) => &e.url,
            Entity::Starship(e) => &e.url,
            Entity::Vehicle(e) => &e.url,
        }
    }

    /// Local identifier derived from the entity's own URL
    pub fn local_id(&self) -> &str {
        resolve_id(self.url())
    }
}

/// A typed entity record that can be fetched, cached and linked to.
///
/// Implemented for every record in this module. The conversions to and from
/// [`Entity`] let heterogeneous caches hand back the concrete type.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The kind this record represents
    const KIND: ResourceKind;

    /// Absolute URL of this entity
    fn url(&self) -> &str;

    /// Wrap into the kind-tagged [`Entity`]
    fn into_entity(self) -> Entity;

    /// Unwrap from [`Entity`], `None` when the kinds differ
    fn from_entity(entity: Entity) -> Option<Self>;

    /// Local identifier derived from [`Resource::url`]
    fn local_id(&self) -> &str {
        resolve_id(self.url())
    }
}

macro_rules! impl_resource {
    ($record:ident, $kind:ident) => {
        impl Resource for $record {
            const KIND: ResourceKind = ResourceKind::$kind;

            fn url(&self) -> &str {
                &self.url
            }

            fn into_entity(self) -> Entity {
                Entity::$record(self)
            }

            fn from_entity(entity: Entity) -> Option<Self> {
                match entity {
                    Entity::$record(e) => Some(e),
                    _ => None,
                }
            }
        }

        impl From<$record> for Entity {
            fn from(record: $record) -> Self {
                Entity::$record(record)
            }
        }
    };
}

impl_resource!(Person, People);
impl_resource!(Film, Films);
impl_resource!(Planet, Planets);
impl_resource!(Starship, Starships);
impl_resource!(Vehicle, Vehicles);
