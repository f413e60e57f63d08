//! Plain-text views
//!
//! Every linked entity is shown with the route it can be opened with, e.g.
//! `[person 2] C-3PO`.

use holocron_client::{resolve_id, Person, Resource};
use holocron_sdk::{
    FilmAggregate, PersonAggregate, PlanetAggregate, StarshipAggregate, VehicleAggregate,
};

const BACK: &str = "Back to list: `list`";

/// Line-oriented text builder
#[derive(Default)]
struct Doc(String);

impl Doc {
    fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.0.push_str(text.as_ref());
        self.0.push('\n');
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    fn field(&mut self, label: &str, value: impl AsRef<str>) -> &mut Self {
        self.line(format!("  {:<18}{}", label, value.as_ref()))
    }

    /// A heading followed by one route line per entity, or `empty`
    fn links<T: Resource>(
        &mut self,
        heading: &str,
        items: &[T],
        name: impl Fn(&T) -> &str,
        empty: &str,
    ) -> &mut Self {
        self.line(format!("{heading}:"));
        if items.is_empty() {
            return self.line(format!("  {empty}"));
        }
        for item in items {
            self.line(format!("  {} {}", route(item), name(item)));
        }
        self
    }

    fn finish(self) -> String {
        self.0
    }
}

fn route<T: Resource>(item: &T) -> String {
    format!("[{} {}]", T::KIND, item.local_id())
}

/// Single-line summary of a person
pub fn person_card(person: &Person) -> String {
    format!(
        "{} {} (born {}, {})",
        route(person),
        person.name,
        person.birth_year,
        person.gender
    )
}

/// Home page: all characters or search matches
pub fn person_list(query: Option<&str>, people: &[Person]) -> String {
    let mut doc = Doc::default();
    if people.is_empty() {
        doc.line("No characters found");
        return doc.finish();
    }

    match query {
        Some(query) => doc.line(format!("Search Results for \"{query}\"")),
        None => doc.line("All Characters"),
    };
    for person in people {
        doc.line(format!("  {}", person_card(person)));
    }
    doc.finish()
}

pub fn person(view: &PersonAggregate) -> String {
    let person = &view.person;
    let mut doc = Doc::default();

    doc.line(&person.name)
        .line(format!("From {}", view.homeworld.name))
        .blank()
        .field("Birth Year", &person.birth_year)
        .field("Height", format!("{}cm", person.height))
        .field("Mass", format!("{}kg", person.mass))
        .field("Gender", &person.gender)
        .field("Eye Color", &person.eye_color)
        .field("Hair Color", &person.hair_color)
        .field("Skin Color", &person.skin_color)
        .blank();

    doc.line(format!("Homeworld {}", route(&view.homeworld)))
        .field("Planet", &view.homeworld.name)
        .field("Climate", &view.homeworld.climate)
        .field("Terrain", &view.homeworld.terrain)
        .field("Population", &view.homeworld.population)
        .blank()
        .links("Neighbors", &view.neighbors, |p| p.name.as_str(), "No other residents found")
        .blank()
        .links("Films", &view.films, |f| f.title.as_str(), "No films available")
        .links("Vehicles", &view.vehicles, |v| v.name.as_str(), "No vehicles")
        .links("Starships", &view.starships, |s| s.name.as_str(), "No starships")
        .line("Species:");

    if person.species.is_empty() {
        doc.line("  Species unknown");
    }
    for species in &person.species {
        doc.line(format!("  {}", resolve_id(species)));
    }

    doc.blank().line(BACK);
    doc.finish()
}

pub fn film(view: &FilmAggregate) -> String {
    let film = &view.film;
    let mut doc = Doc::default();

    doc.line(format!("Episode {}: {}", film.episode_id, film.title))
        .blank()
        .line(film.opening_crawl.trim())
        .blank()
        .field("Director", &film.director)
        .field("Producer", &film.producer)
        .field("Release Date", &film.release_date)
        .blank()
        .links("Characters", &view.characters, |p| p.name.as_str(), "No characters")
        .links("Planets", &view.planets, |p| p.name.as_str(), "No planets")
        .links("Starships", &view.starships, |s| s.name.as_str(), "No starships")
        .links("Vehicles", &view.vehicles, |v| v.name.as_str(), "No vehicles")
        .blank()
        .line(BACK);
    doc.finish()
}

pub fn planet(view: &PlanetAggregate) -> String {
    let planet = &view.planet;
    let mut doc = Doc::default();

    doc.line(&planet.name)
        .blank()
        .field("Climate", &planet.climate)
        .field("Terrain", &planet.terrain)
        .field("Surface Water", format!("{}%", planet.surface_water))
        .field("Population", &planet.population)
        .field("Rotation Period", format!("{} hours", planet.rotation_period))
        .field("Orbital Period", format!("{} days", planet.orbital_period))
        .field("Diameter", format!("{} km", planet.diameter))
        .field("Gravity", &planet.gravity)
        .blank()
        .links("Residents", &view.residents, |p| p.name.as_str(), "No known residents")
        .blank()
        .line(BACK);
    doc.finish()
}

pub fn starship(view: &StarshipAggregate) -> String {
    let ship = &view.starship;
    let mut doc = Doc::default();

    doc.line(&ship.name)
        .line(&ship.model)
        .blank()
        .field("Class", &ship.starship_class)
        .field("Manufacturer", &ship.manufacturer)
        .field("Length", format!("{} meters", ship.length))
        .field("Speed", &ship.max_atmosphering_speed)
        .field("Hyperdrive Rating", &ship.hyperdrive_rating)
        .field("MGLT", &ship.mglt)
        .field("Crew", &ship.crew)
        .field("Passengers", &ship.passengers)
        .field("Cargo Capacity", format!("{} kg", ship.cargo_capacity))
        .field("Consumables", &ship.consumables)
        .field("Cost", format!("{} credits", ship.cost_in_credits))
        .blank()
        .links("Pilots", &view.pilots, |p| p.name.as_str(), "No known pilots")
        .links("Films", &view.films, |f| f.title.as_str(), "No films available")
        .blank()
        .line(BACK);
    doc.finish()
}

pub fn vehicle(view: &VehicleAggregate) -> String {
    let vehicle = &view.vehicle;
    let mut doc = Doc::default();

    doc.line(&vehicle.name)
        .line(&vehicle.model)
        .blank()
        .field("Class", &vehicle.vehicle_class)
        .field("Manufacturer", &vehicle.manufacturer)
        .field("Length", format!("{} meters", vehicle.length))
        .field("Speed", format!("{} km/h", vehicle.max_atmosphering_speed))
        .field("Crew", &vehicle.crew)
        .field("Passengers", &vehicle.passengers)
        .field("Cargo Capacity", format!("{} kg", vehicle.cargo_capacity))
        .field("Consumables", &vehicle.consumables)
        .field("Cost", format!("{} credits", vehicle.cost_in_credits))
        .blank()
        .links("Pilots", &view.pilots, |p| p.name.as_str(), "No known pilots")
        .links("Films", &view.films, |f| f.title.as_str(), "No films available")
        .blank()
        .line(BACK);
    doc.finish()
}

/// Generic failure view; carries no error detail
pub fn not_found() -> String {
    let mut doc = Doc::default();
    doc.line("Not found")
        .line("The requested entry failed to load or does not exist.")
        .blank()
        .line(BACK);
    doc.finish()
}
