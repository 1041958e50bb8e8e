//! Plain-text renderers for terminal output.

use crate::metrics::MetricsSummary;
use crate::models::{Character, Film, Page, Planet, Starship, Vehicle};
use crate::stats::{FilmStats, PlanetStats, StarshipStats};
use std::fmt::Write;

// Writing into a String cannot fail, so the fmt::Result of writeln! is dropped.

pub fn render_character(character: &Character) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", character.name);
    let _ = writeln!(out, "  Height:     {} cm", character.height);
    let _ = writeln!(out, "  Mass:       {} kg", character.mass);
    let _ = writeln!(out, "  Hair:       {}", character.hair_color);
    let _ = writeln!(out, "  Skin:       {}", character.skin_color);
    let _ = writeln!(out, "  Eyes:       {}", character.eye_color);
    let _ = writeln!(out, "  Born:       {}", character.birth_year);
    let _ = writeln!(out, "  Gender:     {}", character.gender);
    if let Some(bmi) = character.bmi() {
        let _ = writeln!(out, "  BMI:        {:.1}", bmi);
    }
    let _ = writeln!(out, "  Films:      {}", character.films.len());
    out
}

pub fn render_starships(page: &Page<Starship>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Starships ({} total)", page.count);
    for ship in &page.results {
        let _ = writeln!(
            out,
            "  - {} [{}] crew {}, hyperdrive {}",
            ship.name, ship.starship_class, ship.crew, ship.hyperdrive_rating
        );
    }

    let stats = StarshipStats::from_starships(&page.results);
    if let Some(rating) = stats.mean_hyperdrive_rating {
        let _ = writeln!(out, "  Mean hyperdrive rating: {:.2}", rating);
    }
    if let Some((name, crew)) = &stats.largest_crew {
        let _ = writeln!(out, "  Largest crew: {} ({})", name, crew);
    }
    if page.has_next() {
        let _ = writeln!(out, "  (more pages available)");
    }
    out
}

pub fn render_planets(page: &Page<Planet>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Planets ({} total)", page.count);
    for planet in &page.results {
        let _ = writeln!(
            out,
            "  - {}: {} climate, {} terrain, population {}",
            planet.name, planet.climate, planet.terrain, planet.population
        );
    }

    let stats = PlanetStats::from_planets(&page.results);
    let _ = writeln!(out, "  Known population on this page: {}", stats.total_population);
    if let Some((name, population)) = &stats.most_populous {
        let _ = writeln!(out, "  Most populous: {} ({})", name, population);
    }
    if stats.unknown_population > 0 {
        let _ = writeln!(out, "  Unknown population: {} planet(s)", stats.unknown_population);
    }
    if page.has_next() {
        let _ = writeln!(out, "  (more pages available)");
    }
    out
}

pub fn render_films(page: &Page<Film>) -> String {
    let stats = FilmStats::from_films(&page.results);

    let mut out = String::new();
    let _ = writeln!(out, "Films ({})", stats.count);
    let mut films: Vec<&Film> = page.results.iter().collect();
    films.sort_by_key(|film| (film.released_on().is_none(), film.released_on()));
    for film in films {
        let _ = writeln!(
            out,
            "  - Episode {}: {} ({}), directed by {}",
            film.episode_id, film.title, film.release_date, film.director
        );
    }
    if let (Some(earliest), Some(latest), Some(span)) =
        (stats.earliest, stats.latest, stats.span_years)
    {
        let _ = writeln!(
            out,
            "  Released {} to {} ({} years)",
            earliest, latest, span
        );
    }
    out
}

pub fn render_vehicle(vehicle: &Vehicle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", vehicle.name);
    let _ = writeln!(out, "  Model:        {}", vehicle.model);
    let _ = writeln!(out, "  Manufacturer: {}", vehicle.manufacturer);
    let _ = writeln!(out, "  Class:        {}", vehicle.vehicle_class);
    let _ = writeln!(out, "  Crew:         {}", vehicle.crew);
    let _ = writeln!(out, "  Passengers:   {}", vehicle.passengers);
    let _ = writeln!(out, "  Cost:         {} credits", vehicle.cost_in_credits);
    out
}

pub fn render_metrics(summary: &MetricsSummary, cache_size: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Fetch statistics");
    let _ = writeln!(out, "  Requests:   {}", summary.fetch_count);
    let _ = writeln!(out, "  Errors:     {}", summary.error_count);
    let _ = writeln!(out, "  Bytes:      {}", summary.total_bytes);
    let _ = writeln!(out, "  Avg (ms):   {:.1}", summary.duration_avg_ms);
    let _ = writeln!(out, "  Cached:     {}", cache_size);
    out
}
