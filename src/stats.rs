//! Simple aggregates over fetched resources.

use crate::models::{Film, Planet, Starship};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Aggregates over one page of planets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetStats {
    pub count: usize,
    /// Sum over planets whose population is a number
    pub total_population: u64,
    /// Name and population of the most populous planet
    pub most_populous: Option<(String, u64)>,
    /// Planets reporting "unknown" or otherwise non-numeric population
    pub unknown_population: usize,
}

impl PlanetStats {
    pub fn from_planets(planets: &[Planet]) -> Self {
        let mut total_population = 0u64;
        let mut most_populous: Option<(String, u64)> = None;
        let mut unknown_population = 0;

        for planet in planets {
            match planet.population() {
                Some(population) => {
                    total_population = total_population.saturating_add(population);
                    if most_populous.as_ref().map_or(true, |(_, max)| population > *max) {
                        most_populous = Some((planet.name.clone(), population));
                    }
                }
                None => unknown_population += 1,
            }
        }

        Self {
            count: planets.len(),
            total_population,
            most_populous,
            unknown_population,
        }
    }
}

/// Aggregates over one page of starships.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarshipStats {
    pub count: usize,
    /// Mean over ships with a numeric hyperdrive rating
    pub mean_hyperdrive_rating: Option<f64>,
    /// Name and crew size of the ship with the largest crew
    pub largest_crew: Option<(String, u64)>,
}

impl StarshipStats {
    pub fn from_starships(starships: &[Starship]) -> Self {
        let ratings: Vec<f64> = starships
            .iter()
            .filter_map(Starship::hyperdrive_rating)
            .collect();
        let mean_hyperdrive_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };

        let largest_crew = starships
            .iter()
            .filter_map(|ship| ship.crew().map(|crew| (ship.name.clone(), crew)))
            .fold(None, |best: Option<(String, u64)>, candidate| {
                if best.as_ref().map_or(true, |(_, crew)| candidate.1 > *crew) {
                    Some(candidate)
                } else {
                    best
                }
            });

        Self {
            count: starships.len(),
            mean_hyperdrive_rating,
            largest_crew,
        }
    }
}

/// Aggregates over the film list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmStats {
    pub count: usize,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
    /// Whole years between the earliest and latest release
    pub span_years: Option<i32>,
    /// Titles ordered by release date; undated films come last
    pub chronological: Vec<String>,
}

impl FilmStats {
    pub fn from_films(films: &[Film]) -> Self {
        let mut ordered: Vec<&Film> = films.iter().collect();
        // `None` sorts before `Some`, so key on (is_none, date) to push undated films last
        ordered.sort_by_key(|film| {
            let date = film.released_on();
            (date.is_none(), date)
        });

        let dates: Vec<NaiveDate> = films.iter().filter_map(Film::released_on).collect();
        let earliest = dates.iter().min().copied();
        let latest = dates.iter().max().copied();
        let span_years = match (earliest, latest) {
            (Some(first), Some(last)) => Some(last.year() - first.year()),
            _ => None,
        };

        Self {
            count: films.len(),
            earliest,
            latest,
            span_years,
            chronological: ordered.into_iter().map(|film| film.title.clone()).collect(),
        }
    }
}
