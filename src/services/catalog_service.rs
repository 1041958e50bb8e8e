//! Catalog service layer.
//!
//! Builds SWAPI endpoints for each resource kind and decodes the resolved
//! documents into typed models.

use crate::client::Resolver;
use crate::error::{ApiError, ApiResult};
use crate::models::{Character, Film, Page, Planet, Starship, Vehicle};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// The resource endpoints the catalog knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Character(u32),
    Starships(u32),
    Planets(u32),
    Films,
    Vehicle(u32),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Character(id) => write!(f, "people/{}", id),
            Endpoint::Starships(page) => write!(f, "starships/?page={}", page),
            Endpoint::Planets(page) => write!(f, "planets/?page={}", page),
            Endpoint::Films => f.write_str("films/"),
            Endpoint::Vehicle(id) => write!(f, "vehicles/{}", id),
        }
    }
}

impl Endpoint {
    fn validate(&self) -> ApiResult<()> {
        match *self {
            Endpoint::Character(0) | Endpoint::Vehicle(0) => Err(ApiError::InvalidArgument(
                "Resource id must be 1 or greater".to_string(),
            )),
            Endpoint::Starships(0) | Endpoint::Planets(0) => Err(ApiError::InvalidArgument(
                "Page number must be 1 or greater".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Catalog service trait for typed resource lookups.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Get a character by id (`people/{id}`).
    async fn character(&self, id: u32) -> ApiResult<Character>;

    /// Get one page of starships (`starships/?page={n}`).
    async fn starships(&self, page: u32) -> ApiResult<Page<Starship>>;

    /// Get one page of planets (`planets/?page={n}`).
    async fn planets(&self, page: u32) -> ApiResult<Page<Planet>>;

    /// Get the film list (`films/`).
    async fn films(&self) -> ApiResult<Page<Film>>;

    /// Get a vehicle by id (`vehicles/{id}`).
    async fn vehicle(&self, id: u32) -> ApiResult<Vehicle>;
}

/// Default implementation of CatalogService.
pub struct CatalogServiceImpl {
    resolver: Arc<dyn Resolver>,
}

impl CatalogServiceImpl {
    /// Create a new catalog service.
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }

    /// Resolve an endpoint and decode it as `T`.
    ///
    /// A decode failure leaves the fetch counters alone: the fetch itself
    /// succeeded and its document stays cached.
    async fn load<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        endpoint.validate()?;

        let endpoint = endpoint.to_string();
        let value = self.resolver.resolve(&endpoint).await?;

        T::deserialize(value.as_ref()).map_err(|source| {
            tracing::warn!(endpoint = %endpoint, "Unexpected document shape: {}", source);
            ApiError::Decode { endpoint, source }
        })
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn character(&self, id: u32) -> ApiResult<Character> {
        self.load(Endpoint::Character(id)).await
    }

    async fn starships(&self, page: u32) -> ApiResult<Page<Starship>> {
        self.load(Endpoint::Starships(page)).await
    }

    async fn planets(&self, page: u32) -> ApiResult<Page<Planet>> {
        self.load(Endpoint::Planets(page)).await
    }

    async fn films(&self) -> ApiResult<Page<Film>> {
        self.load(Endpoint::Films).await
    }

    async fn vehicle(&self, id: u32) -> ApiResult<Vehicle> {
        self.load(Endpoint::Vehicle(id)).await
    }
}
