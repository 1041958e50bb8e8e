//! Application service layer.
//!
//! Services turn resource requests into endpoint strings, resolve them
//! through a [`Resolver`](crate::client::Resolver) and decode the JSON into
//! typed models. They sit between the fetcher and the console/HTTP front-ends.

mod catalog_service;

pub use catalog_service::{CatalogService, CatalogServiceImpl, Endpoint};
