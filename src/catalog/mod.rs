//! Bibliographic catalog lookups by ISBN.

mod client;
mod types;

pub use client::{CatalogClient, CatalogConfig, DEFAULT_CATALOG_URL};
pub use types::{ImageLinks, IndustryIdentifier, Volume, VolumeInfo, VolumesResponse};

use async_trait::async_trait;

use crate::error::LookupError;

/// A source of volume records keyed by ISBN
#[async_trait]
pub trait VolumeLookup: Send + Sync {
    /// Find the volumes carrying `isbn`
    async fn lookup_isbn(&self, isbn: &str) -> Result<VolumesResponse, LookupError>;
}
