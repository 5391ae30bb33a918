//! Static album catalog compiled into the binary.

pub mod models;

pub use models::*;

use crate::utils::slugify;
use once_cell::sync::Lazy;
use thiserror::Error;

const CATALOG_JSON: &str = include_str!("albums.json");

static CATALOG: Lazy<Vec<Album>> = Lazy::new(|| match parse_catalog(CATALOG_JSON) {
    Ok(albums) => {
        tracing::debug!(count = albums.len(), "album catalog loaded");
        albums
    }
    Err(err) => {
        tracing::error!("failed to load album catalog: {err}");
        Vec::new()
    }
});

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no album matches slug `{slug}`")]
    NotFound { slug: String },
    #[error("malformed album catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Every album in catalog order.
pub fn albums() -> &'static [Album] {
    CATALOG.as_slice()
}

/// Look up the album for a route slug.
pub fn find_album(slug: &str) -> Result<&'static Album, CatalogError> {
    find_in(albums(), slug)
}

pub fn find_in<'a>(albums: &'a [Album], slug: &str) -> Result<&'a Album, CatalogError> {
    albums
        .iter()
        .find(|album| album.slug == slug)
        .ok_or_else(|| CatalogError::NotFound {
            slug: slug.to_string(),
        })
}

/// Parse catalog JSON, deriving slugs from titles where the entry has none.
pub fn parse_catalog(json: &str) -> Result<Vec<Album>, CatalogError> {
    let mut albums: Vec<Album> = serde_json::from_str(json)?;
    for album in albums.iter_mut() {
        if album.slug.trim().is_empty() {
            album.slug = slugify(&album.title);
        }
    }
    Ok(albums)
}
