//! Persistence seam for artworks
//!
//! The gallery core talks to storage only through [`ArtworkStore`]. The
//! production deployment backs this with a relational database; tests and
//! the CLI use the in-memory implementation.

use crate::models::Artwork;
use std::collections::HashMap;
use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("artwork id '{0}' already exists")]
    DuplicateId(String),
    #[error("artwork '{0}' not found")]
    NotFound(String),
}

/// Storage operations the gallery core needs.
///
/// `increment_views` must be applied as a single atomic update on the
/// backing store (`views = views + 1` server-side for SQL backends), not
/// as a read-modify-write in caller memory; concurrent fetches of the
/// same artwork would otherwise lose counts.
pub trait ArtworkStore {
    /// Look up an artwork by id.
    fn get(&self, id: &str) -> Option<Artwork>;

    /// Insert a new artwork. Ids are unique; a duplicate is refused.
    fn insert(&mut self, artwork: Artwork) -> Result<(), StoreError>;

    /// Atomically add one to an artwork's view count, returning the new
    /// count.
    fn increment_views(&mut self, id: &str) -> Result<u64, StoreError>;

    /// All artworks whose remix parent is `id`, newest first.
    fn remixes_of(&self, id: &str) -> Vec<Artwork>;

    /// All artworks, newest first.
    fn list(&self) -> Vec<Artwork>;
}

/// In-memory store keyed by artwork id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    artworks: HashMap<String, Artwork>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

/// Newest first, id as tiebreaker so ordering is stable.
fn sort_newest_first(artworks: &mut [Artwork]) {
    artworks.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

impl ArtworkStore for MemoryStore {
    fn get(&self, id: &str) -> Option<Artwork> {
        self.artworks.get(id).cloned()
    }

    fn insert(&mut self, artwork: Artwork) -> Result<(), StoreError> {
        if self.artworks.contains_key(&artwork.id) {
            return Err(StoreError::DuplicateId(artwork.id.clone()));
        }
        self.artworks.insert(artwork.id.clone(), artwork);
        Ok(())
    }

    fn increment_views(&mut self, id: &str) -> Result<u64, StoreError> {
        let artwork = self
            .artworks
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        artwork.views += 1;
        Ok(artwork.views)
    }

    fn remixes_of(&self, id: &str) -> Vec<Artwork> {
        let mut remixes: Vec<Artwork> = self
            .artworks
            .values()
            .filter(|a| a.remix_of.as_deref() == Some(id))
            .cloned()
            .collect();
        sort_newest_first(&mut remixes);
        remixes
    }

    fn list(&self) -> Vec<Artwork> {
        let mut all: Vec<Artwork> = self.artworks.values().cloned().collect();
        sort_newest_first(&mut all);
        all
    }
}
