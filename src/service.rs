//! Gallery submission and fetch pipeline
//!
//! Ties the pure pieces together: structural validation, remix policy,
//! identity minting, and the store seam. All rejections happen before any
//! state mutation; an accepted submission is inserted exactly once.

use crate::ascii::render_ascii;
use crate::config::GalleryConfig;
use crate::html::render_html;
use crate::models::{Artwork, ArtworkSubmission};
use crate::remix::{change_ratio, RemixPolicyError};
use crate::store::{ArtworkStore, StoreError};
use crate::svg::render_svg;
use crate::validate::{check_palette, check_pixels, check_size, ValidationError};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Length of minted artwork ids.
const ID_LEN: usize = 12;

/// Any reason the gallery refuses a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// Malformed palette, grid, or disallowed canvas size
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Author name empty or too long
    #[error("author name must be 1-{max} characters, got {len}")]
    AuthorLength { len: usize, max: usize },
    /// Title too long
    #[error("title must be at most {max} characters, got {len}")]
    TitleLength { len: usize, max: usize },
    /// Submission declares a remix parent that does not exist
    #[error("remix parent '{0}' not found")]
    RemixParentNotFound(String),
    /// Remix canvas must match its parent's
    #[error("remix canvas size {actual} does not match parent's size {expected}")]
    RemixSizeMismatch { expected: u32, actual: u32 },
    /// Change-ratio policy rejection
    #[error(transparent)]
    RemixPolicy(#[from] RemixPolicyError),
    /// Unknown artwork id on fetch
    #[error("artwork '{0}' not found")]
    NotFound(String),
    /// Store-level refusal
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The gallery core, generic over its storage backend.
pub struct GalleryService<S: ArtworkStore> {
    store: S,
    config: GalleryConfig,
}

impl<S: ArtworkStore> GalleryService<S> {
    pub fn new(store: S, config: GalleryConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a submission and, if accepted, persist it as a new
    /// artwork. No state is touched until every check has passed.
    pub fn submit(&mut self, submission: ArtworkSubmission) -> Result<Artwork, GalleryError> {
        self.check_fields(&submission)?;
        check_size(submission.size, &self.config)?;
        check_palette(&submission.palette)?;
        check_pixels(&submission.pixels, submission.size, submission.palette.len())?;

        if let Some(parent_id) = &submission.remix_of {
            let parent = self
                .store
                .get(parent_id)
                .ok_or_else(|| GalleryError::RemixParentNotFound(parent_id.clone()))?;
            if parent.size != submission.size {
                return Err(GalleryError::RemixSizeMismatch {
                    expected: parent.size,
                    actual: submission.size,
                });
            }
            let analysis = change_ratio(
                &parent.palette,
                &parent.pixels,
                &submission.palette,
                &submission.pixels,
                submission.size,
            );
            analysis.check()?;
        }

        let artwork = Artwork {
            id: mint_id(),
            author: submission.author.trim().to_string(),
            title: submission.title,
            size: submission.size,
            palette: submission.palette,
            pixels: submission.pixels,
            created_at: now_epoch(),
            views: 0,
            remix_of: submission.remix_of,
        };
        self.store.insert(artwork.clone())?;
        Ok(artwork)
    }

    /// Fetch an artwork for viewing. Counts the view: the store applies
    /// the increment atomically, once per successful fetch.
    pub fn fetch(&mut self, id: &str) -> Result<Artwork, GalleryError> {
        let mut artwork = self
            .store
            .get(id)
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;
        artwork.views = self.store.increment_views(id)?;
        Ok(artwork)
    }

    /// Fetch an artwork's ASCII rendering. Counts as a view.
    pub fn fetch_ascii(&mut self, id: &str) -> Result<String, GalleryError> {
        Ok(render_ascii(&self.fetch(id)?))
    }

    /// Fetch an artwork's SVG rendering. Counts as a view.
    pub fn fetch_svg(&mut self, id: &str) -> Result<String, GalleryError> {
        Ok(render_svg(&self.fetch(id)?))
    }

    /// Fetch an artwork's HTML page. Counts as a view.
    pub fn fetch_html(&mut self, id: &str) -> Result<String, GalleryError> {
        Ok(render_html(&self.fetch(id)?))
    }

    /// Remixes derived from `id`, newest first. Does not count views.
    pub fn remixes_of(&self, id: &str) -> Result<Vec<Artwork>, GalleryError> {
        if self.store.get(id).is_none() {
            return Err(GalleryError::NotFound(id.to_string()));
        }
        Ok(self.store.remixes_of(id))
    }

    /// All artworks, newest first. Does not count views.
    pub fn list(&self) -> Vec<Artwork> {
        self.store.list()
    }

    fn check_fields(&self, submission: &ArtworkSubmission) -> Result<(), GalleryError> {
        let limits = &self.config.limits;
        let author_len = submission.author.trim().chars().count();
        if author_len == 0 || author_len > limits.max_author_len {
            return Err(GalleryError::AuthorLength {
                len: author_len,
                max: limits.max_author_len,
            });
        }
        if let Some(title) = &submission.title {
            let title_len = title.chars().count();
            if title_len > limits.max_title_len {
                return Err(GalleryError::TitleLength {
                    len: title_len,
                    max: limits.max_title_len,
                });
            }
        }
        Ok(())
    }
}

/// Mint an opaque artwork id: 12 random alphanumeric characters.
fn mint_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

/// Current time as unix epoch seconds.
fn now_epoch() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
