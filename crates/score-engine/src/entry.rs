//! Entry Entity
//!
//! One ranked media entry: identity, display metadata, and the scoring
//! fields the interpolation pass works with.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A ranked list entry
///
/// `score` is `None` until the entry has been given a score; the source
/// list always supplies one on fetch, so `None` mostly means "cleared by
/// the user this session". `repeat` is informational and never touched by
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier (stable across reorders within a session)
    pub id: u32,
    /// Display title
    pub title: String,
    /// Cover image URL, when the source provides one
    pub cover_url: Option<String>,
    /// Score in [0, 10], stepped by 0.5
    pub score: Option<f64>,
    /// User-controlled pin flag, independent of the score value
    pub pinned: bool,
    /// Times the entry was re-read
    pub repeat: u32,
}

impl Entry {
    /// Create an unscored, unpinned entry
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover_url: None,
            score: None,
            pinned: false,
            repeat: 0,
        }
    }

    /// Create an entry that already carries a score
    pub fn with_score(id: u32, title: impl Into<String>, score: f64) -> Self {
        Self {
            score: Some(score),
            ..Self::new(id, title)
        }
    }

    /// Same entry with the pin flag set
    pub fn pin(mut self) -> Self {
        self.pinned = true;
        self
    }
}

impl Entity for Entry {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
