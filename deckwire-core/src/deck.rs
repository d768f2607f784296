//! Slide artifacts and decks.
//!
//! A [`SlideArtifact`] is one self-contained presentation slide: an id, a
//! title, and a complete markup document. A [`SlideDeck`] is an ordered
//! collection of artifacts; presentation order is array order. Deck
//! construction enforces id uniqueness — a payload carrying duplicate ids is
//! rejected outright rather than deduplicated.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DeckError;

static HTML_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>([^<]+)</title>").expect("valid title pattern"));

/// Fallback display title for artifacts with no usable title anywhere.
pub const UNTITLED_SLIDE: &str = "Untitled Slide";

/// One self-contained presentation slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideArtifact {
    /// Identifier, unique within its deck.
    pub id: String,
    /// Human-facing slide title.
    #[serde(default)]
    pub title: String,
    /// Self-contained markup document for the slide.
    pub html: String,
}

impl SlideArtifact {
    /// Create a new artifact.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            html: html.into(),
        }
    }

    /// The title to display for this slide.
    ///
    /// Falls back to the markup's `<title>` element when the artifact title
    /// is empty, then to [`UNTITLED_SLIDE`].
    pub fn display_title(&self) -> &str {
        if !self.title.is_empty() {
            return &self.title;
        }
        HTML_TITLE
            .captures(&self.html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(UNTITLED_SLIDE)
    }
}

/// An ordered collection of slides forming one generated presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SlideDeck {
    slides: Vec<SlideArtifact>,
}

impl SlideDeck {
    /// Build a deck from artifacts in presentation order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateSlideId`] if two artifacts share an id.
    pub fn new(slides: Vec<SlideArtifact>) -> Result<Self, DeckError> {
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(DeckError::DuplicateSlideId {
                    id: slide.id.clone(),
                });
            }
        }
        Ok(Self { slides })
    }

    /// The slides in presentation order.
    pub fn slides(&self) -> &[SlideArtifact] {
        &self.slides
    }

    /// Look up a slide by id.
    pub fn get(&self, id: &str) -> Option<&SlideArtifact> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Iterate over the slides in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideArtifact> {
        self.slides.iter()
    }
}

impl<'a> IntoIterator for &'a SlideDeck {
    type Item = &'a SlideArtifact;
    type IntoIter = std::slice::Iter<'a, SlideArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
