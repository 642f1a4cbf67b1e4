//! Image gallery and link list shown beside the transcript.
//!
//! DESIGN
//! ======
//! Both panels mirror only the most recent query response. They deliberately
//! react differently to an empty payload: the gallery hides itself, while the
//! link list keeps whatever it showed before.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use crate::net::types::{ImageResult, LinkResult};

/// Thumbnail gallery state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagePanel {
    /// Whether the gallery container is shown at all.
    pub visible: bool,
    /// Thumbnails from the last non-empty response. Stale once hidden.
    pub items: Vec<ImageResult>,
}

impl ImagePanel {
    /// Replace the gallery with `images`, or hide it when absent/empty.
    pub fn display(&mut self, images: Option<Vec<ImageResult>>) {
        match images {
            Some(items) if !items.is_empty() => {
                self.visible = true;
                self.items = items;
            }
            _ => self.visible = false,
        }
    }
}

/// Related-links list state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkPanel {
    pub items: Vec<LinkResult>,
}

impl LinkPanel {
    /// Replace the list with `links`. Absent/empty input leaves it untouched.
    pub fn display(&mut self, links: Option<Vec<LinkResult>>) {
        if let Some(items) = links.filter(|l| !l.is_empty()) {
            self.items = items;
        }
    }
}
