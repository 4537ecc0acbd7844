//! Chart markers
//!
//! Read-only view of the support/resistance annotations drawn on a chart

mod types;

pub use types::{Line, Marker, MarkerKind, Zone};

use serde::{Deserialize, Serialize};

/// Markers visible to a single validation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub markers: Vec<Marker>,
}

impl MarkerSnapshot {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Load a snapshot from JSON
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All markers in drawing order
    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    /// Horizontal lines only
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.markers.iter().filter_map(|m| match m {
            Marker::Line(line) => Some(line),
            Marker::Zone(_) => None,
        })
    }

    /// Zones only
    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.markers.iter().filter_map(|m| match m {
            Marker::Zone(zone) => Some(zone),
            Marker::Line(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl FromIterator<Marker> for MarkerSnapshot {
    fn from_iter<T: IntoIterator<Item = Marker>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
