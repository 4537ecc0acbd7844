//! Marker types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification assigned by the chart layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Support,
    Resistance,
    Neutral,
}

/// A horizontal line at a single price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Price level
    pub y: Decimal,
    /// Classification
    pub kind: MarkerKind,
}

impl Line {
    pub fn new(y: Decimal, kind: MarkerKind) -> Self {
        Self { y, kind }
    }
}

/// A rectangular price band drawn between two times
///
/// Edges and times are stored as drawn; `y1`/`y2` and `time1`/`time2` may be
/// in either order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub y1: Decimal,
    pub y2: Decimal,
    pub time1: DateTime<Utc>,
    pub time2: DateTime<Utc>,
    pub kind: MarkerKind,
}

impl Zone {
    pub fn new(
        y1: Decimal,
        y2: Decimal,
        time1: DateTime<Utc>,
        time2: DateTime<Utc>,
        kind: MarkerKind,
    ) -> Self {
        Self {
            y1,
            y2,
            time1,
            time2,
            kind,
        }
    }

    /// Higher of the two edges
    pub fn upper_edge(&self) -> Decimal {
        self.y1.max(self.y2)
    }

    /// Lower of the two edges
    pub fn lower_edge(&self) -> Decimal {
        self.y1.min(self.y2)
    }

    /// Ordered time span `(start, end)`
    pub fn span(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        if self.time1 <= self.time2 {
            (self.time1, self.time2)
        } else {
            (self.time2, self.time1)
        }
    }

    /// Whether `price` lies between the edges, inclusive
    pub fn contains(&self, price: Decimal) -> bool {
        self.lower_edge() <= price && price <= self.upper_edge()
    }
}

/// A drawn annotation the classifier can read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Marker {
    Line(Line),
    Zone(Zone),
}

impl Marker {
    /// Classification of the marker
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::Line(line) => line.kind,
            Marker::Zone(zone) => zone.kind,
        }
    }
}

impl From<Line> for Marker {
    fn from(line: Line) -> Self {
        Marker::Line(line)
    }
}

impl From<Zone> for Marker {
    fn from(zone: Zone) -> Self {
        Marker::Zone(zone)
    }
}
