//! Static sensor-name → plot-coordinate lookup.

use std::collections::HashMap;

use serde::Serialize;

/// A 2D coordinate in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Immutable mapping from sensor name to the pixel coordinate it is plotted
/// at.
///
/// The table is fixed configuration: built once, owned by the renderer,
/// never mutated at runtime. [`PositionTable::standard`] carries the six
/// reference positions over the foot outline; a custom table can be supplied
/// for other outlines or sensor layouts.
#[derive(Debug, Clone)]
pub struct PositionTable {
    entries: HashMap<String, Point>,
}

impl PositionTable {
    /// Build a table from explicit `(name, point)` entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Point)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, point)| (name.into(), point))
                .collect(),
        }
    }

    /// The six standard sensor positions over the 300×500 foot outline.
    pub fn standard() -> Self {
        Self::new([
            ("L0", Point::new(110.0, 175.0)),
            ("L1", Point::new(40.0, 210.0)),
            ("L2", Point::new(75.0, 400.0)),
            ("R0", Point::new(190.0, 175.0)),
            ("R1", Point::new(260.0, 210.0)),
            ("R2", Point::new(225.0, 400.0)),
        ])
    }

    /// Look up the plot position for a sensor name.
    ///
    /// Returns `None` for names the table does not know; the renderer treats
    /// a miss as a skippable reading, not a fault.
    pub fn position(&self, name: &str) -> Option<Point> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::standard()
    }
}
