//! Pressure-value → color mapping along the green-to-red scale.

use std::fmt;

use serde::Serialize;

/// Pressure at or above this value maps to pure red.
pub const MAX_PRESSURE: f64 = 1100.0;

/// A paintable color: an HSL triple or a CSS color keyword.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Color {
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
    Named(&'static str),
}

impl Color {
    /// Marker label color, legible over any point of the scale.
    pub const LABEL: Color = Color::Named("white");
    /// Legend caption color.
    pub const CAPTION: Color = Color::Named("#000");
    /// Low end of the legend gradient.
    pub const SCALE_LOW: Color = Color::Named("green");
    /// High end of the legend gradient.
    pub const SCALE_HIGH: Color = Color::Named("red");

    /// A fully-saturated, half-lightness color at the given hue.
    pub const fn hsl(hue: f64) -> Self {
        Color::Hsl {
            hue,
            saturation: 100.0,
            lightness: 50.0,
        }
    }

    /// The hue in degrees, if this is an HSL color.
    pub fn hue(&self) -> Option<f64> {
        match self {
            Color::Hsl { hue, .. } => Some(*hue),
            Color::Named(_) => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
            Color::Named(name) => f.write_str(name),
        }
    }
}

/// Map a pressure value onto the green-to-red scale.
///
/// The value is clamped to `[0, MAX_PRESSURE]` and interpolated linearly:
/// hue `120°` (green) at zero, hue `0°` (red) at `MAX_PRESSURE` and beyond,
/// `60°` exactly midway. Hue never increases as pressure grows.
pub fn pressure_color(value: f64) -> Color {
    let ratio = value.clamp(0.0, MAX_PRESSURE) / MAX_PRESSURE;
    Color::hsl((1.0 - ratio) * 120.0)
}
