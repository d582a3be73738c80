// MIT/Apache2 License

//! Named dimensions and strings that configure a [`ClippedView`](crate::ClippedView).

use crate::Error;
use std::collections::HashMap;

/// The names looked up when building a [`Layout`](crate::Layout) and its labels.
pub mod names {
    pub const CLIP_RECT_RIGHT: &str = "clipRectRight";
    pub const CLIP_RECT_BOTTOM: &str = "clipRectBottom";
    pub const CLIP_RECT_TOP: &str = "clipRectTop";
    pub const CLIP_RECT_LEFT: &str = "clipRectLeft";
    pub const RECT_INSET: &str = "rectInset";
    pub const SMALL_RECT_OFFSET: &str = "smallRectOffset";
    pub const CIRCLE_RADIUS: &str = "circleRadius";
    pub const TEXT_OFFSET: &str = "textOffset";
    pub const TEXT_SIZE: &str = "textSize";
    pub const STROKE_WIDTH: &str = "strokeWidth";

    pub const CLIPPING: &str = "clipping";
    pub const TRANSLATED: &str = "translated";
    pub const SKEWED: &str = "skewed";
}

/// Somewhere to look up configuration values by name.
pub trait Resources {
    /// Get a dimension, in surface units.
    fn get_dimension(&self, name: &str) -> crate::Result<f32>;
    /// Get a string.
    fn get_string(&self, name: &str) -> crate::Result<String>;
}

impl<R: Resources + ?Sized> Resources for &R {
    #[inline]
    fn get_dimension(&self, name: &str) -> crate::Result<f32> {
        (**self).get_dimension(name)
    }

    #[inline]
    fn get_string(&self, name: &str) -> crate::Result<String> {
        (**self).get_string(name)
    }
}

const DEFAULT_DIMENSIONS: &[(&str, f32)] = &[
    (names::CLIP_RECT_RIGHT, 90.0),
    (names::CLIP_RECT_BOTTOM, 90.0),
    (names::CLIP_RECT_TOP, 0.0),
    (names::CLIP_RECT_LEFT, 0.0),
    (names::RECT_INSET, 8.0),
    (names::SMALL_RECT_OFFSET, 40.0),
    (names::CIRCLE_RADIUS, 30.0),
    (names::TEXT_OFFSET, 20.0),
    (names::TEXT_SIZE, 18.0),
    (names::STROKE_WIDTH, 4.0),
];

const DEFAULT_STRINGS: &[(&str, &str)] = &[
    (names::CLIPPING, "Clipping"),
    (names::TRANSLATED, "Translated Text"),
    (names::SKEWED, "Skewed and "),
];

/// An in-memory set of resources.
///
/// Dimensions are stored in density-independent units and multiplied by the table's density
/// when they are looked up.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    density: f32,
    dimensions: HashMap<String, f32>,
    strings: HashMap<String, String>,
}

impl Default for ResourceTable {
    /// The values the clipping demo was designed around, at a density of 1.
    #[inline]
    fn default() -> Self {
        Self {
            density: 1.0,
            dimensions: DEFAULT_DIMENSIONS
                .iter()
                .map(|&(name, dp)| (name.to_string(), dp))
                .collect(),
            strings: DEFAULT_STRINGS
                .iter()
                .map(|&(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl ResourceTable {
    /// A table with no entries at all.
    #[inline]
    pub fn empty() -> Self {
        Self {
            density: 1.0,
            dimensions: HashMap::new(),
            strings: HashMap::new(),
        }
    }

    #[inline]
    pub fn with_density(self, density: f32) -> Self {
        Self { density, ..self }
    }

    /// Set a dimension, in density-independent units.
    #[inline]
    pub fn with_dimension<N: Into<String>>(mut self, name: N, dp: f32) -> Self {
        self.dimensions.insert(name.into(), dp);
        self
    }

    #[inline]
    pub fn with_string<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.strings.insert(name.into(), value.into());
        self
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }
}

impl Resources for ResourceTable {
    #[inline]
    fn get_dimension(&self, name: &str) -> crate::Result<f32> {
        self.dimensions
            .get(name)
            .map(|dp| dp * self.density)
            .ok_or_else(|| Error::MissingDimension(name.to_string()))
    }

    #[inline]
    fn get_string(&self, name: &str) -> crate::Result<String> {
        self.strings
            .get(name)
            .cloned()
            .ok_or_else(|| Error::MissingString(name.to_string()))
    }
}
