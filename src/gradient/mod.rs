//! Gradient geometry and CSS gradient description.
//!
//! Geometry strings (direction, extent) are opaque to the engine and are
//! passed through verbatim; only the radial shape is a closed set.

pub mod describe;

use std::fmt;

use crate::config;

pub use describe::describe;

/// Radial gradient ending shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RadialShape {
    Circle,
    #[default]
    Ellipse,
}

impl RadialShape {
    /// Parse from a string name (matching the UI dropdown values).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(RadialShape::Circle),
            "ellipse" => Some(RadialShape::Ellipse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for RadialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gradient type plus its geometry parameters.
///
/// Rebuilt wholesale from the form on every edit; never partially mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GradientGeometry {
    /// `direction` is a CSS angle or `to <side>` keyword, passed through verbatim.
    Linear { direction: String },
    /// `extent` is a CSS sizing keyword or length, passed through verbatim.
    Radial { shape: RadialShape, extent: String },
}

impl Default for GradientGeometry {
    fn default() -> Self {
        GradientGeometry::Linear { direction: config::DEFAULT_DIRECTION.to_string() }
    }
}

impl GradientGeometry {
    pub fn linear(direction: impl Into<String>) -> Self {
        GradientGeometry::Linear { direction: direction.into() }
    }

    pub fn radial(shape: RadialShape, extent: impl Into<String>) -> Self {
        GradientGeometry::Radial { shape, extent: extent.into() }
    }

    /// Build the geometry from the editor's raw form fields.
    ///
    /// `gradient_type` is `"linear"` or `"radial"`; anything else is treated
    /// as linear. An unknown `shape` falls back to the default shape. Fields
    /// that do not apply to the selected type are ignored.
    pub fn from_form(gradient_type: &str, direction: &str, shape: &str, extent: &str) -> Self {
        if gradient_type.trim().eq_ignore_ascii_case("radial") {
            let shape = RadialShape::from_name(shape).unwrap_or_else(|| {
                log::debug!("unknown radial shape {:?}, using {}", shape, config::DEFAULT_SHAPE);
                config::DEFAULT_SHAPE
            });
            Self::radial(shape, extent)
        } else {
            Self::linear(direction)
        }
    }

    /// CSS function name for this gradient type.
    pub fn function_name(&self) -> &'static str {
        match self {
            GradientGeometry::Linear { .. } => "linear-gradient",
            GradientGeometry::Radial { .. } => "radial-gradient",
        }
    }
}
