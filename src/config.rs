//! Editor defaults: the form state the UI starts from.
//!
//! The engine has no file or environment configuration; these values seed
//! the stop list, the geometry controls, and the palette size slider.

use crate::gradient::{GradientGeometry, RadialShape};
use crate::sampler::SampleCount;

/// Stops shown when the editor first opens.
pub const INITIAL_STOPS: [&str; 2] = ["#FF0000", "#0000FF"];

/// Color appended by the "Add Color" action.
pub const NEW_STOP_COLOR: &str = "#CCCCCC";

/// Default linear direction.
pub const DEFAULT_DIRECTION: &str = "90deg";

/// Default radial sizing keyword.
pub const DEFAULT_EXTENT: &str = "farthest-corner";

/// Default radial shape.
pub const DEFAULT_SHAPE: RadialShape = RadialShape::Ellipse;

/// Default number of swatches in the stepped palette.
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// Full editor configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Initial stop list (raw text)
    pub initial_stops: Vec<String>,
    /// Color used when a stop is appended without an explicit value
    pub new_stop_color: String,
    /// Initial gradient geometry
    pub geometry: GradientGeometry,
    /// Shape preselected when the user switches to a radial gradient
    pub radial_shape: RadialShape,
    /// Extent preselected when the user switches to a radial gradient
    pub radial_extent: String,
    /// Initial stepped palette size
    pub sample_count: SampleCount,
}

impl EditorConfig {
    /// Linear direction to show in the direction field.
    pub fn direction(&self) -> &str {
        match &self.geometry {
            GradientGeometry::Linear { direction } => direction,
            GradientGeometry::Radial { .. } => DEFAULT_DIRECTION,
        }
    }

    /// `"linear"` or `"radial"`, matching the type dropdown values.
    pub fn gradient_type(&self) -> &'static str {
        match self.geometry {
            GradientGeometry::Linear { .. } => "linear",
            GradientGeometry::Radial { .. } => "radial",
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_stops: INITIAL_STOPS.iter().map(|s| s.to_string()).collect(),
            new_stop_color: NEW_STOP_COLOR.to_string(),
            geometry: GradientGeometry::default(),
            radial_shape: DEFAULT_SHAPE,
            radial_extent: DEFAULT_EXTENT.to_string(),
            sample_count: SampleCount::default(),
        }
    }
}
