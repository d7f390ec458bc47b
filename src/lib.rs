//! Gradient Maker engine.
//!
//! Pure functions behind the gradient editor: stop validation, CSS gradient
//! description, and perceptual stepped-palette sampling. The UI calls these
//! on every edit and renders whatever comes back.

use js_sys::Array;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod gradient;
pub mod logging;
pub mod math;
pub mod sampler;
pub mod stops;

pub use error::{InterpolationError, StopIndexError};
pub use gradient::{GradientGeometry, RadialShape};
pub use sampler::{SampleCount, SteppedPalette};
pub use stops::{ColorSpecifier, ColorStopSet, Notation};

/// Initialize the WASM module (runs once when JS instantiates it).
#[wasm_bindgen(start)]
pub fn init() {
    logging::init_logging(logging::LoggingConfig::default());
}

/// Whether `raw` is a recognized hex, `rgb()`/`rgba()` or `hsl()`/`hsla()` color.
#[wasm_bindgen]
pub fn validate_color(raw: &str) -> bool {
    ColorStopSet::validate(&ColorSpecifier::new(raw))
}

/// Build the CSS gradient string from the editor form state.
///
/// `stops`: Array of raw stop strings; non-string entries become empty stops
/// `gradient_type`: "linear" or "radial"
/// `direction`: linear direction, used when `gradient_type` is linear
/// `radial_shape` / `radial_extent`: used when `gradient_type` is radial
///
/// Never fails: invalid stops are carried through verbatim.
#[wasm_bindgen]
pub fn describe_gradient(
    stops: &Array,
    gradient_type: &str,
    direction: &str,
    radial_shape: &str,
    radial_extent: &str,
) -> String {
    let stops = stops_from_array(stops);
    let geometry = GradientGeometry::from_form(gradient_type, direction, radial_shape, radial_extent);
    gradient::describe(&stops, &geometry)
}

/// Sample `n` evenly spaced colors along the perceptual interpolation of `stops`.
///
/// Returns an Array of lowercase hex strings. Throws when any stop is invalid,
/// the set is empty, or `n` is outside [2, 24]; the caller keeps its previous
/// palette in that case.
#[wasm_bindgen]
pub fn sample_steps(stops: &Array, n: u32) -> Result<Array, JsError> {
    let count = SampleCount::new(n as usize)?;
    let stops = stops_from_array(stops);
    let palette = sampler::sample(&stops, count)?;
    Ok(palette.into_iter().map(JsValue::from).collect())
}

/// Stops the editor opens with.
#[wasm_bindgen]
pub fn default_stops() -> Array {
    config::EditorConfig::default().initial_stops.into_iter().map(JsValue::from).collect()
}

/// Color appended by "Add Color".
#[wasm_bindgen]
pub fn new_stop_color() -> String {
    config::EditorConfig::default().new_stop_color
}

/// Gradient type preselected in the type dropdown.
#[wasm_bindgen]
pub fn default_gradient_type() -> String {
    config::EditorConfig::default().gradient_type().to_string()
}

/// Initial linear direction.
#[wasm_bindgen]
pub fn default_direction() -> String {
    config::EditorConfig::default().direction().to_string()
}

/// Initial radial shape name.
#[wasm_bindgen]
pub fn default_radial_shape() -> String {
    config::EditorConfig::default().radial_shape.as_str().to_string()
}

/// Initial radial extent.
#[wasm_bindgen]
pub fn default_radial_extent() -> String {
    config::EditorConfig::default().radial_extent
}

/// Initial palette size.
#[wasm_bindgen]
pub fn default_sample_count() -> u32 {
    config::EditorConfig::default().sample_count.get() as u32
}

/// Lower bound of the palette size slider.
#[wasm_bindgen]
pub fn min_sample_count() -> u32 {
    SampleCount::MIN as u32
}

/// Upper bound of the palette size slider.
#[wasm_bindgen]
pub fn max_sample_count() -> u32 {
    SampleCount::MAX as u32
}

/// Read a JS Array into a stop set.
fn stops_from_array(stops: &Array) -> ColorStopSet {
    stops
        .iter()
        .map(|value| ColorSpecifier::new(value.as_string().unwrap_or_default()))
        .collect()
}
