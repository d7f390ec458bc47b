//! CSS gradient description: structural assembly of the stop text.
//!
//! Stop text is not validated or normalized here: whatever the user typed,
//! including a half-finished value, is carried into the output as-is.

use super::GradientGeometry;
use crate::stops::ColorStopSet;

/// Separator between stops (and between the geometry prelude and the stops).
const STOP_SEPARATOR: &str = ", ";

/// Radial anchor point; not configurable.
const RADIAL_POSITION: &str = "center";

/// Build the `linear-gradient(...)` / `radial-gradient(...)` string.
pub fn describe(stops: &ColorStopSet, geometry: &GradientGeometry) -> String {
    let prelude = match geometry {
        GradientGeometry::Linear { direction } => direction.clone(),
        GradientGeometry::Radial { shape, extent } => {
            format!("{} {} at {}", shape, extent, RADIAL_POSITION)
        }
    };

    let mut out = String::with_capacity(
        geometry.function_name().len()
            + prelude.len()
            + stops.iter().map(|s| s.raw().len() + STOP_SEPARATOR.len()).sum::<usize>()
            + 2,
    );
    out.push_str(geometry.function_name());
    out.push('(');
    out.push_str(&prelude);
    for stop in stops {
        out.push_str(STOP_SEPARATOR);
        out.push_str(stop.raw());
    }
    out.push(')');

    log::trace!("described gradient: {}", out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::RadialShape;

    fn red_blue() -> ColorStopSet {
        ColorStopSet::from_raw(["#FF0000", "#0000FF"])
    }

    #[test]
    fn test_linear() {
        let css = describe(&red_blue(), &GradientGeometry::linear("90deg"));
        assert_eq!(css, "linear-gradient(90deg, #FF0000, #0000FF)");
    }

    #[test]
    fn test_radial() {
        let css = describe(
            &red_blue(),
            &GradientGeometry::radial(RadialShape::Ellipse, "farthest-corner"),
        );
        assert_eq!(css, "radial-gradient(ellipse farthest-corner at center, #FF0000, #0000FF)");
    }

    #[test]
    fn test_radial_circle() {
        let stops = ColorStopSet::from_raw(["rgb(0, 0, 0)", "hsl(0, 0%, 100%)"]);
        let css = describe(&stops, &GradientGeometry::radial(RadialShape::Circle, "closest-side"));
        assert_eq!(
            css,
            "radial-gradient(circle closest-side at center, rgb(0, 0, 0), hsl(0, 0%, 100%))"
        );
    }

    #[test]
    fn test_invalid_stops_pass_through() {
        let stops = ColorStopSet::from_raw(["not-a-color", "#0000FF"]);
        let css = describe(&stops, &GradientGeometry::linear("90deg"));
        assert_eq!(css, "linear-gradient(90deg, not-a-color, #0000FF)");
    }

    #[test]
    fn test_raw_text_not_normalized() {
        let stops = ColorStopSet::from_raw(["#ff0000", "#FF0000", "#f00"]);
        let css = describe(&stops, &GradientGeometry::linear("to bottom left"));
        assert_eq!(css, "linear-gradient(to bottom left, #ff0000, #FF0000, #f00)");
    }

    #[test]
    fn test_single_and_empty_sets() {
        let one = ColorStopSet::from_raw(["#00FF00"]);
        assert_eq!(
            describe(&one, &GradientGeometry::linear("90deg")),
            "linear-gradient(90deg, #00FF00)"
        );
        let none = ColorStopSet::new(Vec::new());
        assert_eq!(describe(&none, &GradientGeometry::linear("90deg")), "linear-gradient(90deg)");
    }

    #[test]
    fn test_deterministic() {
        let stops = ColorStopSet::from_raw(["#FF0000", "#FF0000", "#0000FF"]);
        let geometry = GradientGeometry::radial(RadialShape::Circle, "50px");
        assert_eq!(describe(&stops, &geometry), describe(&stops, &geometry));
    }
}
