//! Stepped palette sampling.
//!
//! Converts the stop set into OkLCh, interpolates piecewise between
//! consecutive stops, and reads `n` evenly spaced colors from 0 to 1
//! inclusive. Output colors are lowercase hex strings.

pub mod perceptual;

use crate::config;
use crate::error::InterpolationError;
use crate::stops::ColorStopSet;

pub use perceptual::{PerceptualGradient, PerceptualPoint};

/// Discrete colors sampled along a gradient, in order.
pub type SteppedPalette = Vec<String>;

/// Number of palette swatches, always within [`SampleCount::MIN`, `SampleCount::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleCount(usize);

impl SampleCount {
    pub const MIN: usize = 2;
    pub const MAX: usize = 24;

    /// Out-of-range counts are rejected, not clamped.
    pub fn new(n: usize) -> Result<Self, InterpolationError> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(InterpolationError::SampleCountOutOfRange {
                requested: n,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        Self(config::DEFAULT_SAMPLE_COUNT)
    }
}

impl TryFrom<usize> for SampleCount {
    type Error = InterpolationError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

/// Convert every stop into the perceptual space.
///
/// Fails on an empty set or on the first stop that does not parse.
pub fn perceptual_gradient(stops: &ColorStopSet) -> Result<PerceptualGradient, InterpolationError> {
    if stops.is_empty() {
        return Err(InterpolationError::EmptyStops);
    }
    if let Some(index) = stops.first_invalid() {
        let raw = stops.get(index).map(|s| s.raw().to_string()).unwrap_or_default();
        return Err(InterpolationError::InvalidStop { index, raw });
    }

    let points = stops
        .iter()
        .filter_map(|stop| stop.color())
        .map(PerceptualPoint::from_rgba)
        .collect();

    Ok(PerceptualGradient::new(points))
}

/// Perceptual points at `n` evenly spaced positions, before conversion to text.
pub fn sample_points(
    stops: &ColorStopSet,
    n: SampleCount,
) -> Result<Vec<PerceptualPoint>, InterpolationError> {
    let gradient = perceptual_gradient(stops)?;
    let last = (n.get() - 1) as f64;

    // every position yields a point; a gradient without points is an error
    (0..n.get())
        .map(|i| gradient.at(i as f64 / last).ok_or(InterpolationError::EmptyStops))
        .collect()
}

/// Sample `n` colors along the perceptual interpolation of `stops`.
///
/// A single stop yields `n` copies of that stop's color.
pub fn sample(stops: &ColorStopSet, n: SampleCount) -> Result<SteppedPalette, InterpolationError> {
    let palette: SteppedPalette = sample_points(stops, n)
        .inspect_err(|err| log::debug!("palette sampling failed: {}", err))?
        .into_iter()
        .map(|point| point.to_rgba().to_hex())
        .collect();

    log::trace!("sampled {} colors from {} stops", palette.len(), stops.len());
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils;
    use crate::stops::notation;
    use palette::{FromColor, Hsl, Srgb};

    fn stops(raw: &[&str]) -> ColorStopSet {
        ColorStopSet::from_raw(raw.iter().copied())
    }

    fn count(n: usize) -> SampleCount {
        SampleCount::new(n).unwrap()
    }

    fn hsl_hue(hex: &str) -> f64 {
        let (_, c) = notation::parse(hex).unwrap();
        let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(Srgb::new(c.r, c.g, c.b));
        hsl.hue.into_positive_degrees()
    }

    #[test]
    fn test_sample_count_bounds() {
        assert!(SampleCount::new(1).is_err());
        assert!(SampleCount::new(25).is_err());
        assert_eq!(SampleCount::new(2).unwrap().get(), 2);
        assert_eq!(SampleCount::new(24).unwrap().get(), 24);
        assert_eq!(
            SampleCount::try_from(0),
            Err(InterpolationError::SampleCountOutOfRange { requested: 0, min: 2, max: 24 })
        );
    }

    #[test]
    fn test_red_to_blue_five_steps() {
        let palette = sample(&stops(&["#FF0000", "#0000FF"]), count(5)).unwrap();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette[0], "#ff0000");
        assert_eq!(palette[4], "#0000ff");
    }

    #[test]
    fn test_red_to_blue_transitions_monotonically() {
        let points = sample_points(&stops(&["#FF0000", "#0000FF"]), count(5)).unwrap();

        for pair in points.windows(2) {
            // lightness falls from red (≈0.63) to blue (≈0.45) without reversing
            assert!(pair[1].l <= pair[0].l + 1e-12);
        }

        let start = points[0].h;
        let mut previous = 0.0;
        for p in &points[1..] {
            let travelled = utils::hue_delta(start, p.h);
            assert!(travelled.abs() >= previous - 1e-9, "hue reversed at {:?}", p);
            assert!(travelled.abs() <= 180.0);
            previous = travelled.abs();
        }
    }

    #[test]
    fn test_endpoints_match_stops_for_every_count() {
        let sets = [
            vec!["#FF0000", "#0000FF"],
            vec!["hsl(40, 80%, 60%)", "rgb(10, 200, 90)", "#123456"],
            vec!["#000", "#fff", "#000", "#ff00ff"],
        ];
        for raw in &sets {
            let set = stops(raw);
            let first = set.get(0).unwrap().color().unwrap().to_hex();
            let last = set.get(set.len() - 1).unwrap().color().unwrap().to_hex();
            for n in SampleCount::MIN..=SampleCount::MAX {
                let palette = sample(&set, count(n)).unwrap();
                assert_eq!(palette.len(), n);
                assert_eq!(palette[0], first, "first color for {:?} n={}", raw, n);
                assert_eq!(palette[n - 1], last, "last color for {:?} n={}", raw, n);
            }
        }
    }

    #[test]
    fn test_interior_stops_land_on_exact_positions() {
        let palette = sample(&stops(&["#FF0000", "#00FF00", "#0000FF"]), count(5)).unwrap();
        assert_eq!(palette[2], "#00ff00");
    }

    #[test]
    fn test_hue_wraps_through_zero() {
        // magenta sits near 328 degrees in OkLCh, red near 29
        let points = sample_points(&stops(&["#FF00FF", "#FF0000"]), count(3)).unwrap();
        assert!(points[0].h > 300.0 && points[2].h < 60.0);

        let mid = points[1].h;
        let distance_from_zero = mid.min(360.0 - mid);
        assert!(distance_from_zero < 5.0, "midpoint hue was {mid}");

        // the short arc goes through pinks; the long one would land on cyan
        let hue = hsl_hue(&sample(&stops(&["#FF00FF", "#FF0000"]), count(3)).unwrap()[1]);
        assert!(hue > 270.0 || hue < 30.0, "midpoint hsl hue was {hue}");
    }

    #[test]
    fn test_near_gray_stop_does_not_sweep_hue() {
        let points = sample_points(&stops(&["#808081", "#FF0000"]), count(5)).unwrap();
        let red_hue = points[4].h;
        for p in &points[1..4] {
            assert!(utils::hue_delta(red_hue, p.h).abs() < 1e-6, "hue drifted to {}", p.h);
        }
    }

    #[test]
    fn test_duplicate_stops_hold_color() {
        let palette = sample(&stops(&["#336699", "#336699"]), count(4)).unwrap();
        assert!(palette.iter().all(|c| c == "#336699"));
    }

    #[test]
    fn test_single_stop_repeats() {
        let palette = sample(&stops(&["#00FF00"]), count(6)).unwrap();
        assert_eq!(palette, vec!["#00ff00"; 6]);
    }

    #[test]
    fn test_alpha_is_interpolated() {
        let palette = sample(&stops(&["rgba(0, 0, 0, 1)", "rgba(0, 0, 0, 0)"]), count(3)).unwrap();
        assert_eq!(palette[0], "#000000");
        assert_eq!(palette[1], "#00000080");
        assert_eq!(palette[2], "#00000000");
    }

    #[test]
    fn test_invalid_stop_fails() {
        let err = sample(&stops(&["not-a-color", "#0000FF"]), count(5)).unwrap_err();
        assert_eq!(err, InterpolationError::InvalidStop { index: 0, raw: "not-a-color".into() });

        let err = sample(&stops(&["#FF0000", "#00F", "#12"]), count(5)).unwrap_err();
        assert_eq!(err, InterpolationError::InvalidStop { index: 2, raw: "#12".into() });
    }

    #[test]
    fn test_empty_fails() {
        let err = sample(&ColorStopSet::new(Vec::new()), count(5)).unwrap_err();
        assert_eq!(err, InterpolationError::EmptyStops);
    }
}
