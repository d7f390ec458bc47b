/// Perceptual color points in OkLCh and the interpolation between them.
///
/// Interpolating lightness, chroma and hue (rather than sRGB channels)
/// keeps intermediate tones from collapsing into gray. Hue is an angle,
/// so it is mixed along the shorter arc of the wheel.

use palette::{FromColor, Oklch, Srgb};

use crate::math::utils;
use crate::stops::Rgba;

/// Chroma below which a color is treated as gray and its hue as undefined.
const ACHROMATIC_CHROMA: f64 = 2e-3;

/// A color in OkLCh plus straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerceptualPoint {
    /// Perceptual lightness, 0 (black) to 1 (white)
    pub l: f64,
    /// Chroma, 0 for grays
    pub c: f64,
    /// Hue angle in degrees, [0, 360)
    pub h: f64,
    /// Straight alpha in [0, 1]
    pub alpha: f64,
}

impl PerceptualPoint {
    pub fn from_rgba(color: Rgba) -> Self {
        let lch: Oklch<f64> = Oklch::from_color(Srgb::new(color.r, color.g, color.b));
        Self {
            l: lch.l,
            c: lch.chroma.max(0.0),
            h: utils::normalize_degrees(lch.hue.into_positive_degrees()),
            alpha: color.a,
        }
    }

    /// Convert back to sRGB, clamping anything outside the sRGB gamut.
    pub fn to_rgba(self) -> Rgba {
        let rgb: Srgb<f64> = Srgb::from_color(Oklch::new(self.l, self.c, self.h));
        Rgba::new(rgb.red, rgb.green, rgb.blue, self.alpha)
    }

    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.c < ACHROMATIC_CHROMA
    }

    /// Mix toward `other` by `t` in [0, 1].
    ///
    /// A gray endpoint borrows the hue of the other endpoint so the mix
    /// only changes lightness and chroma instead of sweeping through hues.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let (h0, h1) = match (self.is_achromatic(), other.is_achromatic()) {
            (true, false) => (other.h, other.h),
            (false, true) => (self.h, self.h),
            _ => (self.h, other.h),
        };
        Self {
            l: utils::lerp(self.l, other.l, t),
            c: utils::lerp(self.c, other.c, t),
            h: utils::lerp_hue(h0, h1, t),
            alpha: utils::lerp(self.alpha, other.alpha, t),
        }
    }
}

/// Piecewise interpolation over stops placed uniformly on [0, 1].
///
/// Stop `i` of `k` sits at `i / (k - 1)`.
#[derive(Clone, Debug)]
pub struct PerceptualGradient {
    points: Vec<PerceptualPoint>,
}

impl PerceptualGradient {
    pub fn new(points: Vec<PerceptualPoint>) -> Self {
        Self { points }
    }

    /// Sample the gradient at position t (clamped to [0, 1]).
    ///
    /// Returns `None` for a gradient without points.
    pub fn at(&self, t: f64) -> Option<PerceptualPoint> {
        let t = utils::clamp(t, 0.0, 1.0);
        match self.points.len() {
            0 => None,
            1 => Some(self.points[0]),
            len => {
                let segments = len - 1;
                let scaled = t * segments as f64;
                let segment = (scaled.floor() as usize).min(segments - 1);
                let local = scaled - segment as f64;
                Some(self.points[segment].mix(self.points[segment + 1], local))
            }
        }
    }
}
