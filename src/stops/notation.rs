/// Color notation recognition.
///
/// Accepts the three notation families the editor's text fields advertise:
/// hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional RGB
/// (`rgb()` / `rgba()`, numeric or percentage channels) and functional HSL
/// (`hsl()` / `hsla()`). The family is recognized from the text's shape,
/// then the full value is parsed with `csscolorparser`.

use crate::math::utils;

/// Notation family of a color specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    Hex,
    Rgb,
    Hsl,
}

impl Notation {
    /// Detect the notation family from the leading syntax of `raw`.
    ///
    /// This only looks at the prefix; the text may still fail to parse.
    pub fn detect(raw: &str) -> Option<Self> {
        let s = raw.trim();
        if s.starts_with('#') {
            return Some(Notation::Hex);
        }

        let head: String = s.chars().take(5).collect::<String>().to_ascii_lowercase();
        if head.starts_with("rgb(") || head.starts_with("rgba(") {
            Some(Notation::Rgb)
        } else if head.starts_with("hsl(") || head.starts_with("hsla(") {
            Some(Notation::Hsl)
        } else {
            None
        }
    }

}

/// Straight-alpha sRGB color, every channel in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: utils::clamp(r, 0.0, 1.0),
            g: utils::clamp(g, 0.0, 1.0),
            b: utils::clamp(b, 0.0, 1.0),
            a: utils::clamp(a, 0.0, 1.0),
        }
    }

    /// Lowercase hex text: `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let r = utils::float_to_byte(self.r);
        let g = utils::float_to_byte(self.g);
        let b = utils::float_to_byte(self.b);
        let a = utils::float_to_byte(self.a);
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

/// Parse `raw` into a color, or `None` if it is not in an accepted notation.
pub fn parse(raw: &str) -> Option<(Notation, Rgba)> {
    let notation = Notation::detect(raw)?;
    // CSS has no `inf` / `nan` number tokens, but the float parser accepts them.
    if notation != Notation::Hex && has_non_finite_token(raw) {
        return None;
    }

    let color = csscolorparser::parse(raw.trim()).ok()?;
    let channels = [color.r as f64, color.g as f64, color.b as f64, color.a as f64];
    if !channels.iter().all(|c| c.is_finite()) {
        return None;
    }

    let [r, g, b, a] = channels;
    Some((notation, Rgba::new(r, g, b, a)))
}

fn has_non_finite_token(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.contains("inf") || lower.contains("nan")
}
