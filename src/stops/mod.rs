//! Color stop list: the ordered stops the user is editing.
//!
//! Stops are kept as raw text so half-typed values survive in the editor;
//! validity is recomputed from the text every time it is asked for.
//! Mutations return a new set and never touch the receiver.

pub mod notation;

use std::fmt;

use crate::config;
use crate::error::StopIndexError;

pub use notation::{Notation, Rgba};

/// A single color stop as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSpecifier {
    raw: String,
}

impl ColorSpecifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Notation family of the stop, or `None` while the text does not parse.
    pub fn notation(&self) -> Option<Notation> {
        notation::parse(&self.raw).map(|(n, _)| n)
    }

    /// Parsed straight sRGBA value, or `None` while the text does not parse.
    pub fn color(&self) -> Option<Rgba> {
        notation::parse(&self.raw).map(|(_, c)| c)
    }

    pub fn is_valid(&self) -> bool {
        notation::parse(&self.raw).is_some()
    }
}

impl From<&str> for ColorSpecifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ColorSpecifier {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for ColorSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Ordered color stops. Order defines both gradient stop order and
/// interpolation order; duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorStopSet {
    stops: Vec<ColorSpecifier>,
}

impl Default for ColorStopSet {
    fn default() -> Self {
        Self::from_raw(config::INITIAL_STOPS)
    }
}

impl ColorStopSet {
    pub fn new(stops: Vec<ColorSpecifier>) -> Self {
        Self { stops }
    }

    /// Build a set from raw strings, e.g. the values of the editor's text fields.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { stops: raw.into_iter().map(ColorSpecifier::new).collect() }
    }

    /// Whether `stop` parses as one of the accepted notations.
    pub fn validate(stop: &ColorSpecifier) -> bool {
        stop.is_valid()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorSpecifier> {
        self.stops.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSpecifier> {
        self.stops.iter()
    }

    /// Raw stop text in order.
    pub fn raw_stops(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.raw()).collect()
    }

    /// Index of the first stop that does not parse, if any.
    pub fn first_invalid(&self) -> Option<usize> {
        self.stops.iter().position(|s| !s.is_valid())
    }

    /// The editor only offers removal while more than one stop remains.
    pub fn can_remove(&self) -> bool {
        self.stops.len() > 1
    }

    pub fn append(&self, stop: ColorSpecifier) -> Self {
        let mut stops = Vec::with_capacity(self.stops.len() + 1);
        stops.extend_from_slice(&self.stops);
        stops.push(stop);
        Self { stops }
    }

    /// Append the editor's "Add Color" default.
    pub fn append_default(&self) -> Self {
        self.append(ColorSpecifier::new(config::NEW_STOP_COLOR))
    }

    pub fn remove_at(&self, index: usize) -> Result<Self, StopIndexError> {
        self.check_index(index)?;
        let stops = self
            .stops
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, s)| s.clone())
            .collect();
        Ok(Self { stops })
    }

    pub fn replace_at(&self, index: usize, stop: ColorSpecifier) -> Result<Self, StopIndexError> {
        self.check_index(index)?;
        let mut stops = self.stops.clone();
        stops[index] = stop;
        Ok(Self { stops })
    }

    fn check_index(&self, index: usize) -> Result<(), StopIndexError> {
        if index < self.stops.len() {
            Ok(())
        } else {
            Err(StopIndexError { index, len: self.stops.len() })
        }
    }
}

impl FromIterator<ColorSpecifier> for ColorStopSet {
    fn from_iter<T: IntoIterator<Item = ColorSpecifier>>(iter: T) -> Self {
        Self { stops: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ColorStopSet {
    type Item = &'a ColorSpecifier;
    type IntoIter = std::slice::Iter<'a, ColorSpecifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
