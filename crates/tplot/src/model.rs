//! Plot model types
//!
//! This module defines the data values a plot accepts, the domain an axis
//! spans, and the immutable plot and legend entries a figure records at
//! registration time.

use crate::error::{PlotError, PlotResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single data value supplied to an axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value
    Number(f64),
    /// A categorical label
    Label(String),
}

impl Value {
    /// The numeric value, if this is a finite number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// The value as a categorical label
    pub fn to_label(&self) -> String {
        match self {
            Value::Number(n) => n.to_string(),
            Value::Label(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Label(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Number(v as f64)
                }
            }

            impl From<&$ty> for Value {
                fn from(v: &$ty) -> Self {
                    Value::Number(*v as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Label(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Label(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Label(s.clone())
    }
}

/// Whether every value is a finite number.
///
/// Classification covers the whole collection: a single label makes the
/// axis categorical.
pub fn is_numeric(values: &[Value]) -> bool {
    values.iter().all(|v| v.as_number().is_some())
}

/// The range or set of values an axis represents
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    /// Closed numeric interval, `min <= max`
    Numeric { min: f64, max: f64 },
    /// Distinct labels in first-occurrence order
    Categorical(Vec<String>),
}

impl Domain {
    /// Classify `values` and compute their domain
    pub fn from_values(values: &[Value]) -> PlotResult<Self> {
        if values.is_empty() {
            return Err(PlotError::EmptyData);
        }

        if is_numeric(values) {
            let (min, max) = values
                .iter()
                .filter_map(Value::as_number)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
            return Ok(Domain::Numeric { min, max });
        }

        let mut labels: Vec<String> = Vec::new();
        for value in values {
            let label = value.to_label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        Ok(Domain::Categorical(labels))
    }

    /// Whether this is a numeric domain
    pub fn is_numeric(&self) -> bool {
        matches!(self, Domain::Numeric { .. })
    }
}

/// The kind of plot primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    /// Unconnected markers
    Scatter,
    /// Markers joined by rasterized segments
    Line,
    /// Vertical bars anchored at the series minimum
    Bar,
    /// Horizontal bars anchored at the series minimum
    HBar,
}

impl PlotKind {
    /// Marker used when the style does not set one
    pub fn default_marker(self) -> char {
        match self {
            PlotKind::Scatter => 'o',
            PlotKind::Line => '*',
            PlotKind::Bar | PlotKind::HBar => '#',
        }
    }
}

/// Optional marker and legend label for a plot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Marker string; only its first character is drawn
    pub marker: Option<String>,
    /// Legend label
    pub label: Option<String>,
}

impl PlotStyle {
    /// Create a style with the plot kind's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set the legend label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Resolve the marker character for `kind`
    pub(crate) fn marker_char(&self, kind: PlotKind) -> PlotResult<char> {
        match &self.marker {
            None => Ok(kind.default_marker()),
            Some(marker) => marker
                .chars()
                .next()
                .ok_or_else(|| PlotError::Configuration("marker must not be empty".to_string())),
        }
    }
}

/// A registered plot, captured until draw time
#[derive(Debug, Clone, PartialEq)]
pub struct PlotEntry {
    /// Which primitive draws this entry
    pub kind: PlotKind,
    /// x values
    pub x: Vec<Value>,
    /// y values, same length as `x`
    pub y: Vec<Value>,
    /// Marker character
    pub marker: char,
    /// Legend label, if any
    pub label: Option<String>,
}

/// One line of the legend box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub marker: char,
    pub label: String,
}

impl LegendEntry {
    /// The text drawn inside the legend box
    pub fn text(&self) -> String {
        format!("{} {}", self.marker, self.label)
    }
}
