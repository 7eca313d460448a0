//! Figure configuration
//!
//! Labels, canvas size, legend placement and the x tick label budget.

use crate::error::{PlotError, PlotResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use terminal_size::{terminal_size, Height, Width};

/// Canvas size used when the terminal cannot report one
pub const FALLBACK_SIZE: (usize, usize) = (80, 24);

/// Rows left free below the figure for the shell prompt
const PROMPT_ROWS: usize = 1;

/// Corner of the plot area the legend box is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendLoc {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LegendLoc {
    pub fn is_top(self) -> bool {
        matches!(self, LegendLoc::TopLeft | LegendLoc::TopRight)
    }

    pub fn is_right(self) -> bool {
        matches!(self, LegendLoc::TopRight | LegendLoc::BottomRight)
    }
}

impl FromStr for LegendLoc {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topleft" => Ok(LegendLoc::TopLeft),
            "topright" => Ok(LegendLoc::TopRight),
            "bottomleft" => Ok(LegendLoc::BottomLeft),
            "bottomright" => Ok(LegendLoc::BottomRight),
            other => Err(PlotError::Configuration(format!(
                "invalid legend location {:?}, expected topleft, topright, bottomleft or bottomright",
                other
            ))),
        }
    }
}

impl fmt::Display for LegendLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LegendLoc::TopLeft => "topleft",
            LegendLoc::TopRight => "topright",
            LegendLoc::BottomLeft => "bottomleft",
            LegendLoc::BottomRight => "bottomright",
        })
    }
}

/// Figure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Label under the x axis
    pub xlabel: Option<String>,
    /// Label drawn vertically left of the y axis
    pub ylabel: Option<String>,
    /// Title centered on the top row
    pub title: Option<String>,
    /// Canvas width in columns; terminal width when unset
    pub width: Option<usize>,
    /// Canvas height in rows; terminal height when unset
    pub height: Option<usize>,
    /// Legend corner
    #[serde(rename = "legendloc")]
    pub legend_loc: LegendLoc,
    /// Columns budgeted per x tick label; bounds the number of x ticks
    pub xticklabel_length: usize,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            xlabel: None,
            ylabel: None,
            title: None,
            width: None,
            height: None,
            legend_loc: LegendLoc::default(),
            xticklabel_length: 7,
        }
    }
}

impl FigureConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x axis label
    pub fn with_xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = Some(label.into());
        self
    }

    /// Set the y axis label
    pub fn with_ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = Some(label.into());
        self
    }

    /// Set an explicit canvas size
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the legend corner
    pub fn with_legend_loc(mut self, loc: LegendLoc) -> Self {
        self.legend_loc = loc;
        self
    }

    /// Set the x tick label budget
    pub fn with_xticklabel_length(mut self, length: usize) -> Self {
        self.xticklabel_length = length;
        self
    }

    /// Check the configured values
    pub fn validate(&self) -> PlotResult<()> {
        if self.width == Some(0) {
            return Err(PlotError::Configuration("width must be positive".to_string()));
        }
        if self.height == Some(0) {
            return Err(PlotError::Configuration("height must be positive".to_string()));
        }
        if self.xticklabel_length < 1 {
            return Err(PlotError::Configuration(
                "xticklabel_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Canvas `(width, height)`, filling unset dimensions from the terminal
    pub fn resolve_size(&self) -> (usize, usize) {
        if let (Some(width), Some(height)) = (self.width, self.height) {
            return (width, height);
        }

        let (term_width, term_height) = terminal_dimensions();
        let term_height = term_height.saturating_sub(PROMPT_ROWS).max(1);
        (
            self.width.unwrap_or(term_width),
            self.height.unwrap_or(term_height),
        )
    }
}

/// Terminal `(columns, rows)`, or the fallback size
fn terminal_dimensions() -> (usize, usize) {
    match terminal_size() {
        Some((Width(w), Height(h))) if w > 0 && h > 0 => (w as usize, h as usize),
        _ => {
            tracing::debug!(
                target: "tplot::config",
                "terminal size unavailable, falling back to {}x{}",
                FALLBACK_SIZE.0,
                FALLBACK_SIZE.1
            );
            FALLBACK_SIZE
        }
    }
}
