//! Figure layout calculations
//!
//! Derives everything the draw pipeline needs from the configuration and the
//! registered plots: axis domains, tick sets, fitted scales and the space
//! reserved for the axes. A layout is computed fresh for every render.

use crate::config::FigureConfig;
use crate::error::{PlotError, PlotResult};
use crate::format::format_tick;
use crate::model::{Domain, PlotEntry, Value};
use crate::scale::Scale;
use crate::ticks::best_ticks;

/// Rows of y-axis tick budget per row of canvas
const ROWS_PER_Y_TICK: usize = 2;

/// Columns taken by the vertical y label and its gap
const YLABEL_COLUMNS: usize = 2;

/// Domain, ticks and fitted scale of one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub domain: Domain,
    /// Tick values, ascending for numeric axes, domain order otherwise
    pub ticks: Vec<Value>,
    /// Formatted tick labels, parallel to `ticks`
    pub labels: Vec<String>,
    pub scale: Scale,
}

impl AxisLayout {
    fn new(values: &[Value], most: usize) -> PlotResult<Self> {
        let domain = Domain::from_values(values)?;
        let (ticks, labels) = match &domain {
            Domain::Numeric { min, max } => {
                let ticks = best_ticks(*min, *max, most)?;
                let labels: Vec<String> = ticks.iter().map(|t| format_tick(*t)).collect();
                let ticks: Vec<Value> = ticks.into_iter().map(Value::Number).collect();
                (ticks, labels)
            }
            Domain::Categorical(names) => (
                names.iter().cloned().map(Value::Label).collect(),
                names.clone(),
            ),
        };
        Ok(Self {
            domain,
            ticks,
            labels,
            scale: Scale::new(),
        })
    }

    /// Fit the scale over `[target_min, target_max]`.
    ///
    /// Numeric axes are anchored to their outermost ticks, which may lie just
    /// outside the data, so the extreme ticks land on the ends of the axis.
    fn fit(&mut self, target_min: f64, target_max: f64) {
        let anchor = match (&self.domain, self.ticks.first(), self.ticks.last()) {
            (Domain::Numeric { .. }, Some(Value::Number(lo)), Some(Value::Number(hi))) => {
                Domain::Numeric { min: *lo, max: *hi }
            }
            (domain, _, _) => domain.clone(),
        };
        self.scale.fit(&anchor, target_min, target_max);
    }

    /// Positions of every tick
    pub fn tick_positions(&self) -> PlotResult<Vec<f64>> {
        self.scale.transform_all(&self.ticks)
    }

    /// Longest tick label, in characters
    pub fn widest_label(&self) -> usize {
        self.labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Derived geometry of one render.
///
/// Horizontal positions are canvas columns. Vertical positions count rows
/// upward from the bottom of the canvas; [`FigureLayout::row`] converts them
/// to canvas rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    pub width: usize,
    pub height: usize,
    /// Rows taken by the title
    pub title_rows: usize,
    /// Columns left of the plot area: tick labels, tick column, y label
    pub yax_width: usize,
    /// Rows below the plot area: axis line, tick labels, x label
    pub xax_height: usize,
    pub x: AxisLayout,
    pub y: AxisLayout,
}

impl FigureLayout {
    /// Calculate the layout of `plots` on a `width` x `height` canvas
    pub fn calculate(
        config: &FigureConfig,
        width: usize,
        height: usize,
        plots: &[PlotEntry],
    ) -> PlotResult<Self> {
        if plots.is_empty() {
            return Err(PlotError::EmptyData);
        }

        let xs: Vec<Value> = plots.iter().flat_map(|p| p.x.iter().cloned()).collect();
        let ys: Vec<Value> = plots.iter().flat_map(|p| p.y.iter().cloned()).collect();

        let mut y = AxisLayout::new(&ys, height / ROWS_PER_Y_TICK)?;
        let mut x = AxisLayout::new(&xs, width / config.xticklabel_length.max(1))?;

        let title_rows = usize::from(config.title.is_some());
        let xax_height = 2 + usize::from(config.xlabel.is_some());
        let ylabel_columns = if config.ylabel.is_some() {
            YLABEL_COLUMNS
        } else {
            0
        };
        let yax_width = y.widest_label() + 1 + ylabel_columns;

        if height < xax_height + title_rows + 1 || width < yax_width + 1 {
            return Err(PlotError::Configuration(format!(
                "{}x{} canvas leaves no room for the plot area",
                width, height
            )));
        }

        let y_min = xax_height as f64;
        let y_max = (height - 1 - title_rows) as f64;
        let x_min = yax_width as f64;
        let x_max = (width - 1) as f64;
        y.fit(y_min, y_max);
        x.fit(x_min, x_max);

        if !x.domain.is_numeric() && x.ticks.len() * 2 > width - yax_width {
            tracing::warn!(
                target: "tplot::layout",
                categories = x.ticks.len(),
                columns = width - yax_width,
                "categorical x ticks overflow the axis"
            );
        }
        if !y.domain.is_numeric() && y.ticks.len() > height - xax_height - title_rows {
            tracing::warn!(
                target: "tplot::layout",
                categories = y.ticks.len(),
                rows = height - xax_height - title_rows,
                "categorical y ticks overflow the axis"
            );
        }

        tracing::trace!(
            target: "tplot::layout",
            yax_width,
            xax_height,
            x_ticks = x.ticks.len(),
            y_ticks = y.ticks.len(),
            "layout calculated"
        );

        Ok(Self {
            width,
            height,
            title_rows,
            yax_width,
            xax_height,
            x,
            y,
        })
    }

    /// Canvas row of a vertical position
    pub fn row(&self, position: f64) -> i64 {
        self.height as i64 - 1 - position.round() as i64
    }

    /// Canvas column of a horizontal position
    pub fn col(&self, position: f64) -> i64 {
        position.round() as i64
    }

    /// Canvas row of the x axis line
    pub fn axis_row(&self) -> usize {
        self.height - self.xax_height
    }

    /// Canvas column of the y axis line
    pub fn axis_col(&self) -> usize {
        self.yax_width - 1
    }
}
