//! Figures
//!
//! A [`Figure`] collects plots and draws them onto one character grid.
//! Plots are recorded at registration and drawn only at render time, once
//! the axes can be fit to every registered value.

use crate::config::FigureConfig;
use crate::error::{PlotError, PlotResult};
use crate::layout::FigureLayout;
use crate::model::{LegendEntry, PlotEntry, PlotKind, PlotStyle, Value};
use crate::render::FigureRenderer;
use std::fmt;
use std::io::Write;

/// A figure that renders scatter, line and bar plots as text.
///
/// ```
/// use tplot::{Figure, FigureConfig, PlotStyle};
///
/// let mut fig = Figure::new(FigureConfig::new().with_size(40, 12)).unwrap();
/// fig.line([1, 2, 3, 4], [1, 4, 9, 16], PlotStyle::new().with_label("squares"))
///     .unwrap();
/// let text = fig.render().unwrap();
/// assert_eq!(text.lines().count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    config: FigureConfig,
    width: usize,
    height: usize,
    plots: Vec<PlotEntry>,
    legend: Vec<LegendEntry>,
}

impl Figure {
    /// Create a figure, resolving unset dimensions from the terminal
    pub fn new(config: FigureConfig) -> PlotResult<Self> {
        config.validate()?;
        let (width, height) = config.resolve_size();
        Ok(Self {
            config,
            width,
            height,
            plots: Vec::new(),
            legend: Vec::new(),
        })
    }

    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Canvas `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Registered plots, in registration order
    pub fn plots(&self) -> &[PlotEntry] {
        &self.plots
    }

    /// Legend entries, in registration order
    pub fn legend_entries(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Register a plot of `kind`.
    ///
    /// Fails without changing the figure if `x` and `y` differ in length or
    /// the marker is empty.
    pub fn add<X, Y>(&mut self, kind: PlotKind, x: X, y: Y, style: PlotStyle) -> PlotResult<()>
    where
        X: IntoIterator,
        X::Item: Into<Value>,
        Y: IntoIterator,
        Y::Item: Into<Value>,
    {
        let x: Vec<Value> = x.into_iter().map(Into::into).collect();
        let y: Vec<Value> = y.into_iter().map(Into::into).collect();
        if x.len() != y.len() {
            return Err(PlotError::MismatchedLength {
                x: x.len(),
                y: y.len(),
            });
        }
        let marker = style.marker_char(kind)?;

        if let Some(label) = &style.label {
            self.legend.push(LegendEntry {
                marker,
                label: label.clone(),
            });
        }
        tracing::debug!(
            target: "tplot::figure",
            kind = ?kind,
            points = x.len(),
            %marker,
            "plot registered"
        );
        self.plots.push(PlotEntry {
            kind,
            x,
            y,
            marker,
            label: style.label,
        });
        Ok(())
    }

    /// Register a scatter plot (default marker `o`)
    pub fn scatter<X, Y>(&mut self, x: X, y: Y, style: PlotStyle) -> PlotResult<()>
    where
        X: IntoIterator,
        X::Item: Into<Value>,
        Y: IntoIterator,
        Y::Item: Into<Value>,
    {
        self.add(PlotKind::Scatter, x, y, style)
    }

    /// Register a line plot (default marker `*`)
    pub fn line<X, Y>(&mut self, x: X, y: Y, style: PlotStyle) -> PlotResult<()>
    where
        X: IntoIterator,
        X::Item: Into<Value>,
        Y: IntoIterator,
        Y::Item: Into<Value>,
    {
        self.add(PlotKind::Line, x, y, style)
    }

    /// Register a vertical bar plot (default marker `#`)
    pub fn bar<X, Y>(&mut self, x: X, y: Y, style: PlotStyle) -> PlotResult<()>
    where
        X: IntoIterator,
        X::Item: Into<Value>,
        Y: IntoIterator,
        Y::Item: Into<Value>,
    {
        self.add(PlotKind::Bar, x, y, style)
    }

    /// Register a horizontal bar plot (default marker `#`)
    pub fn hbar<X, Y>(&mut self, x: X, y: Y, style: PlotStyle) -> PlotResult<()>
    where
        X: IntoIterator,
        X::Item: Into<Value>,
        Y: IntoIterator,
        Y::Item: Into<Value>,
    {
        self.add(PlotKind::HBar, x, y, style)
    }

    /// Compute the layout of the current registrations
    pub fn layout(&self) -> PlotResult<FigureLayout> {
        FigureLayout::calculate(&self.config, self.width, self.height, &self.plots)
    }

    /// Draw every registered plot and return the grid, one line per row.
    ///
    /// Scales and ticks are recomputed from the current registrations on
    /// every call, so unchanged registrations give identical output.
    pub fn render(&self) -> PlotResult<String> {
        tracing::debug!(
            target: "tplot::figure",
            width = self.width,
            height = self.height,
            plots = self.plots.len(),
            "render started"
        );
        let layout = self.layout()?;
        let canvas = FigureRenderer::new(&self.config, &layout).render(&self.plots, &self.legend)?;
        tracing::debug!(target: "tplot::figure", "render finished");
        Ok(canvas.to_string())
    }

    /// Render and write the figure to stdout
    pub fn show(&self) -> PlotResult<()> {
        let text = self.render()?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()?;
        Ok(())
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|err| {
            tracing::error!(target: "tplot::figure", error = %err, "render failed");
            fmt::Error
        })?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(width: usize, height: usize) -> Figure {
        Figure::new(FigureConfig::new().with_size(width, height)).unwrap()
    }

    #[test]
    fn test_new_validates_config() {
        let result = Figure::new(FigureConfig::new().with_size(0, 10));
        assert!(matches!(result, Err(PlotError::Configuration(_))));
    }

    #[test]
    fn test_registration_records_entries() {
        let mut fig = figure(40, 12);
        fig.scatter([1, 2], [3, 4], PlotStyle::new()).unwrap();
        fig.line([1, 2], [3, 4], PlotStyle::new().with_label("l")).unwrap();
        fig.bar(["a", "b"], [1.5, 2.5], PlotStyle::new().with_marker("=x"))
            .unwrap();

        let kinds: Vec<_> = fig.plots().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PlotKind::Scatter, PlotKind::Line, PlotKind::Bar]);
        assert_eq!(fig.plots()[0].marker, 'o');
        assert_eq!(fig.plots()[2].marker, '=');
        assert_eq!(
            fig.legend_entries(),
            &[LegendEntry {
                marker: '*',
                label: "l".to_string()
            }]
        );
    }

    #[test]
    fn test_mismatched_lengths_leave_figure_unchanged() {
        let mut fig = figure(40, 12);
        let result = fig.scatter([1, 2], [1, 2, 3], PlotStyle::new().with_label("bad"));
        assert!(matches!(
            result,
            Err(PlotError::MismatchedLength { x: 2, y: 3 })
        ));
        assert!(fig.plots().is_empty());
        assert!(fig.legend_entries().is_empty());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let mut fig = figure(40, 12);
        let result = fig.hbar([1], [1], PlotStyle::new().with_marker(""));
        assert!(matches!(result, Err(PlotError::Configuration(_))));
        assert!(fig.plots().is_empty());
    }

    #[test]
    fn test_render_without_plots() {
        let fig = figure(40, 12);
        assert!(matches!(fig.render(), Err(PlotError::EmptyData)));
    }

    #[test]
    fn test_display_matches_render() {
        let mut fig = figure(30, 8);
        fig.scatter([1, 2, 3], [3, 1, 2], PlotStyle::new()).unwrap();
        assert_eq!(fig.to_string(), fig.render().unwrap());
    }
}
