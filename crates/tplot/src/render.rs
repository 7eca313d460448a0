//! Figure rendering
//!
//! Draws a calculated [`FigureLayout`] onto a [`Canvas`]: title, axes, the
//! registered plots in order, then the legend.

use crate::canvas::{Canvas, Justify, Span};
use crate::config::FigureConfig;
use crate::error::PlotResult;
use crate::layout::FigureLayout;
use crate::model::{LegendEntry, PlotEntry, PlotKind};
use crate::raster::LineSegment;

/// Header text of the legend box
const LEGEND_TITLE: &str = "Legend";

/// Convert a signed grid coordinate to a canvas index; negative coordinates
/// become an index the canvas rejects.
fn index(v: i64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

/// Draws one figure onto its own canvas
pub struct FigureRenderer<'a> {
    config: &'a FigureConfig,
    layout: &'a FigureLayout,
    canvas: Canvas,
}

impl<'a> FigureRenderer<'a> {
    /// Create a renderer with a blank canvas sized to `layout`
    pub fn new(config: &'a FigureConfig, layout: &'a FigureLayout) -> Self {
        Self {
            config,
            layout,
            canvas: Canvas::new(layout.width, layout.height),
        }
    }

    /// Run the full draw pipeline and return the finished canvas
    pub fn render(mut self, plots: &[PlotEntry], legend: &[LegendEntry]) -> PlotResult<Canvas> {
        self.draw_title()?;
        self.draw_x_axis()?;
        self.draw_y_axis()?;
        for plot in plots {
            self.draw_plot(plot)?;
        }
        if !legend.is_empty() {
            self.draw_legend(plots, legend)?;
        }
        Ok(self.canvas)
    }

    fn put(&mut self, row: i64, col: i64, ch: char) -> PlotResult<()> {
        self.canvas.set(index(row), index(col), ch)
    }

    fn draw_title(&mut self) -> PlotResult<()> {
        let Some(title) = &self.config.title else {
            return Ok(());
        };
        let width = self.canvas.width();
        if title.chars().count() > width {
            tracing::warn!(target: "tplot::render", title = %title, width, "title truncated");
        }
        self.canvas.center(&Span::row(0, 0..width), title)
    }

    fn draw_x_axis(&mut self) -> PlotResult<()> {
        let layout = self.layout;
        let positions = layout.x.tick_positions()?;
        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            return Ok(());
        };
        let start = layout.col(first);
        let end = layout.col(last);
        let axis_row = layout.axis_row();
        let label_row = axis_row + 1;

        self.canvas
            .fill(&Span::row(axis_row, index(start)..index(end + 1)), '-')?;
        self.canvas.set(axis_row, layout.axis_col(), '+')?;

        let budget = self.config.xticklabel_length as i64;
        let before = budget / 2;
        let after = budget - before;
        for (label, pos) in layout.x.labels.iter().zip(&positions) {
            let pos = layout.col(*pos);
            self.put(axis_row as i64, pos, '+')?;

            let (from, to, justify) = if pos == start {
                (pos, pos + after, Justify::Left)
            } else if pos == end {
                (pos - before, pos + 1, Justify::Right)
            } else {
                (pos - before, pos + after, Justify::Center)
            };
            if let Some(span) = self.canvas.clip_row(label_row, from, to) {
                self.canvas.place(&span, label, justify, ' ')?;
            }
        }

        if let Some(xlabel) = &self.config.xlabel {
            let span = Span::row(layout.height - 1, index(start)..index(end + 1));
            if xlabel.chars().count() > span.len() {
                tracing::warn!(target: "tplot::render", xlabel = %xlabel, "x label truncated");
            }
            self.canvas.center(&span, xlabel)?;
        }
        Ok(())
    }

    fn draw_y_axis(&mut self) -> PlotResult<()> {
        let layout = self.layout;
        let positions = layout.y.tick_positions()?;
        let (Some(&first), Some(&last)) = (positions.first(), positions.last()) else {
            return Ok(());
        };
        let top = index(layout.row(last));
        let bottom = index(layout.row(first));
        let axis_col = layout.axis_col();
        let label_col = layout.yax_width - 1 - layout.y.widest_label();

        self.canvas
            .fill(&Span::column(axis_col, top..bottom + 1), '|')?;

        for (label, pos) in layout.y.labels.iter().zip(&positions) {
            let row = index(layout.row(*pos));
            self.canvas.set(row, axis_col, '+')?;
            self.canvas.rjust(&Span::row(row, label_col..axis_col), label)?;
        }

        if let Some(ylabel) = &self.config.ylabel {
            let span = Span::column(0, top..bottom + 1);
            if ylabel.chars().count() > span.len() {
                tracing::warn!(target: "tplot::render", ylabel = %ylabel, "y label truncated");
            }
            self.canvas.center(&span, ylabel)?;
        }
        Ok(())
    }

    fn draw_plot(&mut self, plot: &PlotEntry) -> PlotResult<()> {
        let layout = self.layout;
        let cols: Vec<i64> = layout
            .x
            .scale
            .transform_all(&plot.x)?
            .into_iter()
            .map(|p| layout.col(p))
            .collect();
        let ups: Vec<f64> = layout.y.scale.transform_all(&plot.y)?;

        match plot.kind {
            PlotKind::Scatter => {
                for (col, up) in cols.iter().zip(&ups) {
                    self.put(layout.row(*up), *col, plot.marker)?;
                }
            }
            PlotKind::Line => {
                let points: Vec<(i64, i64)> = cols
                    .iter()
                    .zip(&ups)
                    .map(|(col, up)| (*col, up.round() as i64))
                    .collect();
                if let [only] = points.as_slice() {
                    self.put(layout.row(only.1 as f64), only.0, plot.marker)?;
                }
                for pair in points.windows(2) {
                    for (col, up) in LineSegment::new(pair[0], pair[1]) {
                        self.put(layout.row(up as f64), col, plot.marker)?;
                    }
                }
            }
            PlotKind::Bar => {
                let anchor = ups.iter().copied().fold(f64::INFINITY, f64::min);
                let base = layout.row(anchor);
                for (col, up) in cols.iter().zip(&ups) {
                    let top = layout.row(*up);
                    let span = Span::column(index(*col), index(top)..index(base + 1));
                    self.canvas.fill(&span, plot.marker)?;
                }
            }
            PlotKind::HBar => {
                let anchor = cols.iter().copied().min().unwrap_or(0);
                for (col, up) in cols.iter().zip(&ups) {
                    let row = layout.row(*up);
                    let span = Span::row(index(row), index(anchor)..index(*col + 1));
                    self.canvas.fill(&span, plot.marker)?;
                }
            }
        }
        Ok(())
    }

    /// Extreme data positions over all plots: `(left, right, low, high)`
    fn data_extent(&self, plots: &[PlotEntry]) -> PlotResult<(f64, f64, f64, f64)> {
        let mut extent = (
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );
        for plot in plots {
            for x in self.layout.x.scale.transform_all(&plot.x)? {
                extent.0 = extent.0.min(x);
                extent.1 = extent.1.max(x);
            }
            for y in self.layout.y.scale.transform_all(&plot.y)? {
                extent.2 = extent.2.min(y);
                extent.3 = extent.3.max(y);
            }
        }
        Ok(extent)
    }

    fn draw_legend(&mut self, plots: &[PlotEntry], legend: &[LegendEntry]) -> PlotResult<()> {
        let layout = self.layout;
        let canvas_width = self.canvas.width();
        let canvas_height = self.canvas.height();
        if canvas_height < 2 {
            tracing::warn!(target: "tplot::render", canvas_height, "no room for the legend");
            return Ok(());
        }

        let mut lines: Vec<String> = legend.iter().map(LegendEntry::text).collect();
        let room = canvas_height - 2;
        if lines.len() > room {
            tracing::warn!(
                target: "tplot::render",
                entries = lines.len(),
                shown = room,
                "legend truncated to canvas height"
            );
            lines.truncate(room);
        }
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut width = (widest + 2).max(LEGEND_TITLE.len() + 2);
        let height = lines.len() + 2;

        if width > canvas_width {
            tracing::warn!(
                target: "tplot::render",
                width,
                canvas_width,
                "legend truncated to canvas width"
            );
            width = canvas_width;
        }

        let (left_pos, right_pos, low_pos, high_pos) = self.data_extent(plots)?;
        let loc = self.config.legend_loc;
        let top = if loc.is_top() {
            layout.row(high_pos)
        } else {
            layout.row(low_pos) - height as i64 + 1
        };
        let left = if loc.is_right() {
            layout.col(right_pos) - width as i64 + 1
        } else {
            layout.col(left_pos)
        };
        let top = top.clamp(0, (canvas_height - height) as i64) as usize;
        let left = left.clamp(0, (canvas_width - width) as i64) as usize;
        let right = left + width - 1;

        tracing::trace!(target: "tplot::render", top, left, width, height, %loc, "legend placed");

        let inner = left + 1..right;
        self.canvas.set(top, left, '+')?;
        self.canvas
            .place(&Span::row(top, inner.clone()), LEGEND_TITLE, Justify::Center, '-')?;
        self.canvas.set(top, right, '+')?;

        for (i, line) in lines.iter().enumerate() {
            let row = top + 1 + i;
            self.canvas.set(row, left, '|')?;
            self.canvas.ljust(&Span::row(row, inner.clone()), line)?;
            self.canvas.set(row, right, '|')?;
        }

        let bottom = top + height - 1;
        self.canvas.set(bottom, left, '+')?;
        self.canvas.fill(&Span::row(bottom, inner), '-')?;
        self.canvas.set(bottom, right, '+')
    }
}
