//! Draws one figure per plot kind to the terminal.
//!
//! Run with `RUST_LOG=tplot=debug` to see layout and degradation events.

use tplot::{Figure, FigureConfig, LegendLoc, PlotStyle};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let xs: Vec<f64> = (0..40).map(|i| i as f64 / 4.0).collect();
    let sines: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let cosines: Vec<f64> = xs.iter().map(|x| x.cos()).collect();

    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(72, 20)
            .with_title("Trigonometry")
            .with_xlabel("radians")
            .with_ylabel("amplitude")
            .with_legend_loc(LegendLoc::BottomRight),
    )?;
    fig.line(&xs, &sines, PlotStyle::new().with_label("sin"))?;
    fig.scatter(&xs, &cosines, PlotStyle::new().with_marker("+").with_label("cos"))?;
    fig.show()?;

    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(60, 14)
            .with_title("Fruit sold")
            .with_legend_loc(LegendLoc::TopLeft),
    )?;
    fig.bar(
        ["apple", "pear", "plum", "fig"],
        [12, 7, 3, 9],
        PlotStyle::new().with_label("this week"),
    )?;
    fig.show()?;

    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(60, 10)
            .with_xlabel("requests/s"),
    )?;
    fig.hbar(
        [120, 340, 90],
        ["alpha", "beta", "gamma"],
        PlotStyle::new().with_marker("="),
    )?;
    fig.show()?;

    Ok(())
}
