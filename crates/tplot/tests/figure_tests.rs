//! Integration tests for figure rendering
//!
//! These drive the public API end to end: register plots, render, and
//! inspect the resulting character grid.

use tplot::{Figure, FigureConfig, LegendLoc, PlotError, PlotStyle};

fn figure(width: usize, height: usize) -> Figure {
    Figure::new(FigureConfig::new().with_size(width, height)).unwrap()
}

fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[test]
fn test_render_fits_canvas_exactly() {
    let mut fig = figure(20, 10);
    fig.scatter([1, 2, 3], [1, 2, 3], PlotStyle::new()).unwrap();

    let text = fig.render().unwrap();
    let rows = lines(&text);
    assert_eq!(rows.len(), 10);
    for row in rows {
        assert_eq!(row.chars().count(), 20);
    }
}

#[test]
fn test_golden_scatter() {
    let mut fig = figure(20, 8);
    fig.scatter([0, 10], [0, 10], PlotStyle::new()).unwrap();

    let expected = [
        "10+                o",
        "  |                 ",
        " 5+                 ",
        "  |                 ",
        "  |                 ",
        " 0+o                ",
        "  ++---------------+",
        "   0              10",
    ]
    .join("\n");
    assert_eq!(fig.render().unwrap(), expected);
}

#[test]
fn test_mismatched_lengths_rejected() {
    let mut fig = figure(40, 12);
    let result = fig.scatter([1, 2], [1, 2, 3], PlotStyle::new());
    assert!(matches!(result, Err(PlotError::MismatchedLength { .. })));
    assert_eq!(fig.plots().len(), 0);

    // The figure stays usable after a rejected registration.
    fig.scatter([1, 2, 3], [1, 2, 3], PlotStyle::new()).unwrap();
    assert_eq!(fig.plots().len(), 1);
    assert!(fig.render().is_ok());
}

#[test]
fn test_render_is_idempotent() {
    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(50, 16)
            .with_title("Idempotent")
            .with_xlabel("x")
            .with_ylabel("y"),
    )
    .unwrap();
    fig.line([0.0, 1.5, 3.0], [2.0, -1.0, 4.0], PlotStyle::new().with_label("a"))
        .unwrap();
    fig.scatter([0.5, 2.5], [0.0, 3.0], PlotStyle::new().with_label("b"))
        .unwrap();

    let first = fig.render().unwrap();
    let second = fig.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_legend_top_right() {
    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(60, 20)
            .with_legend_loc(LegendLoc::TopRight),
    )
    .unwrap();
    fig.line([0, 1, 2, 3], [0, 1, 4, 9], PlotStyle::new().with_label("alpha"))
        .unwrap();
    fig.line(
        [0, 1, 2, 3],
        [9, 4, 1, 0],
        PlotStyle::new().with_marker("o").with_label("beta"),
    )
    .unwrap();

    let text = fig.render().unwrap();
    let rows = lines(&text);
    let header = rows
        .iter()
        .position(|r| r.ends_with("+Legend-+"))
        .expect("legend header");
    assert!(header < rows.len() / 2, "legend should be in the upper half");
    assert!(rows[header + 1].ends_with("|* alpha|"));
    assert!(rows[header + 2].ends_with("|o beta |"));
    assert!(rows[header + 3].ends_with("+-------+"));
}

#[test]
fn test_legend_bottom_left() {
    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(60, 20)
            .with_legend_loc(LegendLoc::BottomLeft),
    )
    .unwrap();
    fig.bar([1, 2, 3], [5, 3, 8], PlotStyle::new().with_label("counts"))
        .unwrap();

    let text = fig.render().unwrap();
    let rows = lines(&text);
    let footer = rows
        .iter()
        .rposition(|r| r.contains("+--------+"))
        .expect("legend footer");
    assert!(footer >= rows.len() / 2, "legend should be in the lower half");
    assert!(rows[footer - 1].contains("|# counts|"));
    assert!(rows[footer - 2].contains("+-Legend-+"));
}

#[test]
fn test_categorical_axes() {
    let mut fig = figure(40, 12);
    fig.bar(["apples", "pears", "plums"], [3, 7, 5], PlotStyle::new())
        .unwrap();
    let text = fig.render().unwrap();
    // Outermost labels get half the label budget; inner ones the full budget.
    assert!(text.contains("appl"));
    assert!(text.contains("pears"));
    assert!(text.contains("plum"));

    let mut fig = figure(40, 12);
    fig.hbar([4, 9], ["low", "high"], PlotStyle::new().with_marker("="))
        .unwrap();
    let text = fig.render().unwrap();
    assert!(text.contains("low+"));
    assert!(text.contains("high+"));
    assert!(text.contains('='));
}

#[test]
fn test_later_plots_overwrite_earlier() {
    let mut fig = figure(30, 10);
    fig.scatter([0, 10], [0, 10], PlotStyle::new().with_marker("a"))
        .unwrap();
    fig.scatter([0, 10], [0, 10], PlotStyle::new().with_marker("b"))
        .unwrap();
    let text = fig.render().unwrap();
    assert!(!text.contains('a'));
    assert_eq!(text.matches('b').count(), 2);
}

#[test]
fn test_long_title_is_truncated() {
    let title = "An extremely long title that cannot possibly fit";
    let mut fig = Figure::new(FigureConfig::new().with_size(20, 10).with_title(title)).unwrap();
    fig.scatter([1, 2], [1, 2], PlotStyle::new()).unwrap();
    let text = fig.render().unwrap();
    assert_eq!(lines(&text)[0], &title[..20]);
}

#[test]
fn test_render_without_plots_fails() {
    let fig = figure(20, 10);
    assert!(matches!(fig.render(), Err(PlotError::EmptyData)));
}

#[test]
fn test_invalid_configuration() {
    assert!(matches!(
        Figure::new(FigureConfig::new().with_size(10, 0)),
        Err(PlotError::Configuration(_))
    ));
    assert!(matches!(
        Figure::new(FigureConfig::new().with_xticklabel_length(0)),
        Err(PlotError::Configuration(_))
    ));
    assert!(matches!(
        "upperleft".parse::<LegendLoc>(),
        Err(PlotError::Configuration(_))
    ));
}

#[test]
fn test_single_value_series() {
    let mut fig = figure(30, 10);
    fig.line([5, 5], [2, 2], PlotStyle::new()).unwrap();
    let text = fig.render().unwrap();
    assert_eq!(text.matches('*').count(), 1);
}

#[test]
fn test_more_legend_entries_than_rows() {
    let mut fig = Figure::new(
        FigureConfig::new()
            .with_size(40, 10)
            .with_legend_loc(LegendLoc::TopLeft),
    )
    .unwrap();
    for i in 0..9 {
        fig.scatter([0, i], [i, 9], PlotStyle::new().with_label(format!("series {}", i)))
            .unwrap();
    }

    let text = fig.render().unwrap();
    let rows = lines(&text);
    assert_eq!(rows.len(), 10);
    assert!(rows[0].contains("Legend"));
    assert!(rows[8].contains("|o series 7|"));
    assert!(!text.contains("series 8"));
}

#[test]
fn test_span_beyond_f64_is_an_error() {
    let mut fig = figure(40, 12);
    fig.scatter([0.0, 1.0], [-1e308, 1e308], PlotStyle::new())
        .unwrap();
    assert!(matches!(
        fig.render(),
        Err(PlotError::DegenerateDomain { .. })
    ));
}
