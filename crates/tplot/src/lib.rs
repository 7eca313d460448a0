//! tplot - Character-grid plots for the terminal
//!
//! This crate provides:
//! - Scatter, line, bar and horizontal bar plots over numeric or
//!   categorical data
//! - Axes with "nice" tick values, labels, a title and a legend
//! - Output sized to the terminal, as a printable block of text
//!
//! ```
//! use tplot::{Figure, FigureConfig, PlotStyle};
//!
//! let mut fig = Figure::new(FigureConfig::new().with_size(30, 10)).unwrap();
//! fig.scatter([1, 2, 3], [1, 2, 3], PlotStyle::new()).unwrap();
//! println!("{}", fig.render().unwrap());
//! ```

mod canvas;
mod config;
mod error;
mod figure;
mod format;
mod layout;
mod model;
mod raster;
mod render;
mod scale;
mod ticks;

pub use canvas::*;
pub use config::*;
pub use error::*;
pub use figure::*;
pub use format::*;
pub use layout::*;
pub use model::*;
pub use raster::*;
pub use render::*;
pub use scale::*;
pub use ticks::*;
