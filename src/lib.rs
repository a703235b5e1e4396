//! Plotpad - an interactive terminal plotting surface.
//!
//! Plotpad shows one chart with a boxed pair of axes and lets the user
//! generate random sine-like waves, append points by hand, select axes, the curve
//! or the legend with the mouse, and zoom or pan the visible ranges.
//!
//! # Features
//!
//! - Random sine-like wave generator with a seedable random source
//! - Axis selection mirrored between opposite sides of the box
//! - Wheel zoom and range drag restricted by the selected axis
//! - Context menu and point entry dialog
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use plotpad::app::App;
//! use plotpad::config::ChartConfig;
//! use plotpad::menu::MenuAction;
//!
//! let mut app = App::new(ChartConfig::default(), Some(7));
//! app.perform(MenuAction::AddRandomGraph);
//!
//! let series = app.chart.series().unwrap();
//! assert_eq!(series.name, "New graph 0");
//! assert_eq!(series.len(), 50);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod config;
pub mod dialog;
pub mod error;
pub mod input;
pub mod menu;
pub mod ui;

pub use error::{PlotpadError, Result};
