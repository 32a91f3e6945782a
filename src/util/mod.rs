//! Utility functions.
//!
//! This module provides color mapping and layout settings shared by
//! the renderers.

mod colormaps;
mod layout_config;

pub use layout_config::{GridLayoutConfig, HeatmapLayoutConfig, LayoutConfig, PlotLayoutConfig};
